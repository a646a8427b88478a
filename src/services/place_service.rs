// src/services/place_service.rs
// DOCUMENTATION: Place search and detail stages of the query pipeline
// PURPOSE: Compose geocoding, nearby search and bounded detail fetching

use crate::errors::LocationError;
use crate::models::PlaceRecord;
use crate::services::GoogleMapsClient;

/// Default nearby search radius in meters
pub const DEFAULT_SEARCH_RADIUS: u32 = 5_000;

/// Largest radius the nearby search accepts
pub const MAX_SEARCH_RADIUS: u32 = 50_000;

/// Number of leading search results considered for detail lookups
pub const MAX_DETAILED_PLACES: usize = 3;

/// Number of raw search results returned when no details were fetched
pub const MAX_SUMMARY_PLACES: usize = 5;

pub struct PlaceService;

impl PlaceService {
    /// Cap a search radius at MAX_SEARCH_RADIUS
    pub fn clamp_radius(radius: u32) -> u32 {
        if radius > MAX_SEARCH_RADIUS {
            log::warn!(
                "Radius {}m exceeds maximum allowed value of {}m. Capping at {}m.",
                radius,
                MAX_SEARCH_RADIUS,
                MAX_SEARCH_RADIUS
            );
            MAX_SEARCH_RADIUS
        } else {
            radius
        }
    }

    /// Search for places matching `query`, optionally around `location`
    /// DOCUMENTATION: A location that cannot be geocoded is ignored and the
    /// search runs unscoped. A non-OK search status yields an empty list.
    pub async fn search_places(
        maps: &GoogleMapsClient,
        query: &str,
        location: Option<&str>,
        radius: u32,
    ) -> Result<Vec<PlaceRecord>, LocationError> {
        log::info!(
            "Searching for places with query='{}', location='{}', radius={}",
            query,
            location.unwrap_or_default(),
            radius
        );

        let center = match location.map(str::trim).filter(|l| !l.is_empty()) {
            Some(location) => maps.geocode(location).await?,
            None => None,
        };

        let radius = Self::clamp_radius(radius);
        let keyword = if query.is_empty() { None } else { Some(query) };

        maps.nearby_search(keyword, center, radius).await
    }

    /// Place identifiers eligible for a detail lookup
    /// DOCUMENTATION: Only the first MAX_DETAILED_PLACES results are
    /// considered; results without a string `place_id` are skipped
    pub fn detail_candidates(places: &[PlaceRecord]) -> Vec<&str> {
        places
            .iter()
            .take(MAX_DETAILED_PLACES)
            .filter_map(|place| place.get("place_id").and_then(|id| id.as_str()))
            .collect()
    }

    /// Fetch details for the detail candidates, one after another
    pub async fn fetch_details(
        maps: &GoogleMapsClient,
        places: &[PlaceRecord],
    ) -> Result<Vec<PlaceRecord>, LocationError> {
        let mut detailed = Vec::new();

        for place_id in Self::detail_candidates(places) {
            log::info!("Getting details for place: {}", place_id);
            detailed.push(maps.get_place_details(place_id).await?);
        }

        Ok(detailed)
    }

    /// Records handed to the answer stage and returned to the caller
    /// DOCUMENTATION: Detail records when any were fetched, else the first
    /// MAX_SUMMARY_PLACES search results
    pub fn select_locations(
        detailed: Vec<PlaceRecord>,
        mut places: Vec<PlaceRecord>,
    ) -> Vec<PlaceRecord> {
        if !detailed.is_empty() {
            return detailed;
        }

        places.truncate(MAX_SUMMARY_PLACES);
        places
    }
}
