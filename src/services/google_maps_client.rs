// src/services/google_maps_client.rs
// DOCUMENTATION: Google Maps Platform client
// PURPOSE: Geocoding, nearby search, place details and directions lookups

use crate::errors::LocationError;
use crate::models::{DirectionsPayload, PlaceRecord, TravelMode};
use geo_types::Point;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Default base URL of the Google Maps web services
pub const DEFAULT_MAPS_BASE_URL: &str = "https://maps.googleapis.com/maps/api";

/// Fields requested from Place Details
pub const PLACE_DETAIL_FIELDS: &str = "name,formatted_address,formatted_phone_number,website,rating,opening_hours,reviews,photos,price_level,geometry";

/// Google Maps API client
/// DOCUMENTATION: Provider-reported failures (status other than "OK") degrade
/// to empty results. Transport failures and non-2xx responses are errors.
#[derive(Debug, Clone)]
pub struct GoogleMapsClient {
    /// HTTP client for making requests
    client: Client,
    /// Google Maps API key
    api_key: String,
    /// Base URL for Google Maps web services
    base_url: String,
}

/// Response from the Geocoding API
#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    status: String,
    #[serde(default)]
    results: Vec<GeocodeResult>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResult {
    geometry: GeocodeGeometry,
}

#[derive(Debug, Deserialize)]
struct GeocodeGeometry {
    location: LatLng,
}

#[derive(Debug, Deserialize)]
struct LatLng {
    lat: f64,
    lng: f64,
}

/// Response from Nearby Search
#[derive(Debug, Deserialize)]
struct NearbySearchResponse {
    status: String,
    #[serde(default)]
    results: Vec<PlaceRecord>,
}

/// Response from Place Details
#[derive(Debug, Deserialize)]
struct PlaceDetailsResponse {
    status: String,
    #[serde(default)]
    result: Option<PlaceRecord>,
}

impl GoogleMapsClient {
    /// Create new Google Maps API client
    #[allow(dead_code)]
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_MAPS_BASE_URL.to_string())
    }

    /// Create a client against a custom base URL (proxies, tests)
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Resolve a free text location to coordinates
    /// DOCUMENTATION: Returns None when the provider reports a non-OK status
    /// or no results, so callers can continue without a location bias
    ///
    /// # Returns
    /// Point with x = longitude, y = latitude
    pub async fn geocode(&self, location: &str) -> Result<Option<Point<f64>>, LocationError> {
        log::info!("GOOGLE MAPS API CALL: Geocoding location '{}'", location);

        let params = [("address", location), ("key", self.api_key.as_str())];
        let data: GeocodeResponse = self.get_json("geocode/json", &params).await?;

        match data.results.first() {
            Some(first) if data.status == "OK" => {
                let LatLng { lat, lng } = &first.geometry.location;
                let (lat, lng) = (*lat, *lng);
                log::info!(
                    "GOOGLE MAPS API RESPONSE: Geocoded '{}' to coordinates ({}, {})",
                    location,
                    lat,
                    lng
                );
                Ok(Some(Point::new(lng, lat)))
            }
            _ => {
                log::warn!(
                    "GOOGLE MAPS API RESPONSE: Failed to geocode '{}'. Status: {}",
                    location,
                    data.status
                );
                Ok(None)
            }
        }
    }

    /// Perform nearby search for establishments
    /// DOCUMENTATION: Searches places of type "establishment"
    ///
    /// # Arguments
    /// * `keyword` - Optional keyword, skipped when empty
    /// * `center` - Optional location bias; without it the provider decides scoping
    /// * `radius` - Search radius in meters, already capped by the caller
    ///
    /// # Returns
    /// Provider results verbatim, or an empty list on a non-OK status
    pub async fn nearby_search(
        &self,
        keyword: Option<&str>,
        center: Option<Point<f64>>,
        radius: u32,
    ) -> Result<Vec<PlaceRecord>, LocationError> {
        let mut params = vec![
            ("key", self.api_key.clone()),
            ("radius", radius.to_string()),
            ("type", "establishment".to_string()),
        ];

        if let Some(point) = center {
            params.push(("location", format!("{},{}", point.y(), point.x())));
        }

        if let Some(kw) = keyword.filter(|kw| !kw.is_empty()) {
            params.push(("keyword", kw.to_string()));
        }

        log::info!(
            "GOOGLE MAPS API CALL: Nearby search keyword={:?}, center={:?}, radius={}",
            keyword,
            center.map(|p| (p.y(), p.x())),
            radius
        );

        let data: NearbySearchResponse = self.get_json("place/nearbysearch/json", &params).await?;

        if data.status == "OK" {
            log::info!(
                "GOOGLE MAPS API RESPONSE: Found {} places within {}m radius",
                data.results.len(),
                radius
            );
            Ok(data.results)
        } else {
            log::warn!(
                "GOOGLE MAPS API RESPONSE: No places found. Status: {}",
                data.status
            );
            Ok(Vec::new())
        }
    }

    /// Get detailed information about a specific place
    ///
    /// # Returns
    /// The `result` object, or an empty record on a non-OK status
    pub async fn get_place_details(&self, place_id: &str) -> Result<PlaceRecord, LocationError> {
        log::info!(
            "GOOGLE MAPS API CALL: Getting details for place_id='{}'",
            place_id
        );

        let params = [
            ("place_id", place_id),
            ("key", self.api_key.as_str()),
            ("fields", PLACE_DETAIL_FIELDS),
        ];
        let data: PlaceDetailsResponse = self.get_json("place/details/json", &params).await?;

        match data.result {
            Some(result) if data.status == "OK" => {
                log::info!(
                    "GOOGLE MAPS API RESPONSE: Successfully got details for place '{}'",
                    place_id
                );
                Ok(result)
            }
            _ => {
                log::warn!(
                    "GOOGLE MAPS API RESPONSE: Failed to get place details. Status: {}",
                    data.status
                );
                Ok(PlaceRecord::new())
            }
        }
    }

    /// Get directions between two locations
    ///
    /// # Returns
    /// Full provider payload, or an empty record on a non-OK status
    pub async fn get_directions(
        &self,
        origin: &str,
        destination: &str,
        mode: TravelMode,
    ) -> Result<DirectionsPayload, LocationError> {
        log::info!(
            "GOOGLE MAPS API CALL: Getting directions from '{}' to '{}' via {}",
            origin,
            destination,
            mode.as_str()
        );

        let params = [
            ("origin", origin),
            ("destination", destination),
            ("mode", mode.as_str()),
            ("key", self.api_key.as_str()),
        ];
        let data: DirectionsPayload = self.get_json("directions/json", &params).await?;

        let status = data
            .get("status")
            .and_then(|s| s.as_str())
            .unwrap_or("UNKNOWN");

        if status == "OK" {
            log::info!("GOOGLE MAPS API RESPONSE: Successfully got directions");
            Ok(data)
        } else {
            log::warn!(
                "GOOGLE MAPS API RESPONSE: Failed to get directions. Status: {}",
                status
            );
            Ok(DirectionsPayload::new())
        }
    }

    /// Issue a GET request and decode the JSON body
    async fn get_json<T, P>(&self, endpoint: &str, params: &P) -> Result<T, LocationError>
    where
        T: DeserializeOwned,
        P: serde::Serialize + ?Sized,
    {
        let url = format!("{}/{}", self.base_url, endpoint);

        let response = self
            .client
            .get(&url)
            .query(params)
            .send()
            .await
            .map_err(|e| {
                // Request URLs carry the API key
                let e = e.without_url();
                log::error!("Google Maps API request failed: {}", e);
                LocationError::ExternalApiError(format!("Request failed: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            log::error!("Google Maps API error {}: {}", status, body);
            return Err(LocationError::ExternalApiError(format!(
                "API error {}: {}",
                status, body
            )));
        }

        response.json::<T>().await.map_err(|e| {
            let e = e.without_url();
            log::error!("Failed to parse Google Maps response: {}", e);
            LocationError::ExternalApiError(format!("Parse error: {}", e))
        })
    }
}
