// src/models/tools.rs
// DOCUMENTATION: Query parameters and payloads of the maps tool endpoints

use super::{PlaceRecord, TravelMode};
use serde::{Deserialize, Serialize};

/// GET /tools/search-places parameters
#[derive(Debug, Deserialize)]
pub struct SearchPlacesParams {
    /// Search keyword (e.g., "restaurants", "parks")
    pub query: String,
    /// Location to search around (e.g., "Cracow, Poland")
    pub location: Option<String>,
    /// Search radius in meters, capped at 50000
    pub radius: Option<u32>,
}

/// GET /tools/search-places response
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchPlacesResponse {
    pub places: Vec<PlaceRecord>,
}

/// GET /tools/directions parameters
#[derive(Debug, Deserialize)]
pub struct DirectionsParams {
    /// Starting location (address or "lat,lng")
    pub origin: String,
    /// Destination location (address or "lat,lng")
    pub destination: String,
    #[serde(default)]
    pub mode: TravelMode,
}
