// src/models/location.rs
// DOCUMENTATION: Place records and the final query answer
// PURPOSE: Shapes returned to API consumers

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Place record exactly as returned by the maps provider
/// DOCUMENTATION: Fields vary between nearby search summaries and place
/// details, so records are kept as untyped JSON objects
pub type PlaceRecord = Map<String, Value>;

/// Directions payload (routes, legs, status) as returned by the provider
pub type DirectionsPayload = Map<String, Value>;

/// Answer to a natural language location query
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationResponse {
    /// Natural language answer generated from the place data
    pub response: String,
    /// Detailed records if any were fetched, else up to 5 search results
    #[serde(default)]
    pub locations: Vec<PlaceRecord>,
}

/// Transportation mode accepted by the directions lookup
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TravelMode {
    #[default]
    Driving,
    Walking,
    Bicycling,
    Transit,
}

impl TravelMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            TravelMode::Driving => "driving",
            TravelMode::Walking => "walking",
            TravelMode::Bicycling => "bicycling",
            TravelMode::Transit => "transit",
        }
    }
}
