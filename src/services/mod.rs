// src/services/mod.rs
// DOCUMENTATION: Services module organization
// PURPOSE: Re-export service components

pub mod google_maps_client;
pub mod intent_extractor;
pub mod location_service;
pub mod openai_client;
pub mod place_service;

pub use google_maps_client::GoogleMapsClient;
pub use intent_extractor::IntentExtractor;
pub use location_service::LocationService;
pub use openai_client::{OpenAiClient, ResponseFormat};
pub use place_service::PlaceService;
