// src/services/location_service.rs
// DOCUMENTATION: End-to-end handling of a natural language location query
// PURPOSE: extract intent -> search -> fetch details -> synthesize answer

use crate::errors::LocationError;
use crate::models::{LocationResponse, PlaceRecord};
use crate::services::{GoogleMapsClient, IntentExtractor, OpenAiClient, PlaceService, ResponseFormat};
use uuid::Uuid;

pub const RESPONSE_SYSTEM_PROMPT: &str =
    "You are a helpful assistant that provides information about locations.";

/// Build the answer prompt from the query and the selected place records
pub fn build_response_prompt(query: &str, places: &[PlaceRecord]) -> Result<String, LocationError> {
    let context = serde_json::to_string_pretty(places)
        .map_err(|e| LocationError::ProcessingError(format!("Failed to render place data: {}", e)))?;

    Ok(format!(
        r#"Based on the query: "{query}"

And the following location data:
{context}

Generate a helpful, natural language response that answers the query.
Include relevant details like names, addresses, ratings, and any other useful information.
Format the response in a user-friendly way."#
    ))
}

pub struct LocationService;

impl LocationService {
    /// Answer a natural language location query
    /// DOCUMENTATION: Stages run strictly one after another. Provider-reported
    /// failures degrade inside the stages; any error that escapes a stage
    /// aborts the whole request as a ProcessingError with no partial result.
    pub async fn ask_for_location(
        maps: &GoogleMapsClient,
        llm: &OpenAiClient,
        query: &str,
        radius: u32,
        request_id: Uuid,
    ) -> Result<LocationResponse, LocationError> {
        Self::run_pipeline(maps, llm, query, radius, request_id)
            .await
            .map_err(|e| {
                log::error!("[{}] Error processing request: {}", request_id, e);
                match e {
                    LocationError::ProcessingError(msg) => LocationError::ProcessingError(msg),
                    other => LocationError::ProcessingError(other.to_string()),
                }
            })
    }

    async fn run_pipeline(
        maps: &GoogleMapsClient,
        llm: &OpenAiClient,
        query: &str,
        radius: u32,
        request_id: Uuid,
    ) -> Result<LocationResponse, LocationError> {
        let intent = IntentExtractor::extract(llm, query).await?;

        log::info!(
            "[{}] Searching places with query='{}', location='{}'",
            request_id,
            intent.search_query,
            intent.location
        );
        let places =
            PlaceService::search_places(maps, &intent.search_query, intent.location(), radius)
                .await?;

        let detailed = PlaceService::fetch_details(maps, &places).await?;
        log::info!(
            "[{}] {} search results, {} detailed",
            request_id,
            places.len(),
            detailed.len()
        );

        let locations = PlaceService::select_locations(detailed, places);

        log::info!("OPENAI API CALL: Generating natural language response");
        let prompt = build_response_prompt(query, &locations)?;
        let response = llm
            .chat_completion(RESPONSE_SYSTEM_PROMPT, &prompt, ResponseFormat::Text)
            .await?;
        log::info!("OPENAI API RESPONSE: Generated natural language response");

        Ok(LocationResponse {
            response,
            locations,
        })
    }
}
