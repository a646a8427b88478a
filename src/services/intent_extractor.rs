// src/services/intent_extractor.rs
// DOCUMENTATION: First language model stage of the query pipeline
// PURPOSE: Turn free text into structured search parameters

use crate::errors::LocationError;
use crate::models::ExtractedIntent;
use crate::services::openai_client::{OpenAiClient, ResponseFormat};

pub const EXTRACTION_SYSTEM_PROMPT: &str =
    "You are a helpful assistant that extracts structured location information from natural language queries.";

/// Build the extraction prompt for a user query
pub fn build_extraction_prompt(query: &str) -> String {
    format!(
        r#"Extract location information from this query: "{query}"

Please analyze the query and identify:
1. Any location names mentioned (cities, countries, neighborhoods, etc.)
2. What type of place the user is looking for (restaurants, museums, parks, etc.)
3. Any filters or preferences from these categories:
   - Price level: "expensive", "cheap", "moderate", "luxury"
   - Rating: "highly rated", "5-star", "top-rated", "best"
   - Place type: "restaurant", "museum", "park", "hotel", "cafe", "shopping_mall", "tourist_attraction"
   - Open status: "open now", "open late", "24/7"
   - Distance: "within X km/miles", "nearby", "close to"
   - Popularity: "popular", "famous", "touristy", "hidden gem"
   - Language/Region: "Japanese", "Italian", "French", etc.

Return a JSON object with these fields:
{{
    "location": "The location name, if any, or empty string",
    "place_type": "The type of place the user is looking for, or 'places of interest' if unclear",
    "filters": ["list of specific filters from the categories above"],
    "search_query": "The full original query for fallback"
}}"#
    )
}

pub struct IntentExtractor;

impl IntentExtractor {
    /// Extract search intent from `query`
    /// DOCUMENTATION: Unusable model output falls back to a default intent.
    /// Failures of the model call itself propagate to the caller.
    pub async fn extract(llm: &OpenAiClient, query: &str) -> Result<ExtractedIntent, LocationError> {
        log::info!("OPENAI API CALL: Analyzing query to extract location information");

        let raw = llm
            .chat_completion(
                EXTRACTION_SYSTEM_PROMPT,
                &build_extraction_prompt(query),
                ResponseFormat::JsonObject,
            )
            .await?;

        let intent = ExtractedIntent::from_model_output(&raw, query);
        log::info!("Extracted information: {:?}", intent);

        Ok(intent)
    }
}
