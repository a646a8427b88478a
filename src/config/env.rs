// src/config/env.rs
// DOCUMENTATION: Environment variable management
// PURPOSE: Load and validate configuration from .env files

use crate::services::google_maps_client::DEFAULT_MAPS_BASE_URL;
use crate::services::openai_client::{DEFAULT_OPENAI_BASE_URL, DEFAULT_OPENAI_MODEL};
use crate::services::place_service::DEFAULT_SEARCH_RADIUS;
use dotenv::dotenv;
use std::env;

/// Application configuration loaded from environment variables
/// DOCUMENTATION: Centralizes all configuration in one struct
/// Load with Config::from_env() at application startup
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address (e.g., "0.0.0.0")
    pub server_address: String,

    /// Server listen port (default 8000)
    pub server_port: u16,

    /// Environment: development, staging, production
    pub environment: String,

    /// Log level: debug, info, warn, error
    pub log_level: String,

    /// OpenAI API key used for intent extraction and answer synthesis
    pub openai_api_key: String,

    /// Google Maps Platform API key
    pub google_maps_api_key: String,

    /// Chat completion model name
    pub openai_model: String,

    /// Base URL of the OpenAI-compatible API
    pub openai_base_url: String,

    /// Base URL of the Google Maps web services
    pub google_maps_base_url: String,

    /// Nearby search radius in meters used by the query pipeline
    pub default_search_radius: u32,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server_address: "0.0.0.0".to_string(),
            server_port: 8000,
            environment: "development".to_string(),
            log_level: "info".to_string(),
            openai_api_key: String::new(),
            google_maps_api_key: String::new(),
            openai_model: DEFAULT_OPENAI_MODEL.to_string(),
            openai_base_url: DEFAULT_OPENAI_BASE_URL.to_string(),
            google_maps_base_url: DEFAULT_MAPS_BASE_URL.to_string(),
            default_search_radius: DEFAULT_SEARCH_RADIUS,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    /// DOCUMENTATION: Reads from .env or process environment
    /// Called once at application startup
    pub fn from_env() -> Self {
        // Load .env file if it exists
        dotenv().ok();

        let defaults = Config::default();

        Config {
            server_address: env::var("SERVER_ADDRESS").unwrap_or(defaults.server_address),

            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|port| port.parse().ok())
                .unwrap_or(defaults.server_port),

            environment: env::var("ENVIRONMENT").unwrap_or(defaults.environment),

            log_level: env::var("LOG_LEVEL").unwrap_or(defaults.log_level),

            openai_api_key: env::var("OPENAI_API_KEY").unwrap_or_default(),

            google_maps_api_key: env::var("GOOGLE_MAPS_API_KEY").unwrap_or_default(),

            openai_model: env::var("OPENAI_MODEL").unwrap_or(defaults.openai_model),

            openai_base_url: env::var("OPENAI_BASE_URL").unwrap_or(defaults.openai_base_url),

            google_maps_base_url: env::var("GOOGLE_MAPS_BASE_URL")
                .unwrap_or(defaults.google_maps_base_url),

            default_search_radius: env::var("DEFAULT_SEARCH_RADIUS")
                .ok()
                .and_then(|radius| radius.parse().ok())
                .unwrap_or(defaults.default_search_radius),
        }
    }

    /// Validate critical configuration
    /// DOCUMENTATION: Both provider keys are required to answer queries.
    /// A failure here is logged at startup; requests are then rejected one by one.
    pub fn validate(&self) -> Result<(), String> {
        let mut missing = Vec::new();

        if self.openai_api_key.trim().is_empty() {
            missing.push("OPENAI_API_KEY");
        }

        if self.google_maps_api_key.trim().is_empty() {
            missing.push("GOOGLE_MAPS_API_KEY");
        }

        if missing.is_empty() {
            Ok(())
        } else {
            Err(format!("missing required settings: {}", missing.join(", ")))
        }
    }

    /// Whether both provider keys are present
    pub fn credentials_configured(&self) -> bool {
        self.validate().is_ok()
    }

    /// Whether the maps key alone is present (enough for the maps tools)
    pub fn maps_configured(&self) -> bool {
        !self.google_maps_api_key.trim().is_empty()
    }
}

/// Mask a secret for logging, keeping the first 5 and last 4 characters
pub fn mask_secret(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    if chars.len() <= 9 {
        return "*".repeat(chars.len());
    }

    let head: String = chars[..5].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}...{}", head, tail)
}
