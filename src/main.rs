// src/main.rs
// DOCUMENTATION: Application entry point
// PURPOSE: Initialize config, provider clients, and start HTTP server

mod config;
mod errors;
mod handlers;
mod models;
mod services;

use actix_web::{middleware::Logger, web, App, HttpServer};
use config::{mask_secret, Config};
use dotenv::dotenv;
use services::{GoogleMapsClient, OpenAiClient};
use std::io;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 1. Load environment variables
    dotenv().ok();

    // 2. Load configuration
    let config = Config::from_env();

    // 3. Initialize logging
    if std::env::var("RUST_LOG").is_err() {
        let log_level = if !config.log_level.is_empty() {
            config.log_level.as_str()
        } else {
            "info,actix_web=info"
        };
        std::env::set_var("RUST_LOG", log_level);
    }
    env_logger::init();

    log::info!("Starting AI Maps API server...");
    log::info!("Environment: {}", config.environment);

    // 4. Validate provider credentials; requests are rejected while they are missing
    match config.validate() {
        Ok(()) => {
            log::info!("Settings loaded successfully");
            log::info!(
                "Google Maps API Key: {}",
                mask_secret(&config.google_maps_api_key)
            );
            log::info!("OpenAI API Key: {}", mask_secret(&config.openai_api_key));
        }
        Err(e) => {
            log::error!("Error loading settings: {}", e);
            log::error!("Please create a .env file with OPENAI_API_KEY and GOOGLE_MAPS_API_KEY");
        }
    }

    // 5. Build provider clients shared by all workers
    let maps_client = web::Data::new(GoogleMapsClient::with_base_url(
        config.google_maps_api_key.clone(),
        config.google_maps_base_url.clone(),
    ));
    let llm_client = web::Data::new(OpenAiClient::with_base_url(
        config.openai_api_key.clone(),
        config.openai_base_url.clone(),
        config.openai_model.clone(),
    ));
    log::info!("Language model: {}", llm_client.model());

    // 6. Start HTTP server
    let server_addr = format!("{}:{}", config.server_address, config.server_port);
    log::info!("Server Address: {}", server_addr);
    let config = web::Data::new(config);

    HttpServer::new(move || {
        App::new()
            // Application state (config and provider clients)
            .app_data(config.clone())
            .app_data(maps_client.clone())
            .app_data(llm_client.clone())
            // Middleware
            .wrap(Logger::default())
            .wrap(actix_web::middleware::Compress::default())
            // Routes
            .configure(handlers::health_config)
            .configure(handlers::locations_config)
            .configure(handlers::tools_config)
    })
    .bind(&server_addr)?
    .run()
    .await
}
