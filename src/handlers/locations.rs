// src/handlers/locations.rs
// DOCUMENTATION: HTTP handler for natural language location queries
// PURPOSE: Parse requests, call the query pipeline, return responses

use crate::config::Config;
use crate::errors::LocationError;
use crate::models::LocationQuery;
use crate::services::{GoogleMapsClient, LocationService, OpenAiClient};
use actix_web::{web, HttpResponse, Responder};
use uuid::Uuid;
use validator::Validate;

/// POST /ask-for-location
/// Answer a natural language query about places
///
/// Example query: "What are the top museums in Cracow?"
pub async fn ask_for_location(
    config: web::Data<Config>,
    maps: web::Data<GoogleMapsClient>,
    llm: web::Data<OpenAiClient>,
    req: web::Json<LocationQuery>,
) -> Result<impl Responder, LocationError> {
    let request_id = Uuid::new_v4();
    log::info!("[{}] Received query: '{}'", request_id, req.query);

    if !config.credentials_configured() {
        log::error!("[{}] API keys not configured", request_id);
        return Err(LocationError::ApiKeysNotConfigured);
    }

    if let Err(e) = req.validate() {
        return Err(LocationError::ValidationError(e.to_string()));
    }

    let response = LocationService::ask_for_location(
        maps.get_ref(),
        llm.get_ref(),
        &req.query,
        config.default_search_radius,
        request_id,
    )
    .await?;

    log::info!(
        "[{}] Answered with {} locations",
        request_id,
        response.locations.len()
    );

    Ok(HttpResponse::Ok().json(response))
}

/// JSON extractor settings: malformed bodies become INVALID_INPUT errors
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(16 * 1024)
        .error_handler(|err, _req| {
            log::warn!("Rejected request body: {}", err);
            LocationError::InvalidInput(err.to_string()).into()
        })
}

/// Configuration for location query routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .route("/ask-for-location", web::post().to(ask_for_location));
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use mockito::{Matcher, Server};
    use serde_json::{json, Value};

    fn configured() -> Config {
        Config {
            openai_api_key: "sk-test-1234567890".to_string(),
            google_maps_api_key: "AIza-test-0987654321".to_string(),
            ..Config::default()
        }
    }

    macro_rules! app_with {
        ($config:expr, $maps:expr, $llm:expr) => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new($config))
                    .app_data(web::Data::new($maps))
                    .app_data(web::Data::new($llm))
                    .configure(config),
            )
            .await
        };
    }

    #[actix_rt::test]
    async fn test_missing_credentials_rejected_without_outbound_calls() {
        let mut llm_server = Server::new_async().await;
        let mut maps_server = Server::new_async().await;
        let llm_mock = llm_server
            .mock("POST", Matcher::Any)
            .expect(0)
            .create_async()
            .await;
        let maps_mock = maps_server
            .mock("GET", Matcher::Any)
            .expect(0)
            .create_async()
            .await;

        let app = app_with!(
            Config::default(),
            GoogleMapsClient::with_base_url(String::new(), maps_server.url()),
            OpenAiClient::with_base_url(String::new(), llm_server.url(), "gpt-4o-mini".into())
        );

        let req = test::TestRequest::post()
            .uri("/ask-for-location")
            .set_json(json!({"query": "best pizza in Rome"}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["detail"], "API keys not configured");

        llm_mock.assert_async().await;
        maps_mock.assert_async().await;
    }

    #[actix_rt::test]
    async fn test_malformed_body_is_bad_request() {
        let app = app_with!(
            configured(),
            GoogleMapsClient::new("k".into()),
            OpenAiClient::new("sk".into(), "gpt-4o-mini".into())
        );

        let req = test::TestRequest::post()
            .uri("/ask-for-location")
            .insert_header(("content-type", "application/json"))
            .set_payload(r#"{"question": "wrong field"}"#)
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["code"], "INVALID_INPUT");
    }

    #[actix_rt::test]
    async fn test_blank_query_is_validation_error() {
        let app = app_with!(
            configured(),
            GoogleMapsClient::new("k".into()),
            OpenAiClient::new("sk".into(), "gpt-4o-mini".into())
        );

        let req = test::TestRequest::post()
            .uri("/ask-for-location")
            .set_json(json!({"query": "   "}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["code"], "VALIDATION_ERROR");
    }

    #[actix_rt::test]
    async fn test_pipeline_failure_surfaces_as_server_error() {
        let mut llm_server = Server::new_async().await;
        let _llm_mock = llm_server
            .mock("POST", "/chat/completions")
            .with_status(500)
            .with_body("model overloaded")
            .create_async()
            .await;

        let app = app_with!(
            configured(),
            GoogleMapsClient::new("k".into()),
            OpenAiClient::with_base_url("sk".into(), llm_server.url(), "gpt-4o-mini".into())
        );

        let req = test::TestRequest::post()
            .uri("/ask-for-location")
            .set_json(json!({"query": "museums in Cracow"}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = test::read_body_json(resp).await;
        let detail = body["detail"].as_str().unwrap();
        assert!(detail.starts_with("Error processing request: "));
        assert!(detail.contains("model overloaded"));
    }

    #[actix_rt::test]
    async fn test_successful_query() {
        let mut llm_server = Server::new_async().await;
        let mut maps_server = Server::new_async().await;

        let _extraction = llm_server
            .mock("POST", "/chat/completions")
            .match_body(Matcher::Regex("Extract location information".into()))
            .with_status(200)
            .with_body(
                json!({"choices": [{"message": {"content": r#"{"location": "", "place_type": "park"}"#}}]})
                    .to_string(),
            )
            .create_async()
            .await;
        let _synthesis = llm_server
            .mock("POST", "/chat/completions")
            .match_body(Matcher::Regex("Based on the query".into()))
            .with_status(200)
            .with_body(json!({"choices": [{"message": {"content": "Visit Planty Park."}}]}).to_string())
            .create_async()
            .await;
        let _nearby = maps_server
            .mock("GET", "/place/nearbysearch/json")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(r#"{"status": "OK", "results": [{"name": "Planty", "vicinity": "Krakow"}]}"#)
            .create_async()
            .await;

        let app = app_with!(
            configured(),
            GoogleMapsClient::with_base_url("k".into(), maps_server.url()),
            OpenAiClient::with_base_url("sk".into(), llm_server.url(), "gpt-4o-mini".into())
        );

        let req = test::TestRequest::post()
            .uri("/ask-for-location")
            .set_json(json!({"query": "parks"}))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["response"], "Visit Planty Park.");
        assert_eq!(body["locations"][0]["name"], "Planty");
    }
}
