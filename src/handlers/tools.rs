// src/handlers/tools.rs
// DOCUMENTATION: Direct access to the maps capabilities
// PURPOSE: Place search, place details and directions without the language model

use crate::config::Config;
use crate::errors::LocationError;
use crate::models::{DirectionsParams, SearchPlacesParams, SearchPlacesResponse};
use crate::services::{GoogleMapsClient, PlaceService};
use actix_web::{web, HttpResponse, Responder};

/// GET /tools/search-places?query=&location=&radius=
pub async fn search_places(
    config: web::Data<Config>,
    maps: web::Data<GoogleMapsClient>,
    params: web::Query<SearchPlacesParams>,
) -> Result<impl Responder, LocationError> {
    ensure_maps_configured(&config)?;

    let params = params.into_inner();
    let places = PlaceService::search_places(
        maps.get_ref(),
        &params.query,
        params.location.as_deref(),
        params.radius.unwrap_or(config.default_search_radius),
    )
    .await?;

    Ok(HttpResponse::Ok().json(SearchPlacesResponse { places }))
}

/// GET /tools/place-details/{place_id}
pub async fn place_details(
    config: web::Data<Config>,
    maps: web::Data<GoogleMapsClient>,
    path: web::Path<String>,
) -> Result<impl Responder, LocationError> {
    ensure_maps_configured(&config)?;

    let details = maps.get_place_details(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(details))
}

/// GET /tools/directions?origin=&destination=&mode=
pub async fn directions(
    config: web::Data<Config>,
    maps: web::Data<GoogleMapsClient>,
    params: web::Query<DirectionsParams>,
) -> Result<impl Responder, LocationError> {
    ensure_maps_configured(&config)?;

    let params = params.into_inner();
    let route = maps
        .get_directions(&params.origin, &params.destination, params.mode)
        .await?;

    Ok(HttpResponse::Ok().json(route))
}

fn ensure_maps_configured(config: &Config) -> Result<(), LocationError> {
    if config.maps_configured() {
        Ok(())
    } else {
        log::error!("Maps tool requested without GOOGLE_MAPS_API_KEY");
        Err(LocationError::ApiKeysNotConfigured)
    }
}

/// Configuration for tool routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/tools")
            .route("/search-places", web::get().to(search_places))
            .route("/place-details/{place_id}", web::get().to(place_details))
            .route("/directions", web::get().to(directions)),
    );
}
