use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::geosites::handlers;
use crate::features::geosites::services::GeositeService;

/// Create routes for the geosites feature
pub fn routes(service: Arc<GeositeService>) -> Router {
    Router::new()
        .route(
            "/api/geosites",
            get(handlers::list_geosites).post(handlers::create_geosite),
        )
        .route("/api/geosites/{id}", get(handlers::get_geosite))
        .route(
            "/api/geosites/{id}/photos",
            get(handlers::list_geosite_photos).post(handlers::add_geosite_photo),
        )
        .with_state(service)
}
