use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::media::handlers;
use crate::features::media::services::MediaService;

/// Create routes for the media gallery
pub fn routes(service: Arc<MediaService>) -> Router {
    Router::new()
        .route(
            "/api/media",
            get(handlers::list_media).post(handlers::create_media_item),
        )
        .route("/api/media/{id}", get(handlers::get_media_item))
        .with_state(service)
}
