use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::news::handlers;
use crate::features::news::services::NewsService;

/// Create routes for the news feature
pub fn routes(service: Arc<NewsService>) -> Router {
    Router::new()
        .route(
            "/api/news",
            get(handlers::list_news).post(handlers::create_news_article),
        )
        .route("/api/news/{id}", get(handlers::get_news_article))
        .with_state(service)
}
