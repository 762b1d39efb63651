use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::park_services::handlers;
use crate::features::park_services::services::ParkServiceService;

/// Create routes for the services directory
pub fn routes(service: Arc<ParkServiceService>) -> Router {
    Router::new()
        .route(
            "/api/services",
            get(handlers::list_services).post(handlers::create_service),
        )
        .route("/api/services/{id}", get(handlers::get_service))
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::{json, Value};

    use crate::shared::test_helpers::lazy_pool;

    fn server() -> TestServer {
        let service = Arc::new(ParkServiceService::new(lazy_pool()));
        TestServer::new(routes(service)).unwrap()
    }

    #[tokio::test]
    async fn test_unknown_type_filter_is_validation_error() {
        let response = server().get("/api/services?type=spaceship").await;
        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["success"], false);
        assert!(body["errors"].is_array());
    }

    #[tokio::test]
    async fn test_unknown_type_in_body_is_validation_error() {
        let response = server()
            .post("/api/services")
            .json(&json!({
                "name": "Spaceport",
                "type": "rocket",
                "description": "No",
                "contact_info": "none"
            }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_rating_out_of_range_rejected() {
        server()
            .post("/api/services")
            .json(&json!({
                "name": "Overrated",
                "type": "culinary",
                "description": "Too good",
                "contact_info": "none",
                "rating": 6.0
            }))
            .await
            .assert_status(StatusCode::BAD_REQUEST);
    }
}
