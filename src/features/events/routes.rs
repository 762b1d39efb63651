use std::sync::Arc;

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::features::events::handlers;
use crate::features::events::services::EventService;

/// Create routes for the events feature
pub fn routes(service: Arc<EventService>) -> Router {
    Router::new()
        .route(
            "/api/events",
            get(handlers::list_events).post(handlers::create_event),
        )
        .route("/api/events/{id}", get(handlers::get_event))
        .route(
            "/api/events/{id}/registrations",
            get(handlers::list_event_registrations),
        )
        .route(
            "/api/events/registrations",
            post(handlers::register_for_event),
        )
        .route(
            "/api/events/registrations/{id}/status",
            patch(handlers::update_registration_status),
        )
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::{json, Value};

    use crate::features::events::models::RegistrationStatus;
    use crate::features::events::repositories::{EventRepository, InMemoryEventRepository};

    fn server() -> (Arc<InMemoryEventRepository>, TestServer) {
        let repository = Arc::new(InMemoryEventRepository::new());
        let service = Arc::new(EventService::new(repository.clone()));
        (repository, TestServer::new(routes(service)).unwrap())
    }

    fn event_body(max_participants: Option<i32>) -> Value {
        json!({
            "title": "Caldera Night Walk",
            "description": "Stargazing above the caldera",
            "start_date": "2099-08-01T18:00:00Z",
            "end_date": "2099-08-01T23:00:00Z",
            "location": "Caldera Rim",
            "max_participants": max_participants,
            "registration_deadline": "2099-07-30T00:00:00Z"
        })
    }

    fn registration_body(event_id: i64) -> Value {
        json!({
            "event_id": event_id,
            "participant_name": "Siti Rahma",
            "participant_email": "siti@example.com",
            "participant_phone": "+62812345678"
        })
    }

    #[tokio::test]
    async fn test_create_then_register() {
        let (_, server) = server();

        let created = server.post("/api/events").json(&event_body(Some(1))).await;
        created.assert_status(StatusCode::CREATED);
        let event: Value = created.json();
        let event_id = event["data"]["id"].as_i64().unwrap();
        assert_eq!(event["data"]["is_active"], true);

        let registered = server
            .post("/api/events/registrations")
            .json(&registration_body(event_id))
            .await;
        registered.assert_status(StatusCode::CREATED);
        let body: Value = registered.json();
        assert_eq!(body["data"]["status"], "pending");

        let listed: Value = server.get("/api/events").await.json();
        assert_eq!(listed["meta"]["total"], 1);
    }

    #[tokio::test]
    async fn test_invalid_email_is_validation_error() {
        let (_, server) = server();
        let mut body = registration_body(1);
        body["participant_email"] = json!("nope");

        let response = server.post("/api/events/registrations").json(&body).await;
        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["success"], false);
        assert!(body["errors"].is_array());
    }

    #[tokio::test]
    async fn test_end_before_start_is_validation_error() {
        let (_, server) = server();
        let mut body = event_body(None);
        body["end_date"] = json!("2099-07-01T00:00:00Z");

        server
            .post("/api/events")
            .json(&body)
            .await
            .assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_unknown_event_is_not_found_rejection() {
        let (_, server) = server();
        let response = server
            .post("/api/events/registrations")
            .json(&registration_body(404))
            .await;
        response.assert_status(StatusCode::NOT_FOUND);
        let body: Value = response.json();
        assert_eq!(body["errors"][0], "EVENT_UNAVAILABLE");
    }

    #[tokio::test]
    async fn test_full_event_is_conflict() {
        let (repository, server) = server();
        let event: Value = server
            .post("/api/events")
            .json(&event_body(Some(1)))
            .await
            .json();
        let event_id = event["data"]["id"].as_i64().unwrap();
        repository
            .seed_registration(event_id as i32, RegistrationStatus::Confirmed)
            .await;

        let response = server
            .post("/api/events/registrations")
            .json(&registration_body(event_id))
            .await;
        response.assert_status(StatusCode::CONFLICT);
        let body: Value = response.json();
        assert_eq!(body["errors"][0], "EVENT_FULL");
        assert_eq!(
            repository
                .list_registrations(event_id as i32)
                .await
                .unwrap()
                .len(),
            1
        );
    }

    #[tokio::test]
    async fn test_confirm_over_capacity_is_conflict() {
        let (_, server) = server();
        let event: Value = server
            .post("/api/events")
            .json(&event_body(Some(1)))
            .await
            .json();
        let event_id = event["data"]["id"].as_i64().unwrap();

        let mut ids = Vec::new();
        for _ in 0..2 {
            let reg: Value = server
                .post("/api/events/registrations")
                .json(&registration_body(event_id))
                .await
                .json();
            ids.push(reg["data"]["id"].as_i64().unwrap());
        }

        server
            .patch(&format!("/api/events/registrations/{}/status", ids[0]))
            .json(&json!({ "status": "confirmed" }))
            .await
            .assert_status_ok();
        server
            .patch(&format!("/api/events/registrations/{}/status", ids[1]))
            .json(&json!({ "status": "confirmed" }))
            .await
            .assert_status(StatusCode::CONFLICT);

        let registrations: Value = server
            .get(&format!("/api/events/{}/registrations", event_id))
            .await
            .json();
        let confirmed = registrations["data"]
            .as_array()
            .unwrap()
            .iter()
            .filter(|r| r["status"] == "confirmed")
            .count();
        assert_eq!(confirmed, 1);
    }

    #[tokio::test]
    async fn test_malformed_path_id_is_bad_request() {
        let (_, server) = server();
        server
            .get("/api/events/not-a-number")
            .await
            .assert_status(StatusCode::BAD_REQUEST);
        server
            .get("/api/events/12")
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }
}
