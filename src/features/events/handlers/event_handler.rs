use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppJson, AppPath};
use crate::features::events::dtos::{
    CreateEventDto, EventRegistrationResponseDto, EventResponseDto, RegisterForEventDto,
    UpdateRegistrationStatusDto,
};
use crate::features::events::services::EventService;
use crate::shared::types::ApiResponse;

/// List active events
#[utoipa::path(
    get,
    path = "/api/events",
    responses(
        (status = 200, description = "Active events", body = ApiResponse<Vec<EventResponseDto>>),
    ),
    tag = "events"
)]
pub async fn list_events(
    State(service): State<Arc<EventService>>,
) -> Result<Json<ApiResponse<Vec<EventResponseDto>>>> {
    let events = service.list().await?;
    Ok(Json(ApiResponse::list(events)))
}

/// Get event by ID
#[utoipa::path(
    get,
    path = "/api/events/{id}",
    params(
        ("id" = i32, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Event found", body = ApiResponse<EventResponseDto>),
        (status = 404, description = "Event not found")
    ),
    tag = "events"
)]
pub async fn get_event(
    State(service): State<Arc<EventService>>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<ApiResponse<EventResponseDto>>> {
    let event = service
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Event {} not found", id)))?;
    Ok(Json(ApiResponse::success(Some(event), None, None)))
}

/// Create a new event (staff form)
#[utoipa::path(
    post,
    path = "/api/events",
    request_body = CreateEventDto,
    responses(
        (status = 201, description = "Event created", body = ApiResponse<EventResponseDto>),
        (status = 400, description = "Validation error")
    ),
    tag = "events"
)]
pub async fn create_event(
    State(service): State<Arc<EventService>>,
    AppJson(dto): AppJson<CreateEventDto>,
) -> Result<(StatusCode, Json<ApiResponse<EventResponseDto>>)> {
    dto.validate()?;

    let event = service.create(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(event),
            Some("Acara berhasil dibuat.".to_string()),
            None,
        )),
    ))
}

/// Register a visitor for an event
///
/// Registrations start as `pending`. Rejected with 404 when the event is
/// missing or inactive, 409 when the deadline has passed or the confirmed
/// participants already reach the maximum.
#[utoipa::path(
    post,
    path = "/api/events/registrations",
    request_body = RegisterForEventDto,
    responses(
        (status = 201, description = "Registration accepted", body = ApiResponse<EventRegistrationResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Event not found or not active"),
        (status = 409, description = "Registration closed or event full")
    ),
    tag = "events"
)]
pub async fn register_for_event(
    State(service): State<Arc<EventService>>,
    AppJson(dto): AppJson<RegisterForEventDto>,
) -> Result<(StatusCode, Json<ApiResponse<EventRegistrationResponseDto>>)> {
    dto.validate()?;

    let registration = service.register(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(registration),
            Some("Pendaftaran berhasil! Kami akan mengonfirmasi keikutsertaan Anda.".to_string()),
            None,
        )),
    ))
}

/// List registrations of an event (staff)
#[utoipa::path(
    get,
    path = "/api/events/{id}/registrations",
    params(
        ("id" = i32, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Registrations of the event", body = ApiResponse<Vec<EventRegistrationResponseDto>>),
        (status = 404, description = "Event not found")
    ),
    tag = "events"
)]
pub async fn list_event_registrations(
    State(service): State<Arc<EventService>>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<ApiResponse<Vec<EventRegistrationResponseDto>>>> {
    let registrations = service.list_registrations(id).await?;
    Ok(Json(ApiResponse::list(registrations)))
}

/// Update a registration's status (staff)
///
/// Confirming is rejected with 409 when the event already has as many
/// confirmed participants as its maximum.
#[utoipa::path(
    patch,
    path = "/api/events/registrations/{id}/status",
    params(
        ("id" = i32, Path, description = "Registration ID")
    ),
    request_body = UpdateRegistrationStatusDto,
    responses(
        (status = 200, description = "Status updated", body = ApiResponse<EventRegistrationResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Registration not found"),
        (status = 409, description = "Event full")
    ),
    tag = "events"
)]
pub async fn update_registration_status(
    State(service): State<Arc<EventService>>,
    AppPath(id): AppPath<i32>,
    AppJson(dto): AppJson<UpdateRegistrationStatusDto>,
) -> Result<Json<ApiResponse<EventRegistrationResponseDto>>> {
    let registration = service.update_registration_status(id, dto.status).await?;
    Ok(Json(ApiResponse::success(Some(registration), None, None)))
}
