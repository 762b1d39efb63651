use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppJson, AppPath, AppQuery};
use crate::features::park_services::dtos::{
    CreateParkServiceDto, ListServicesQuery, ParkServiceResponseDto,
};
use crate::features::park_services::services::ParkServiceService;
use crate::shared::types::ApiResponse;

/// List services
///
/// An unknown `type` is a validation error; a known type without matches
/// returns an empty list.
#[utoipa::path(
    get,
    path = "/api/services",
    params(ListServicesQuery),
    responses(
        (status = 200, description = "List of services", body = ApiResponse<Vec<ParkServiceResponseDto>>),
        (status = 400, description = "Unknown service type")
    ),
    tag = "services"
)]
pub async fn list_services(
    State(service): State<Arc<ParkServiceService>>,
    AppQuery(query): AppQuery<ListServicesQuery>,
) -> Result<Json<ApiResponse<Vec<ParkServiceResponseDto>>>> {
    let services = service.list(query.service_type).await?;
    Ok(Json(ApiResponse::list(services)))
}

/// Get service by ID
#[utoipa::path(
    get,
    path = "/api/services/{id}",
    params(
        ("id" = i32, Path, description = "Service ID")
    ),
    responses(
        (status = 200, description = "Service found", body = ApiResponse<ParkServiceResponseDto>),
        (status = 404, description = "Service not found")
    ),
    tag = "services"
)]
pub async fn get_service(
    State(service): State<Arc<ParkServiceService>>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<ApiResponse<ParkServiceResponseDto>>> {
    let found = service
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Service {} not found", id)))?;
    Ok(Json(ApiResponse::success(Some(found), None, None)))
}

/// Create a new service
#[utoipa::path(
    post,
    path = "/api/services",
    request_body = CreateParkServiceDto,
    responses(
        (status = 201, description = "Service created", body = ApiResponse<ParkServiceResponseDto>),
        (status = 400, description = "Validation error")
    ),
    tag = "services"
)]
pub async fn create_service(
    State(service): State<Arc<ParkServiceService>>,
    AppJson(dto): AppJson<CreateParkServiceDto>,
) -> Result<(StatusCode, Json<ApiResponse<ParkServiceResponseDto>>)> {
    dto.validate()?;

    let created = service.create(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(created),
            Some("Layanan berhasil ditambahkan.".to_string()),
            None,
        )),
    ))
}
