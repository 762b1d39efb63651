use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppJson, AppPath};
use crate::features::geosites::dtos::{
    AddGeositePhotoDto, CreateGeositeDto, GeositePhotoResponseDto, GeositeResponseDto,
};
use crate::features::geosites::services::GeositeService;
use crate::shared::types::ApiResponse;

/// List all geosites
#[utoipa::path(
    get,
    path = "/api/geosites",
    responses(
        (status = 200, description = "List of geosites", body = ApiResponse<Vec<GeositeResponseDto>>),
    ),
    tag = "geosites"
)]
pub async fn list_geosites(
    State(service): State<Arc<GeositeService>>,
) -> Result<Json<ApiResponse<Vec<GeositeResponseDto>>>> {
    let geosites = service.list().await?;
    Ok(Json(ApiResponse::list(geosites)))
}

/// Get geosite by ID
#[utoipa::path(
    get,
    path = "/api/geosites/{id}",
    params(
        ("id" = i32, Path, description = "Geosite ID")
    ),
    responses(
        (status = 200, description = "Geosite found", body = ApiResponse<GeositeResponseDto>),
        (status = 404, description = "Geosite not found")
    ),
    tag = "geosites"
)]
pub async fn get_geosite(
    State(service): State<Arc<GeositeService>>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<ApiResponse<GeositeResponseDto>>> {
    let geosite = service
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Geosite {} not found", id)))?;
    Ok(Json(ApiResponse::success(Some(geosite), None, None)))
}

/// Create a new geosite
#[utoipa::path(
    post,
    path = "/api/geosites",
    request_body = CreateGeositeDto,
    responses(
        (status = 201, description = "Geosite created", body = ApiResponse<GeositeResponseDto>),
        (status = 400, description = "Validation error")
    ),
    tag = "geosites"
)]
pub async fn create_geosite(
    State(service): State<Arc<GeositeService>>,
    AppJson(dto): AppJson<CreateGeositeDto>,
) -> Result<(StatusCode, Json<ApiResponse<GeositeResponseDto>>)> {
    dto.validate()?;

    let geosite = service.create(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(geosite),
            Some("Geosite berhasil ditambahkan.".to_string()),
            None,
        )),
    ))
}

/// List photos of a geosite
#[utoipa::path(
    get,
    path = "/api/geosites/{id}/photos",
    params(
        ("id" = i32, Path, description = "Geosite ID")
    ),
    responses(
        (status = 200, description = "Photos of the geosite", body = ApiResponse<Vec<GeositePhotoResponseDto>>),
        (status = 404, description = "Geosite not found")
    ),
    tag = "geosites"
)]
pub async fn list_geosite_photos(
    State(service): State<Arc<GeositeService>>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<ApiResponse<Vec<GeositePhotoResponseDto>>>> {
    let photos = service.list_photos(id).await?;
    Ok(Json(ApiResponse::list(photos)))
}

/// Add a photo to a geosite
///
/// Only the URL is stored; uploading the image itself happens elsewhere.
#[utoipa::path(
    post,
    path = "/api/geosites/{id}/photos",
    params(
        ("id" = i32, Path, description = "Geosite ID")
    ),
    request_body = AddGeositePhotoDto,
    responses(
        (status = 201, description = "Photo added", body = ApiResponse<GeositePhotoResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Geosite not found")
    ),
    tag = "geosites"
)]
pub async fn add_geosite_photo(
    State(service): State<Arc<GeositeService>>,
    AppPath(id): AppPath<i32>,
    AppJson(dto): AppJson<AddGeositePhotoDto>,
) -> Result<(StatusCode, Json<ApiResponse<GeositePhotoResponseDto>>)> {
    dto.validate()?;

    let photo = service.add_photo(id, dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(photo), None, None)),
    ))
}
