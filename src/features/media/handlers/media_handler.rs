use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppJson, AppPath};
use crate::features::media::dtos::{CreateMediaItemDto, MediaItemResponseDto};
use crate::features::media::services::MediaService;
use crate::shared::types::ApiResponse;

/// List gallery items, newest first
#[utoipa::path(
    get,
    path = "/api/media",
    responses(
        (status = 200, description = "Gallery items", body = ApiResponse<Vec<MediaItemResponseDto>>),
    ),
    tag = "media"
)]
pub async fn list_media(
    State(service): State<Arc<MediaService>>,
) -> Result<Json<ApiResponse<Vec<MediaItemResponseDto>>>> {
    let items = service.list().await?;
    Ok(Json(ApiResponse::list(items)))
}

/// Get gallery item by ID
#[utoipa::path(
    get,
    path = "/api/media/{id}",
    params(
        ("id" = i32, Path, description = "Media item ID")
    ),
    responses(
        (status = 200, description = "Media item found", body = ApiResponse<MediaItemResponseDto>),
        (status = 404, description = "Media item not found")
    ),
    tag = "media"
)]
pub async fn get_media_item(
    State(service): State<Arc<MediaService>>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<ApiResponse<MediaItemResponseDto>>> {
    let item = service
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Media item {} not found", id)))?;
    Ok(Json(ApiResponse::success(Some(item), None, None)))
}

/// Add a gallery item
#[utoipa::path(
    post,
    path = "/api/media",
    request_body = CreateMediaItemDto,
    responses(
        (status = 201, description = "Media item created", body = ApiResponse<MediaItemResponseDto>),
        (status = 400, description = "Validation error")
    ),
    tag = "media"
)]
pub async fn create_media_item(
    State(service): State<Arc<MediaService>>,
    AppJson(dto): AppJson<CreateMediaItemDto>,
) -> Result<(StatusCode, Json<ApiResponse<MediaItemResponseDto>>)> {
    dto.validate()?;

    let item = service.create(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(item), None, None)),
    ))
}
