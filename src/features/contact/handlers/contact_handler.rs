use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppJson, AppPath, AppQuery};
use crate::features::contact::dtos::{
    ContactFeedbackResponseDto, ListContactFeedbackQuery, SubmitContactFeedbackDto,
};
use crate::features::contact::services::ContactService;
use crate::shared::types::ApiResponse;

/// Submit the public contact / feedback form
#[utoipa::path(
    post,
    path = "/api/contact",
    request_body = SubmitContactFeedbackDto,
    responses(
        (status = 201, description = "Submission received", body = ApiResponse<ContactFeedbackResponseDto>),
        (status = 400, description = "Validation error")
    ),
    tag = "contact"
)]
pub async fn submit_contact_feedback(
    State(service): State<Arc<ContactService>>,
    AppJson(dto): AppJson<SubmitContactFeedbackDto>,
) -> Result<(StatusCode, Json<ApiResponse<ContactFeedbackResponseDto>>)> {
    dto.validate()?;

    let feedback = service.submit(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(feedback),
            Some("Terima kasih! Pesan Anda sudah kami terima.".to_string()),
            None,
        )),
    ))
}

/// List submissions (staff)
#[utoipa::path(
    get,
    path = "/api/contact",
    params(ListContactFeedbackQuery),
    responses(
        (status = 200, description = "Submissions, newest first", body = ApiResponse<Vec<ContactFeedbackResponseDto>>),
        (status = 400, description = "Unknown status")
    ),
    tag = "contact"
)]
pub async fn list_contact_feedback(
    State(service): State<Arc<ContactService>>,
    AppQuery(query): AppQuery<ListContactFeedbackQuery>,
) -> Result<Json<ApiResponse<Vec<ContactFeedbackResponseDto>>>> {
    let submissions = service.list(query.status).await?;
    Ok(Json(ApiResponse::list(submissions)))
}

/// Get submission by ID (staff)
#[utoipa::path(
    get,
    path = "/api/contact/{id}",
    params(
        ("id" = i32, Path, description = "Submission ID")
    ),
    responses(
        (status = 200, description = "Submission found", body = ApiResponse<ContactFeedbackResponseDto>),
        (status = 404, description = "Submission not found")
    ),
    tag = "contact"
)]
pub async fn get_contact_feedback(
    State(service): State<Arc<ContactService>>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<ApiResponse<ContactFeedbackResponseDto>>> {
    let feedback = service
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Contact feedback {} not found", id)))?;
    Ok(Json(ApiResponse::success(Some(feedback), None, None)))
}
