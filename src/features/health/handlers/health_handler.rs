use axum::Json;
use chrono::Utc;

use crate::features::health::dtos::HealthResponseDto;

/// Liveness check
///
/// Does not touch the database.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is up", body = HealthResponseDto),
    ),
    tag = "health"
)]
pub async fn health_check() -> Json<HealthResponseDto> {
    Json(HealthResponseDto {
        status: "ok".to_string(),
        timestamp: Utc::now(),
    })
}
