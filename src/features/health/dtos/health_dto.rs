use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Liveness marker
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponseDto {
    /// Always `ok` while the process serves requests
    pub status: String,
    pub timestamp: DateTime<Utc>,
}
