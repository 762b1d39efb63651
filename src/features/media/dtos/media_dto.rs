use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::media::models::{MediaItem, MediaType};

/// Request DTO for adding a gallery item
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateMediaItemDto {
    #[validate(length(min = 1, max = 255, message = "Title must be 1-255 characters"))]
    pub title: String,

    /// URL of an already hosted image or video
    #[validate(url(message = "Media URL must be a valid URL"))]
    pub media_url: String,

    pub media_type: MediaType,

    pub description: Option<String>,
}

/// Response DTO for gallery item
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MediaItemResponseDto {
    pub id: i32,
    pub title: String,
    pub media_url: String,
    pub media_type: MediaType,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<MediaItem> for MediaItemResponseDto {
    fn from(m: MediaItem) -> Self {
        Self {
            id: m.id,
            title: m.title,
            media_url: m.media_url,
            media_type: m.media_type,
            description: m.description,
            created_at: m.created_at,
        }
    }
}
