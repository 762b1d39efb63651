use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::media::dtos::{CreateMediaItemDto, MediaItemResponseDto};
use crate::features::media::models::MediaItem;

const MEDIA_COLUMNS: &str = "id, title, media_url, media_type, description, created_at";

/// Service for the media gallery
pub struct MediaService {
    pool: PgPool,
}

impl MediaService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List gallery items, newest first
    pub async fn list(&self) -> Result<Vec<MediaItemResponseDto>> {
        let query = format!(
            "SELECT {} FROM media_gallery ORDER BY created_at DESC, id DESC",
            MEDIA_COLUMNS
        );

        let items = sqlx::query_as::<_, MediaItem>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list media gallery: {:?}", e);
                AppError::Database(e)
            })?;

        Ok(items.into_iter().map(|m| m.into()).collect())
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<MediaItemResponseDto>> {
        let query = format!("SELECT {} FROM media_gallery WHERE id = $1", MEDIA_COLUMNS);

        let item = sqlx::query_as::<_, MediaItem>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to get media item by id: {:?}", e);
                AppError::Database(e)
            })?;

        Ok(item.map(|m| m.into()))
    }

    pub async fn create(&self, dto: CreateMediaItemDto) -> Result<MediaItemResponseDto> {
        let query = format!(
            r#"
            INSERT INTO media_gallery (title, media_url, media_type, description)
            VALUES ($1, $2, $3, $4)
            RETURNING {}
            "#,
            MEDIA_COLUMNS
        );

        let item = sqlx::query_as::<_, MediaItem>(&query)
            .bind(dto.title)
            .bind(dto.media_url)
            .bind(dto.media_type)
            .bind(dto.description)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to create media item: {:?}", e);
                AppError::Database(e)
            })?;

        tracing::info!("Media item created: id={}, type={}", item.id, item.media_type);

        Ok(item.into())
    }
}
