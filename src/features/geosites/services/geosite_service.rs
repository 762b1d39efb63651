use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::geosites::dtos::{
    AddGeositePhotoDto, CreateGeositeDto, GeositePhotoResponseDto, GeositeResponseDto,
};
use crate::features::geosites::models::{Geosite, GeositePhoto};
use crate::shared::numeric::to_decimal;

const GEOSITE_COLUMNS: &str = "id, name, description, history, geological_value, latitude, \
     longitude, address, created_at, updated_at";

const PHOTO_COLUMNS: &str = "id, geosite_id, photo_url, caption, created_at";

/// Scale of the latitude/longitude NUMERIC columns
const COORDINATE_SCALE: u32 = 8;

/// Service for geosites and their photos
pub struct GeositeService {
    pool: PgPool,
}

impl GeositeService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all geosites in storage order
    pub async fn list(&self) -> Result<Vec<GeositeResponseDto>> {
        let query = format!("SELECT {} FROM geosites ORDER BY id", GEOSITE_COLUMNS);

        let geosites = sqlx::query_as::<_, Geosite>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list geosites: {:?}", e);
                AppError::Database(e)
            })?;

        Ok(geosites.into_iter().map(|g| g.into()).collect())
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<GeositeResponseDto>> {
        Ok(self.find(id).await?.map(|g| g.into()))
    }

    async fn find(&self, id: i32) -> Result<Option<Geosite>> {
        let query = format!("SELECT {} FROM geosites WHERE id = $1", GEOSITE_COLUMNS);

        sqlx::query_as::<_, Geosite>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to get geosite by id: {:?}", e);
                AppError::Database(e)
            })
    }

    /// Create a new geosite
    pub async fn create(&self, dto: CreateGeositeDto) -> Result<GeositeResponseDto> {
        let latitude = to_decimal("latitude", dto.latitude, COORDINATE_SCALE)?;
        let longitude = to_decimal("longitude", dto.longitude, COORDINATE_SCALE)?;

        let query = format!(
            r#"
            INSERT INTO geosites (
                name, description, history, geological_value, latitude, longitude, address
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {}
            "#,
            GEOSITE_COLUMNS
        );

        let geosite = sqlx::query_as::<_, Geosite>(&query)
            .bind(dto.name)
            .bind(dto.description)
            .bind(dto.history)
            .bind(dto.geological_value)
            .bind(latitude)
            .bind(longitude)
            .bind(dto.address)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to create geosite: {:?}", e);
                AppError::Database(e)
            })?;

        tracing::info!("Geosite created: id={}, name={}", geosite.id, geosite.name);

        Ok(geosite.into())
    }

    /// List photos of an existing geosite
    pub async fn list_photos(&self, geosite_id: i32) -> Result<Vec<GeositePhotoResponseDto>> {
        self.ensure_exists(geosite_id).await?;

        let query = format!(
            "SELECT {} FROM geosite_photos WHERE geosite_id = $1 ORDER BY id",
            PHOTO_COLUMNS
        );

        let photos = sqlx::query_as::<_, GeositePhoto>(&query)
            .bind(geosite_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list geosite photos: {:?}", e);
                AppError::Database(e)
            })?;

        Ok(photos.into_iter().map(|p| p.into()).collect())
    }

    /// Attach a photo URL to an existing geosite
    pub async fn add_photo(
        &self,
        geosite_id: i32,
        dto: AddGeositePhotoDto,
    ) -> Result<GeositePhotoResponseDto> {
        self.ensure_exists(geosite_id).await?;

        let query = format!(
            r#"
            INSERT INTO geosite_photos (geosite_id, photo_url, caption)
            VALUES ($1, $2, $3)
            RETURNING {}
            "#,
            PHOTO_COLUMNS
        );

        let photo = sqlx::query_as::<_, GeositePhoto>(&query)
            .bind(geosite_id)
            .bind(dto.photo_url)
            .bind(dto.caption)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to add geosite photo: {:?}", e);
                AppError::Database(e)
            })?;

        tracing::info!(
            "Geosite photo added: id={}, geosite_id={}",
            photo.id,
            photo.geosite_id
        );

        Ok(photo.into())
    }

    async fn ensure_exists(&self, geosite_id: i32) -> Result<()> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM geosites WHERE id = $1)")
            .bind(geosite_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to check geosite existence: {:?}", e);
                AppError::Database(e)
            })?;

        if !exists {
            return Err(AppError::NotFound(format!(
                "Geosite {} not found",
                geosite_id
            )));
        }

        Ok(())
    }
}
