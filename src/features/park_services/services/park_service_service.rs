use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::park_services::dtos::{CreateParkServiceDto, ParkServiceResponseDto};
use crate::features::park_services::models::{ParkService, ServiceType};
use crate::shared::numeric::to_decimal;

const SERVICE_COLUMNS: &str = "id, name, type, description, contact_info, price_range, rating, \
     is_active, created_at, updated_at";

/// Service for the visitor services directory
pub struct ParkServiceService {
    pool: PgPool,
}

impl ParkServiceService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List services in storage order, optionally narrowed to one type
    pub async fn list(
        &self,
        service_type: Option<ServiceType>,
    ) -> Result<Vec<ParkServiceResponseDto>> {
        let query = format!(
            r#"
            SELECT {}
            FROM services
            WHERE ($1::service_type IS NULL OR type = $1)
            ORDER BY id
            "#,
            SERVICE_COLUMNS
        );

        let services = sqlx::query_as::<_, ParkService>(&query)
            .bind(service_type)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list services: {:?}", e);
                AppError::Database(e)
            })?;

        Ok(services.into_iter().map(|s| s.into()).collect())
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<ParkServiceResponseDto>> {
        let query = format!("SELECT {} FROM services WHERE id = $1", SERVICE_COLUMNS);

        let service = sqlx::query_as::<_, ParkService>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to get service by id: {:?}", e);
                AppError::Database(e)
            })?;

        Ok(service.map(|s| s.into()))
    }

    /// Create a new service; services always start active
    pub async fn create(&self, dto: CreateParkServiceDto) -> Result<ParkServiceResponseDto> {
        let rating = dto
            .rating
            .map(|r| to_decimal("rating", r, 2))
            .transpose()?;

        let query = format!(
            r#"
            INSERT INTO services (name, type, description, contact_info, price_range, rating)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {}
            "#,
            SERVICE_COLUMNS
        );

        let service = sqlx::query_as::<_, ParkService>(&query)
            .bind(dto.name)
            .bind(dto.service_type)
            .bind(dto.description)
            .bind(dto.contact_info)
            .bind(dto.price_range)
            .bind(rating)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to create service: {:?}", e);
                AppError::Database(e)
            })?;

        tracing::info!(
            "Service created: id={}, type={}",
            service.id,
            service.service_type
        );

        Ok(service.into())
    }
}
