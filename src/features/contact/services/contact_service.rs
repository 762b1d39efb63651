use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::contact::dtos::{ContactFeedbackResponseDto, SubmitContactFeedbackDto};
use crate::features::contact::models::{ContactFeedback, FeedbackStatus};

const CONTACT_COLUMNS: &str = "id, name, email, phone, subject, message, type, status, \
     created_at, updated_at";

/// Service for contact and feedback submissions
pub struct ContactService {
    pool: PgPool,
}

impl ContactService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Store a submission from the public contact form; status starts `pending`
    pub async fn submit(&self, dto: SubmitContactFeedbackDto) -> Result<ContactFeedbackResponseDto> {
        let query = format!(
            r#"
            INSERT INTO contact_feedback (name, email, phone, subject, message, type)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {}
            "#,
            CONTACT_COLUMNS
        );

        let feedback = sqlx::query_as::<_, ContactFeedback>(&query)
            .bind(dto.name)
            .bind(dto.email)
            .bind(dto.phone)
            .bind(dto.subject)
            .bind(dto.message)
            .bind(dto.contact_type)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to submit contact feedback: {:?}", e);
                AppError::Database(e)
            })?;

        tracing::info!(
            "Contact feedback submitted: id={}, type={}",
            feedback.id,
            feedback.contact_type
        );

        Ok(feedback.into())
    }

    /// List submissions newest first, optionally narrowed to one status
    pub async fn list(
        &self,
        status: Option<FeedbackStatus>,
    ) -> Result<Vec<ContactFeedbackResponseDto>> {
        let query = format!(
            r#"
            SELECT {}
            FROM contact_feedback
            WHERE ($1::feedback_status IS NULL OR status = $1)
            ORDER BY created_at DESC, id DESC
            "#,
            CONTACT_COLUMNS
        );

        let submissions = sqlx::query_as::<_, ContactFeedback>(&query)
            .bind(status)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list contact feedback: {:?}", e);
                AppError::Database(e)
            })?;

        Ok(submissions.into_iter().map(|c| c.into()).collect())
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<ContactFeedbackResponseDto>> {
        let query = format!("SELECT {} FROM contact_feedback WHERE id = $1", CONTACT_COLUMNS);

        let feedback = sqlx::query_as::<_, ContactFeedback>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to get contact feedback by id: {:?}", e);
                AppError::Database(e)
            })?;

        Ok(feedback.map(|c| c.into()))
    }
}
