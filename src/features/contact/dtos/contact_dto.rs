use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::features::contact::models::{ContactFeedback, ContactType, FeedbackStatus};
use crate::shared::validation::PHONE_REGEX;

/// Request DTO for the public contact form
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct SubmitContactFeedbackDto {
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(regex(path = *PHONE_REGEX, message = "Invalid phone number"))]
    pub phone: Option<String>,

    #[validate(length(min = 1, max = 255, message = "Subject must be 1-255 characters"))]
    pub subject: String,

    #[validate(length(min = 1, max = 5000, message = "Message must be 1-5000 characters"))]
    pub message: String,

    #[serde(rename = "type")]
    pub contact_type: ContactType,
}

/// Query params for listing submissions
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct ListContactFeedbackQuery {
    /// Only return submissions with this status
    pub status: Option<FeedbackStatus>,
}

/// Response DTO for contact/feedback submission
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ContactFeedbackResponseDto {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
    #[serde(rename = "type")]
    pub contact_type: ContactType,
    pub status: FeedbackStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ContactFeedback> for ContactFeedbackResponseDto {
    fn from(c: ContactFeedback) -> Self {
        Self {
            id: c.id,
            name: c.name,
            email: c.email,
            phone: c.phone,
            subject: c.subject,
            message: c.message,
            contact_type: c.contact_type,
            status: c.status,
            created_at: c.created_at,
            updated_at: c.updated_at,
        }
    }
}
