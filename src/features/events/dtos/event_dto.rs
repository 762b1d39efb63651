use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::features::events::models::{Event, EventRegistration, RegistrationStatus};
use crate::shared::validation::PHONE_REGEX;

/// Request DTO for creating an event (staff form)
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[validate(schema(function = "validate_event_schedule"))]
pub struct CreateEventDto {
    #[validate(length(min = 1, max = 255, message = "Title must be 1-255 characters"))]
    pub title: String,

    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,

    pub start_date: DateTime<Utc>,

    pub end_date: DateTime<Utc>,

    #[validate(length(min = 1, max = 255, message = "Location must be 1-255 characters"))]
    pub location: String,

    /// Maximum number of confirmed participants; omit for unlimited
    #[validate(range(min = 1, message = "Max participants must be at least 1"))]
    pub max_participants: Option<i32>,

    pub registration_deadline: Option<DateTime<Utc>>,
}

fn validate_event_schedule(dto: &CreateEventDto) -> Result<(), ValidationError> {
    if dto.end_date < dto.start_date {
        return Err(ValidationError::new("end_before_start")
            .with_message("End date must not be before start date".into()));
    }

    if let Some(deadline) = dto.registration_deadline {
        if deadline > dto.end_date {
            return Err(ValidationError::new("deadline_after_end")
                .with_message("Registration deadline must not be after the event ends".into()));
        }
    }

    Ok(())
}

/// Response DTO for event
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EventResponseDto {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub location: String,
    pub max_participants: Option<i32>,
    pub registration_deadline: Option<DateTime<Utc>>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Event> for EventResponseDto {
    fn from(e: Event) -> Self {
        Self {
            id: e.id,
            title: e.title,
            description: e.description,
            start_date: e.start_date,
            end_date: e.end_date,
            location: e.location,
            max_participants: e.max_participants,
            registration_deadline: e.registration_deadline,
            is_active: e.is_active,
            created_at: e.created_at,
            updated_at: e.updated_at,
        }
    }
}

/// Request DTO for registering a visitor to an event
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct RegisterForEventDto {
    pub event_id: i32,

    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub participant_name: String,

    #[validate(email(message = "Invalid email format"))]
    pub participant_email: String,

    #[validate(regex(path = *PHONE_REGEX, message = "Invalid phone number"))]
    pub participant_phone: String,
}

/// Response DTO for event registration
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EventRegistrationResponseDto {
    pub id: i32,
    pub event_id: i32,
    pub participant_name: String,
    pub participant_email: String,
    pub participant_phone: String,
    pub registration_date: DateTime<Utc>,
    pub status: RegistrationStatus,
}

impl From<EventRegistration> for EventRegistrationResponseDto {
    fn from(r: EventRegistration) -> Self {
        Self {
            id: r.id,
            event_id: r.event_id,
            participant_name: r.participant_name,
            participant_email: r.participant_email,
            participant_phone: r.participant_phone,
            registration_date: r.registration_date,
            status: r.status,
        }
    }
}

/// Request DTO for moving a registration to another status (staff)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateRegistrationStatusDto {
    pub status: RegistrationStatus,
}
