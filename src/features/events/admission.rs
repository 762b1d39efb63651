//! Admission control for event registrations.
//!
//! The checks run in a fixed order and stop at the first failure:
//!
//! 1. the event must exist and be active,
//! 2. the registration deadline (if any) must not have passed,
//! 3. the number of *confirmed* registrations must be below
//!    `max_participants` (if any).
//!
//! Pending and cancelled registrations never count against capacity. The same
//! capacity check guards the transition of a registration into `confirmed`, so
//! the confirmed count can never exceed the declared maximum.
//!
//! These functions are pure; callers must run them inside whatever lock or
//! transaction serializes registrations for the event.

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::features::events::models::Event;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AdmissionRejection {
    #[error("event not found or not active")]
    EventUnavailable,

    #[error("registration deadline has passed")]
    RegistrationClosed,

    #[error("event has reached maximum participants")]
    EventFull,
}

impl AdmissionRejection {
    /// Stable machine-readable code for clients
    pub fn code(&self) -> &'static str {
        match self {
            AdmissionRejection::EventUnavailable => "EVENT_UNAVAILABLE",
            AdmissionRejection::RegistrationClosed => "REGISTRATION_CLOSED",
            AdmissionRejection::EventFull => "EVENT_FULL",
        }
    }

    /// User-facing message shown by the portal
    pub fn message(&self) -> &'static str {
        match self {
            AdmissionRejection::EventUnavailable => "Acara tidak ditemukan atau sudah tidak aktif.",
            AdmissionRejection::RegistrationClosed => "Batas waktu pendaftaran acara sudah lewat.",
            AdmissionRejection::EventFull => "Kuota peserta acara sudah penuh.",
        }
    }
}

/// Steps 1 and 2: the event is open for registration at `now`
pub fn check_open(event: Option<&Event>, now: DateTime<Utc>) -> Result<&Event, AdmissionRejection> {
    let event = event
        .filter(|e| e.is_active)
        .ok_or(AdmissionRejection::EventUnavailable)?;

    if let Some(deadline) = event.registration_deadline {
        if now > deadline {
            return Err(AdmissionRejection::RegistrationClosed);
        }
    }

    Ok(event)
}

/// Step 3: one more confirmed participant fits
pub fn check_capacity(event: &Event, confirmed_count: i64) -> Result<(), AdmissionRejection> {
    match event.max_participants {
        Some(max) if confirmed_count >= i64::from(max) => Err(AdmissionRejection::EventFull),
        _ => Ok(()),
    }
}
