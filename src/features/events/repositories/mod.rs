//! Storage seam for events and their registrations.
//!
//! `register` and `update_registration_status` must apply admission control
//! atomically per event: the read of the event, the confirmed count and the
//! write happen as one serialized unit.

#[cfg(test)]
mod in_memory;
mod postgres;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::core::error::Result;
use crate::features::events::models::{
    Event, EventRegistration, NewEvent, NewRegistration, RegistrationStatus,
};

#[cfg(test)]
pub use in_memory::InMemoryEventRepository;
pub use postgres::PgEventRepository;

#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Persist a new event
    async fn insert_event(&self, event: NewEvent) -> Result<Event>;

    /// All events with `is_active = true`, in storage order
    async fn list_active_events(&self) -> Result<Vec<Event>>;

    async fn find_event(&self, id: i32) -> Result<Option<Event>>;

    /// Admission-controlled insert of a `pending` registration stamped `now`.
    /// Rejections surface as `AppError::Rejected`.
    async fn register(
        &self,
        registration: NewRegistration,
        now: DateTime<Utc>,
    ) -> Result<EventRegistration>;

    /// Registrations for one event, in registration order
    async fn list_registrations(&self, event_id: i32) -> Result<Vec<EventRegistration>>;

    /// Move a registration to `status`; entering `confirmed` is capacity-checked.
    /// Returns `None` when the registration does not exist.
    async fn update_registration_status(
        &self,
        id: i32,
        status: RegistrationStatus,
    ) -> Result<Option<EventRegistration>>;
}
