use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::Mutex;

use crate::core::error::Result;
use crate::features::events::admission;
use crate::features::events::models::{
    Event, EventRegistration, NewEvent, NewRegistration, RegistrationStatus,
};
use crate::features::events::repositories::EventRepository;

#[derive(Default)]
struct State {
    events: Vec<Event>,
    registrations: Vec<EventRegistration>,
}

impl State {
    fn confirmed_count(&self, event_id: i32) -> i64 {
        self.registrations
            .iter()
            .filter(|r| r.event_id == event_id && r.status == RegistrationStatus::Confirmed)
            .count() as i64
    }
}

/// Test double for `EventRepository`; one mutex plays the role of the row lock
#[derive(Default)]
pub struct InMemoryEventRepository {
    state: Mutex<State>,
}

impl InMemoryEventRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a registration with an arbitrary status, bypassing admission control
    pub async fn seed_registration(
        &self,
        event_id: i32,
        status: RegistrationStatus,
    ) -> EventRegistration {
        let mut state = self.state.lock().await;
        let registration = EventRegistration {
            id: state.registrations.len() as i32 + 1,
            event_id,
            participant_name: "Seeded Participant".to_string(),
            participant_email: "seeded@example.com".to_string(),
            participant_phone: "+62800000000".to_string(),
            registration_date: Utc::now(),
            status,
        };
        state.registrations.push(registration.clone());
        registration
    }
}

#[async_trait]
impl EventRepository for InMemoryEventRepository {
    async fn insert_event(&self, event: NewEvent) -> Result<Event> {
        let mut state = self.state.lock().await;
        let now = Utc::now();
        let created = Event {
            id: state.events.len() as i32 + 1,
            title: event.title,
            description: event.description,
            start_date: event.start_date,
            end_date: event.end_date,
            location: event.location,
            max_participants: event.max_participants,
            registration_deadline: event.registration_deadline,
            is_active: event.is_active,
            created_at: now,
            updated_at: now,
        };
        state.events.push(created.clone());
        Ok(created)
    }

    async fn list_active_events(&self) -> Result<Vec<Event>> {
        let state = self.state.lock().await;
        Ok(state.events.iter().filter(|e| e.is_active).cloned().collect())
    }

    async fn find_event(&self, id: i32) -> Result<Option<Event>> {
        let state = self.state.lock().await;
        Ok(state.events.iter().find(|e| e.id == id).cloned())
    }

    async fn register(
        &self,
        registration: NewRegistration,
        now: DateTime<Utc>,
    ) -> Result<EventRegistration> {
        let mut state = self.state.lock().await;

        let event = state.events.iter().find(|e| e.id == registration.event_id);
        let event = admission::check_open(event, now)?;
        admission::check_capacity(event, state.confirmed_count(event.id))?;

        let created = EventRegistration {
            id: state.registrations.len() as i32 + 1,
            event_id: registration.event_id,
            participant_name: registration.participant_name,
            participant_email: registration.participant_email,
            participant_phone: registration.participant_phone,
            registration_date: now,
            status: RegistrationStatus::Pending,
        };
        state.registrations.push(created.clone());
        Ok(created)
    }

    async fn list_registrations(&self, event_id: i32) -> Result<Vec<EventRegistration>> {
        let state = self.state.lock().await;
        Ok(state
            .registrations
            .iter()
            .filter(|r| r.event_id == event_id)
            .cloned()
            .collect())
    }

    async fn update_registration_status(
        &self,
        id: i32,
        status: RegistrationStatus,
    ) -> Result<Option<EventRegistration>> {
        let mut state = self.state.lock().await;

        let Some(index) = state.registrations.iter().position(|r| r.id == id) else {
            return Ok(None);
        };

        let current = &state.registrations[index];
        if status == RegistrationStatus::Confirmed && current.status != RegistrationStatus::Confirmed
        {
            let event_id = current.event_id;
            if let Some(event) = state.events.iter().find(|e| e.id == event_id) {
                admission::check_capacity(event, state.confirmed_count(event_id))?;
            }
        }

        state.registrations[index].status = status;
        Ok(Some(state.registrations[index].clone()))
    }
}
