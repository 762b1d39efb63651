use std::sync::Arc;

use chrono::Utc;

use crate::core::error::{AppError, Result};
use crate::features::events::dtos::{
    CreateEventDto, EventRegistrationResponseDto, EventResponseDto, RegisterForEventDto,
};
use crate::features::events::models::{NewEvent, NewRegistration, RegistrationStatus};
use crate::features::events::repositories::EventRepository;

/// Service for events and visitor registrations
pub struct EventService {
    repository: Arc<dyn EventRepository>,
}

impl EventService {
    pub fn new(repository: Arc<dyn EventRepository>) -> Self {
        Self { repository }
    }

    /// List active events only
    pub async fn list(&self) -> Result<Vec<EventResponseDto>> {
        let events = self.repository.list_active_events().await?;
        Ok(events.into_iter().map(Into::into).collect())
    }

    /// Get an event by id; `None` when absent
    pub async fn get_by_id(&self, id: i32) -> Result<Option<EventResponseDto>> {
        Ok(self.repository.find_event(id).await?.map(Into::into))
    }

    /// Create a new event; events always start active
    pub async fn create(&self, dto: CreateEventDto) -> Result<EventResponseDto> {
        let event = self
            .repository
            .insert_event(NewEvent {
                title: dto.title,
                description: dto.description,
                start_date: dto.start_date,
                end_date: dto.end_date,
                location: dto.location,
                max_participants: dto.max_participants,
                registration_deadline: dto.registration_deadline,
                is_active: true,
            })
            .await?;

        tracing::info!("Event created: id={}, title={}", event.id, event.title);

        Ok(event.into())
    }

    /// Register a visitor, subject to admission control
    pub async fn register(&self, dto: RegisterForEventDto) -> Result<EventRegistrationResponseDto> {
        let event_id = dto.event_id;
        let result = self
            .repository
            .register(
                NewRegistration {
                    event_id,
                    participant_name: dto.participant_name,
                    participant_email: dto.participant_email,
                    participant_phone: dto.participant_phone,
                },
                Utc::now(),
            )
            .await;

        match result {
            Ok(registration) => {
                tracing::info!(
                    "Event registration created: id={}, event_id={}",
                    registration.id,
                    registration.event_id
                );
                Ok(registration.into())
            }
            Err(AppError::Rejected(rejection)) => {
                tracing::info!(
                    "Event registration rejected: event_id={}, reason={}",
                    event_id,
                    rejection.code()
                );
                Err(AppError::Rejected(rejection))
            }
            Err(e) => Err(e),
        }
    }

    /// List registrations of an existing event
    pub async fn list_registrations(
        &self,
        event_id: i32,
    ) -> Result<Vec<EventRegistrationResponseDto>> {
        if self.repository.find_event(event_id).await?.is_none() {
            return Err(AppError::NotFound(format!("Event {} not found", event_id)));
        }

        let registrations = self.repository.list_registrations(event_id).await?;
        Ok(registrations.into_iter().map(Into::into).collect())
    }

    /// Change a registration's status (staff action)
    pub async fn update_registration_status(
        &self,
        id: i32,
        status: RegistrationStatus,
    ) -> Result<EventRegistrationResponseDto> {
        let registration = self
            .repository
            .update_registration_status(id, status)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Registration {} not found", id)))?;

        tracing::info!(
            "Registration status updated: id={}, status={}",
            registration.id,
            registration.status
        );

        Ok(registration.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Duration};
    use fake::faker::internet::en::SafeEmail;
    use fake::faker::name::en::Name;
    use fake::Fake;
    use tokio_test::assert_ok;

    use crate::features::events::admission::AdmissionRejection;
    use crate::features::events::repositories::{EventRepository, InMemoryEventRepository};

    fn setup() -> (Arc<InMemoryEventRepository>, EventService) {
        let repository = Arc::new(InMemoryEventRepository::new());
        let service = EventService::new(repository.clone());
        (repository, service)
    }

    fn event_dto(
        title: &str,
        max_participants: Option<i32>,
        registration_deadline: Option<DateTime<Utc>>,
    ) -> CreateEventDto {
        let start = Utc::now() + Duration::days(30);
        CreateEventDto {
            title: title.to_string(),
            description: "Guided walk along the caldera rim".to_string(),
            start_date: start,
            end_date: start + Duration::hours(6),
            location: "Caldera Visitor Center".to_string(),
            max_participants,
            registration_deadline,
        }
    }

    fn registration(event_id: i32) -> RegisterForEventDto {
        RegisterForEventDto {
            event_id,
            participant_name: Name().fake(),
            participant_email: SafeEmail().fake(),
            participant_phone: "+62812345678".to_string(),
        }
    }

    fn rejection(result: Result<EventRegistrationResponseDto>) -> AdmissionRejection {
        match result {
            Err(AppError::Rejected(r)) => r,
            other => panic!("expected rejection, got {:?}", other.map(|r| r.id)),
        }
    }

    #[tokio::test]
    async fn test_create_event_starts_active() {
        let (_, service) = setup();
        let created = service
            .create(event_dto("Sunrise Trek", Some(10), None))
            .await
            .unwrap();

        assert!(created.is_active);
        assert_eq!(created.title, "Sunrise Trek");
        assert_eq!(created.max_participants, Some(10));

        let fetched = service.get_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(fetched.title, created.title);
        assert!(service.get_by_id(999).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_excludes_inactive_events() {
        let (repository, service) = setup();
        service
            .create(event_dto("Active Event", None, None))
            .await
            .unwrap();

        let start = Utc::now() + Duration::days(3);
        repository
            .insert_event(NewEvent {
                title: "Inactive Event".to_string(),
                description: "Hidden".to_string(),
                start_date: start,
                end_date: start,
                location: "Nowhere".to_string(),
                max_participants: None,
                registration_deadline: None,
                is_active: false,
            })
            .await
            .unwrap();

        let events = service.list().await.unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].title, "Active Event");
    }

    #[tokio::test]
    async fn test_register_for_open_event_is_pending() {
        let (_, service) = setup();
        let event = service
            .create(event_dto("Workshop", Some(1), None))
            .await
            .unwrap();

        let before = Utc::now();
        let created = service.register(registration(event.id)).await.unwrap();

        assert_eq!(created.event_id, event.id);
        assert_eq!(created.status, RegistrationStatus::Pending);
        assert!(created.registration_date >= before);
    }

    #[tokio::test]
    async fn test_confirmed_registration_fills_capacity() {
        let (repository, service) = setup();
        let event = service
            .create(event_dto("Workshop", Some(1), None))
            .await
            .unwrap();
        repository
            .seed_registration(event.id, RegistrationStatus::Confirmed)
            .await;

        let result = service.register(registration(event.id)).await;
        assert_eq!(rejection(result), AdmissionRejection::EventFull);
    }

    #[tokio::test]
    async fn test_pending_and_cancelled_do_not_count() {
        let (repository, service) = setup();
        let event = service
            .create(event_dto("Workshop", Some(1), None))
            .await
            .unwrap();
        repository
            .seed_registration(event.id, RegistrationStatus::Pending)
            .await;
        repository
            .seed_registration(event.id, RegistrationStatus::Cancelled)
            .await;

        let created = assert_ok!(service.register(registration(event.id)).await);
        assert_eq!(created.status, RegistrationStatus::Pending);
    }

    #[tokio::test]
    async fn test_past_deadline_rejects_registration() {
        let (_, service) = setup();
        let deadline = Utc::now() - Duration::days(1);
        let mut dto = event_dto("Closed Workshop", Some(100), Some(deadline));
        dto.start_date = Utc::now() - Duration::hours(1);
        dto.end_date = Utc::now() + Duration::days(1);
        let event = service.create(dto).await.unwrap();

        let result = service.register(registration(event.id)).await;
        assert_eq!(rejection(result), AdmissionRejection::RegistrationClosed);
    }

    #[tokio::test]
    async fn test_unknown_or_inactive_event_is_unavailable() {
        let (repository, service) = setup();

        let result = service.register(registration(42)).await;
        assert_eq!(rejection(result), AdmissionRejection::EventUnavailable);

        let start = Utc::now() + Duration::days(3);
        let inactive = repository
            .insert_event(NewEvent {
                title: "Inactive".to_string(),
                description: "Hidden".to_string(),
                start_date: start,
                end_date: start,
                location: "Nowhere".to_string(),
                max_participants: None,
                registration_deadline: None,
                is_active: false,
            })
            .await
            .unwrap();

        let result = service.register(registration(inactive.id)).await;
        assert_eq!(rejection(result), AdmissionRejection::EventUnavailable);
    }

    #[tokio::test]
    async fn test_concurrent_last_slot_never_overbooks_confirmed() {
        let (_, service) = setup();
        let service = Arc::new(service);
        let event = service
            .create(event_dto("Last Slot", Some(1), None))
            .await
            .unwrap();

        let attempts = (0..2).map(|_| {
            let service = Arc::clone(&service);
            let dto = registration(event.id);
            tokio::spawn(async move { service.register(dto).await })
        });
        let registered: Vec<_> = futures::future::join_all(attempts)
            .await
            .into_iter()
            .map(|joined| joined.unwrap())
            .filter_map(|result| result.ok())
            .collect();
        assert!(!registered.is_empty());

        let confirmations = registered.iter().map(|r| {
            let service = Arc::clone(&service);
            let id = r.id;
            tokio::spawn(async move {
                service
                    .update_registration_status(id, RegistrationStatus::Confirmed)
                    .await
            })
        });
        let outcomes: Vec<_> = futures::future::join_all(confirmations)
            .await
            .into_iter()
            .map(|joined| joined.unwrap())
            .collect();

        let confirmed = service
            .list_registrations(event.id)
            .await
            .unwrap()
            .into_iter()
            .filter(|r| r.status == RegistrationStatus::Confirmed)
            .count();
        assert_eq!(confirmed, 1);
        assert_eq!(outcomes.iter().filter(|o| o.is_ok()).count(), 1);
        if registered.len() == 2 {
            assert!(outcomes.iter().any(|o| matches!(
                o,
                Err(AppError::Rejected(AdmissionRejection::EventFull))
            )));
        }
    }

    #[tokio::test]
    async fn test_reconfirming_and_cancelling_are_unconditional() {
        let (_, service) = setup();
        let event = service
            .create(event_dto("Workshop", Some(1), None))
            .await
            .unwrap();
        let reg = service.register(registration(event.id)).await.unwrap();

        let confirmed = service
            .update_registration_status(reg.id, RegistrationStatus::Confirmed)
            .await
            .unwrap();
        assert_eq!(confirmed.status, RegistrationStatus::Confirmed);

        // Already confirmed: the event is full but this is not a new confirmation
        let again = service
            .update_registration_status(reg.id, RegistrationStatus::Confirmed)
            .await
            .unwrap();
        assert_eq!(again.status, RegistrationStatus::Confirmed);

        let cancelled = service
            .update_registration_status(reg.id, RegistrationStatus::Cancelled)
            .await
            .unwrap();
        assert_eq!(cancelled.status, RegistrationStatus::Cancelled);

        // Cancelling frees the slot
        let next = service.register(registration(event.id)).await.unwrap();
        service
            .update_registration_status(next.id, RegistrationStatus::Confirmed)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_missing_registration_and_event_are_not_found() {
        let (_, service) = setup();

        let result = service
            .update_registration_status(7, RegistrationStatus::Confirmed)
            .await;
        assert!(matches!(result, Err(AppError::NotFound(_))));

        let result = service.list_registrations(7).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
