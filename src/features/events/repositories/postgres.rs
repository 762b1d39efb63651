use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgConnection, PgPool};

use crate::core::error::{AppError, Result};
use crate::features::events::admission;
use crate::features::events::models::{
    Event, EventRegistration, NewEvent, NewRegistration, RegistrationStatus,
};
use crate::features::events::repositories::EventRepository;

const EVENT_COLUMNS: &str = "id, title, description, start_date, end_date, location, \
     max_participants, registration_deadline, is_active, created_at, updated_at";

const REGISTRATION_COLUMNS: &str = "id, event_id, participant_name, participant_email, \
     participant_phone, registration_date, status";

/// Event store backed by PostgreSQL.
///
/// Admission-controlled writes lock the event row (`SELECT ... FOR UPDATE`)
/// for the duration of the transaction, so concurrent registrations or
/// confirmations for the same event run one after another.
#[derive(Clone)]
pub struct PgEventRepository {
    pool: PgPool,
}

impl PgEventRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn lock_event(conn: &mut PgConnection, event_id: i32) -> Result<Option<Event>> {
        let query = format!("SELECT {} FROM events WHERE id = $1 FOR UPDATE", EVENT_COLUMNS);
        sqlx::query_as::<_, Event>(&query)
            .bind(event_id)
            .fetch_optional(&mut *conn)
            .await
            .map_err(|e| {
                tracing::error!("Failed to lock event {}: {:?}", event_id, e);
                AppError::Database(e)
            })
    }

    async fn count_confirmed(conn: &mut PgConnection, event_id: i32) -> Result<i64> {
        sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM event_registrations
            WHERE event_id = $1 AND status = $2
            "#,
        )
        .bind(event_id)
        .bind(RegistrationStatus::Confirmed)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| {
            tracing::error!("Failed to count confirmed registrations: {:?}", e);
            AppError::Database(e)
        })
    }
}

#[async_trait]
impl EventRepository for PgEventRepository {
    async fn insert_event(&self, event: NewEvent) -> Result<Event> {
        let query = format!(
            r#"
            INSERT INTO events (
                title, description, start_date, end_date, location,
                max_participants, registration_deadline, is_active
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING {}
            "#,
            EVENT_COLUMNS
        );

        sqlx::query_as::<_, Event>(&query)
            .bind(event.title)
            .bind(event.description)
            .bind(event.start_date)
            .bind(event.end_date)
            .bind(event.location)
            .bind(event.max_participants)
            .bind(event.registration_deadline)
            .bind(event.is_active)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to insert event: {:?}", e);
                AppError::Database(e)
            })
    }

    async fn list_active_events(&self) -> Result<Vec<Event>> {
        let query = format!(
            "SELECT {} FROM events WHERE is_active = TRUE ORDER BY id",
            EVENT_COLUMNS
        );

        sqlx::query_as::<_, Event>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list events: {:?}", e);
                AppError::Database(e)
            })
    }

    async fn find_event(&self, id: i32) -> Result<Option<Event>> {
        let query = format!("SELECT {} FROM events WHERE id = $1", EVENT_COLUMNS);

        sqlx::query_as::<_, Event>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to get event by id: {:?}", e);
                AppError::Database(e)
            })
    }

    async fn register(
        &self,
        registration: NewRegistration,
        now: DateTime<Utc>,
    ) -> Result<EventRegistration> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            tracing::error!("Failed to start registration transaction: {:?}", e);
            AppError::Database(e)
        })?;

        let event = Self::lock_event(&mut tx, registration.event_id).await?;
        let event = admission::check_open(event.as_ref(), now)?;

        if event.max_participants.is_some() {
            let confirmed = Self::count_confirmed(&mut tx, event.id).await?;
            admission::check_capacity(event, confirmed)?;
        }

        let query = format!(
            r#"
            INSERT INTO event_registrations (
                event_id, participant_name, participant_email, participant_phone,
                registration_date, status
            ) VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {}
            "#,
            REGISTRATION_COLUMNS
        );

        let created = sqlx::query_as::<_, EventRegistration>(&query)
            .bind(registration.event_id)
            .bind(registration.participant_name)
            .bind(registration.participant_email)
            .bind(registration.participant_phone)
            .bind(now)
            .bind(RegistrationStatus::Pending)
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| {
                tracing::error!("Failed to insert event registration: {:?}", e);
                AppError::Database(e)
            })?;

        // Dropping `tx` on any early return above rolls back and releases the lock
        tx.commit().await.map_err(|e| {
            tracing::error!("Failed to commit registration: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(created)
    }

    async fn list_registrations(&self, event_id: i32) -> Result<Vec<EventRegistration>> {
        let query = format!(
            "SELECT {} FROM event_registrations WHERE event_id = $1 ORDER BY id",
            REGISTRATION_COLUMNS
        );

        sqlx::query_as::<_, EventRegistration>(&query)
            .bind(event_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list event registrations: {:?}", e);
                AppError::Database(e)
            })
    }

    async fn update_registration_status(
        &self,
        id: i32,
        status: RegistrationStatus,
    ) -> Result<Option<EventRegistration>> {
        // Resolve the owning event first so locks are always taken event -> registration
        let event_id: Option<i32> =
            sqlx::query_scalar("SELECT event_id FROM event_registrations WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| {
                    tracing::error!("Failed to resolve registration event: {:?}", e);
                    AppError::Database(e)
                })?;

        let Some(event_id) = event_id else {
            return Ok(None);
        };

        let mut tx = self.pool.begin().await.map_err(|e| {
            tracing::error!("Failed to start status transaction: {:?}", e);
            AppError::Database(e)
        })?;

        let event = Self::lock_event(&mut tx, event_id).await?;

        let query = format!(
            "SELECT {} FROM event_registrations WHERE id = $1 FOR UPDATE",
            REGISTRATION_COLUMNS
        );
        let current = sqlx::query_as::<_, EventRegistration>(&query)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(|e| {
                tracing::error!("Failed to lock event registration: {:?}", e);
                AppError::Database(e)
            })?;

        let Some(current) = current else {
            return Ok(None);
        };

        if status == RegistrationStatus::Confirmed && current.status != RegistrationStatus::Confirmed
        {
            if let Some(event) = event.as_ref() {
                let confirmed = Self::count_confirmed(&mut tx, event.id).await?;
                admission::check_capacity(event, confirmed)?;
            }
        }

        let query = format!(
            "UPDATE event_registrations SET status = $2 WHERE id = $1 RETURNING {}",
            REGISTRATION_COLUMNS
        );
        let updated = sqlx::query_as::<_, EventRegistration>(&query)
            .bind(id)
            .bind(status)
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| {
                tracing::error!("Failed to update registration status: {:?}", e);
                AppError::Database(e)
            })?;

        tx.commit().await.map_err(|e| {
            tracing::error!("Failed to commit registration status: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(Some(updated))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use std::sync::Arc;

    use crate::features::events::admission::AdmissionRejection;
    use crate::shared::test_helpers::{lazy_pool, postgres_pool};

    fn new_event(max_participants: Option<i32>, deadline: Option<DateTime<Utc>>) -> NewEvent {
        let start = Utc::now() + Duration::days(7);
        NewEvent {
            title: "Geotrail Run".to_string(),
            description: "10K along the karst ridge".to_string(),
            start_date: start,
            end_date: start + Duration::hours(4),
            location: "Karst Ridge".to_string(),
            max_participants,
            registration_deadline: deadline,
            is_active: true,
        }
    }

    fn new_registration(event_id: i32, name: &str) -> NewRegistration {
        NewRegistration {
            event_id,
            participant_name: name.to_string(),
            participant_email: format!("{}@example.com", name.to_lowercase()),
            participant_phone: "+62812345678".to_string(),
        }
    }

    #[tokio::test]
    #[ignore = "requires Docker"]
    async fn test_register_rejections() {
        let (_container, pool) = postgres_pool().await;
        let repository = PgEventRepository::new(pool);
        let now = Utc::now();

        let closed = repository
            .insert_event(new_event(Some(10), Some(now - Duration::days(1))))
            .await
            .unwrap();
        let result = repository
            .register(new_registration(closed.id, "Late"), now)
            .await;
        assert!(matches!(
            result,
            Err(AppError::Rejected(AdmissionRejection::RegistrationClosed))
        ));

        let result = repository
            .register(new_registration(closed.id + 1000, "Lost"), now)
            .await;
        assert!(matches!(
            result,
            Err(AppError::Rejected(AdmissionRejection::EventUnavailable))
        ));

        assert!(repository
            .list_registrations(closed.id)
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    #[ignore = "requires Docker"]
    async fn test_concurrent_confirmations_respect_capacity() {
        let (_container, pool) = postgres_pool().await;
        let repository = Arc::new(PgEventRepository::new(pool));
        let event = repository
            .insert_event(new_event(Some(1), None))
            .await
            .unwrap();

        let attempts = ["Ani", "Bayu"].map(|name| {
            let repository = Arc::clone(&repository);
            let registration = new_registration(event.id, name);
            tokio::spawn(async move { repository.register(registration, Utc::now()).await })
        });
        let registered: Vec<EventRegistration> = futures::future::join_all(attempts)
            .await
            .into_iter()
            .map(|joined| joined.unwrap().unwrap())
            .collect();
        assert_eq!(registered.len(), 2);
        assert!(registered
            .iter()
            .all(|r| r.status == RegistrationStatus::Pending));

        let confirmations = registered.iter().map(|r| {
            let repository = Arc::clone(&repository);
            let id = r.id;
            tokio::spawn(async move {
                repository
                    .update_registration_status(id, RegistrationStatus::Confirmed)
                    .await
            })
        });
        let outcomes: Vec<_> = futures::future::join_all(confirmations)
            .await
            .into_iter()
            .map(|joined| joined.unwrap())
            .collect();
        assert_eq!(outcomes.iter().filter(|o| o.is_ok()).count(), 1);

        let confirmed = repository
            .list_registrations(event.id)
            .await
            .unwrap()
            .into_iter()
            .filter(|r| r.status == RegistrationStatus::Confirmed)
            .count();
        assert_eq!(confirmed, 1);

        let result = repository
            .register(new_registration(event.id, "Citra"), Utc::now())
            .await;
        assert!(matches!(
            result,
            Err(AppError::Rejected(AdmissionRejection::EventFull))
        ));
    }

    #[tokio::test]
    async fn test_status_update_surfaces_storage_failure() {
        let repo = PgEventRepository::new(lazy_pool());

        let result = repo
            .update_registration_status(1, RegistrationStatus::Confirmed)
            .await;

        assert!(matches!(result, Err(AppError::Database(_))));
    }
}
