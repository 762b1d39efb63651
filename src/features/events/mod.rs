//! Events and visitor registrations.
//!
//! Registration goes through admission control (see [`admission`]); the
//! storage seam is the [`repositories::EventRepository`] trait so the policy
//! can be exercised without a database.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/events` | List active events |
//! | GET | `/api/events/{id}` | Get event |
//! | POST | `/api/events` | Create event |
//! | POST | `/api/events/registrations` | Register for event |
//! | GET | `/api/events/{id}/registrations` | List registrations of event |
//! | PATCH | `/api/events/registrations/{id}/status` | Update registration status |

pub mod admission;
pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

pub use repositories::PgEventRepository;
pub use services::EventService;
