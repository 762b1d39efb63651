//! Visitor services around the park: guides, accommodation, transport and
//! culinary spots.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/services?type=` | List services, optionally by type |
//! | GET | `/api/services/{id}` | Get service |
//! | POST | `/api/services` | Create service |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::ParkServiceService;
