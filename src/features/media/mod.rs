//! Photo and video gallery.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/media` | List gallery items, newest first |
//! | GET | `/api/media/{id}` | Get gallery item |
//! | POST | `/api/media` | Add gallery item |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::MediaService;
