//! Contact form, feedback and complaints from visitors.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/api/contact` | Submit contact/feedback |
//! | GET | `/api/contact?status=` | List submissions, newest first |
//! | GET | `/api/contact/{id}` | Get submission |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::ContactService;
