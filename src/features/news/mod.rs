//! News, articles and announcements.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/news?published=` | List articles, newest first |
//! | GET | `/api/news/{id}` | Get article |
//! | POST | `/api/news` | Create article |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::NewsService;
