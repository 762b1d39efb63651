//! Geosites: the geological points of interest of the park and their photos.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/geosites` | List geosites |
//! | GET | `/api/geosites/{id}` | Get geosite |
//! | POST | `/api/geosites` | Create geosite |
//! | GET | `/api/geosites/{id}/photos` | List photos of geosite |
//! | POST | `/api/geosites/{id}/photos` | Add photo to geosite |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::GeositeService;
