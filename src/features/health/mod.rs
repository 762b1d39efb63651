//! Liveness endpoint: `GET /health`.

pub mod dtos;
pub mod handlers;
pub mod routes;
