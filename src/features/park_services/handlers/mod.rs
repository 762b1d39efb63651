mod park_service_handler;

pub use park_service_handler::*;
