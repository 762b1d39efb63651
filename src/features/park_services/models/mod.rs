mod park_service;

pub use park_service::{ParkService, ServiceType};
