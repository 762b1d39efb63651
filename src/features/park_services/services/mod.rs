mod park_service_service;

pub use park_service_service::ParkServiceService;
