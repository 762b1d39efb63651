mod park_service_dto;

pub use park_service_dto::*;
