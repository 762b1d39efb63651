mod geosite_service;

pub use geosite_service::GeositeService;
