mod geosite_dto;

pub use geosite_dto::*;
