mod geosite_handler;

pub use geosite_handler::*;
