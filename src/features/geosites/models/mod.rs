mod geosite;

pub use geosite::{Geosite, GeositePhoto};
