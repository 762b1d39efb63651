use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::FromRow;

/// Database model for geosite
#[derive(Debug, Clone, FromRow)]
pub struct Geosite {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub history: Option<String>,
    pub geological_value: Option<String>,
    pub latitude: Decimal,
    pub longitude: Decimal,
    pub address: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Database model for a photo attached to a geosite
#[derive(Debug, Clone, FromRow)]
pub struct GeositePhoto {
    pub id: i32,
    pub geosite_id: i32,
    pub photo_url: String,
    pub caption: Option<String>,
    pub created_at: DateTime<Utc>,
}
