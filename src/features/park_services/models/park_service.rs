use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use utoipa::ToSchema;

/// Kind of visitor service offered around the park
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "service_type", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ServiceType {
    Guide,
    Accommodation,
    Transport,
    Culinary,
}

impl std::fmt::Display for ServiceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ServiceType::Guide => write!(f, "guide"),
            ServiceType::Accommodation => write!(f, "accommodation"),
            ServiceType::Transport => write!(f, "transport"),
            ServiceType::Culinary => write!(f, "culinary"),
        }
    }
}

/// Database model for a row of the `services` table
#[derive(Debug, Clone, FromRow)]
pub struct ParkService {
    pub id: i32,
    pub name: String,
    #[sqlx(rename = "type")]
    pub service_type: ServiceType,
    pub description: String,
    pub contact_info: String,
    pub price_range: Option<String>,
    pub rating: Option<Decimal>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
