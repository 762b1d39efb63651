use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::geosites::models::{Geosite, GeositePhoto};
use crate::shared::numeric::to_f64;

/// Request DTO for creating a geosite
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateGeositeDto {
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: String,

    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,

    pub history: Option<String>,

    pub geological_value: Option<String>,

    /// Decimal degrees
    #[validate(range(min = -90.0, max = 90.0, message = "Latitude must be between -90 and 90"))]
    pub latitude: f64,

    /// Decimal degrees
    #[validate(range(min = -180.0, max = 180.0, message = "Longitude must be between -180 and 180"))]
    pub longitude: f64,

    #[validate(length(min = 1, max = 500, message = "Address must be 1-500 characters"))]
    pub address: String,
}

/// Response DTO for geosite
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GeositeResponseDto {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub history: Option<String>,
    pub geological_value: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub address: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Geosite> for GeositeResponseDto {
    fn from(g: Geosite) -> Self {
        Self {
            id: g.id,
            name: g.name,
            description: g.description,
            history: g.history,
            geological_value: g.geological_value,
            latitude: to_f64(g.latitude),
            longitude: to_f64(g.longitude),
            address: g.address,
            created_at: g.created_at,
            updated_at: g.updated_at,
        }
    }
}

/// Request DTO for attaching a photo to a geosite
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct AddGeositePhotoDto {
    /// Publicly reachable image URL
    #[validate(url(message = "Photo URL must be a valid URL"))]
    pub photo_url: String,

    #[validate(length(max = 500, message = "Caption must not exceed 500 characters"))]
    pub caption: Option<String>,
}

/// Response DTO for geosite photo
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GeositePhotoResponseDto {
    pub id: i32,
    pub geosite_id: i32,
    pub photo_url: String,
    pub caption: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<GeositePhoto> for GeositePhotoResponseDto {
    fn from(p: GeositePhoto) -> Self {
        Self {
            id: p.id,
            geosite_id: p.geosite_id,
            photo_url: p.photo_url,
            caption: p.caption,
            created_at: p.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn valid_dto() -> CreateGeositeDto {
        CreateGeositeDto {
            name: "Gunung Api Purba Nglanggeran".to_string(),
            description: "Ancient volcano of andesite breccia".to_string(),
            history: Some("Active 60 million years ago".to_string()),
            geological_value: None,
            latitude: -7.8412,
            longitude: 110.5428,
            address: "Nglanggeran, Patuk, Gunungkidul".to_string(),
        }
    }

    #[test]
    fn test_valid_geosite_passes() {
        assert!(valid_dto().validate().is_ok());
    }

    #[test]
    fn test_coordinate_bounds() {
        let mut dto = valid_dto();
        dto.latitude = 90.0;
        dto.longitude = -180.0;
        assert!(dto.validate().is_ok());

        dto.latitude = 90.5;
        let errors = dto.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("latitude"));

        let mut dto = valid_dto();
        dto.longitude = 181.0;
        let errors = dto.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("longitude"));
    }

    #[test]
    fn test_empty_name_rejected() {
        let mut dto = valid_dto();
        dto.name = String::new();
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_photo_url_must_be_url() {
        let dto = AddGeositePhotoDto {
            photo_url: "not a url".to_string(),
            caption: None,
        };
        assert!(dto.validate().is_err());

        let dto = AddGeositePhotoDto {
            photo_url: "https://cdn.example.com/nglanggeran.jpg".to_string(),
            caption: Some("Sunrise".to_string()),
        };
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_response_converts_coordinates() {
        let now = Utc::now();
        let dto: GeositeResponseDto = Geosite {
            id: 1,
            name: "Site".to_string(),
            description: "Desc".to_string(),
            history: None,
            geological_value: None,
            latitude: Decimal::from_str("-7.84120000").unwrap(),
            longitude: Decimal::from_str("110.54280000").unwrap(),
            address: "Addr".to_string(),
            created_at: now,
            updated_at: now,
        }
        .into();

        assert!((dto.latitude + 7.8412).abs() < 1e-9);
        assert!((dto.longitude - 110.5428).abs() < 1e-9);
    }
}
