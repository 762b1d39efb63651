use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::features::park_services::models::{ParkService, ServiceType};
use crate::shared::numeric::to_f64;

/// Query params for listing services
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct ListServicesQuery {
    /// Only return services of this type
    #[serde(rename = "type")]
    pub service_type: Option<ServiceType>,
}

/// Request DTO for creating a service
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateParkServiceDto {
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: String,

    #[serde(rename = "type")]
    pub service_type: ServiceType,

    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,

    /// Phone number, email or any free-form contact text
    #[validate(length(min = 1, max = 500, message = "Contact info must be 1-500 characters"))]
    pub contact_info: String,

    #[validate(length(max = 100, message = "Price range must not exceed 100 characters"))]
    pub price_range: Option<String>,

    /// 0-5, one decimal expected
    #[validate(range(min = 0.0, max = 5.0, message = "Rating must be between 0 and 5"))]
    pub rating: Option<f64>,
}

/// Response DTO for service
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ParkServiceResponseDto {
    pub id: i32,
    pub name: String,
    #[serde(rename = "type")]
    pub service_type: ServiceType,
    pub description: String,
    pub contact_info: String,
    pub price_range: Option<String>,
    pub rating: Option<f64>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ParkService> for ParkServiceResponseDto {
    fn from(s: ParkService) -> Self {
        Self {
            id: s.id,
            name: s.name,
            service_type: s.service_type,
            description: s.description,
            contact_info: s.contact_info,
            price_range: s.price_range,
            rating: s.rating.map(to_f64),
            is_active: s.is_active,
            created_at: s.created_at,
            updated_at: s.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_dto() -> CreateParkServiceDto {
        CreateParkServiceDto {
            name: "Pak Wiryo Trekking".to_string(),
            service_type: ServiceType::Guide,
            description: "Local guide for the ancient volcano trail".to_string(),
            contact_info: "+62 811 2233 4455".to_string(),
            price_range: Some("Rp150.000 - Rp300.000".to_string()),
            rating: Some(4.7),
        }
    }

    #[test]
    fn test_rating_bounds() {
        let mut dto = valid_dto();
        assert!(dto.validate().is_ok());

        dto.rating = Some(0.0);
        assert!(dto.validate().is_ok());

        dto.rating = Some(5.1);
        assert!(dto.validate().is_err());

        dto.rating = Some(-0.5);
        assert!(dto.validate().is_err());

        dto.rating = None;
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_type_field_uses_wire_name() {
        let dto: CreateParkServiceDto = serde_json::from_value(json!({
            "name": "Homestay Nglanggeran",
            "type": "accommodation",
            "description": "Rooms near the trailhead",
            "contact_info": "homestay@example.com"
        }))
        .unwrap();
        assert_eq!(dto.service_type, ServiceType::Accommodation);
        assert!(dto.rating.is_none());
    }

    #[test]
    fn test_unknown_type_is_rejected() {
        let result: Result<CreateParkServiceDto, _> = serde_json::from_value(json!({
            "name": "Spaceport",
            "type": "rocket",
            "description": "No",
            "contact_info": "none"
        }));
        assert!(result.is_err());
    }
}
