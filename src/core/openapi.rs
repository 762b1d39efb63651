use utoipa::{Modify, OpenApi};

use crate::features::contact::{dtos as contact_dtos, handlers as contact_handlers};
use crate::features::events::{dtos as events_dtos, handlers as events_handlers};
use crate::features::geosites::{dtos as geosites_dtos, handlers as geosites_handlers};
use crate::features::health::{dtos as health_dtos, handlers as health_handlers};
use crate::features::media::{dtos as media_dtos, handlers as media_handlers};
use crate::features::news::{dtos as news_dtos, handlers as news_handlers};
use crate::features::park_services::{
    dtos as park_services_dtos, handlers as park_services_handlers,
};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        health_handlers::health_check,
        // Geosites
        geosites_handlers::list_geosites,
        geosites_handlers::get_geosite,
        geosites_handlers::create_geosite,
        geosites_handlers::list_geosite_photos,
        geosites_handlers::add_geosite_photo,
        // Events
        events_handlers::list_events,
        events_handlers::get_event,
        events_handlers::create_event,
        events_handlers::register_for_event,
        events_handlers::list_event_registrations,
        events_handlers::update_registration_status,
        // Services
        park_services_handlers::list_services,
        park_services_handlers::get_service,
        park_services_handlers::create_service,
        // Media
        media_handlers::list_media,
        media_handlers::get_media_item,
        media_handlers::create_media_item,
        // Contact
        contact_handlers::submit_contact_feedback,
        contact_handlers::list_contact_feedback,
        contact_handlers::get_contact_feedback,
        // News
        news_handlers::list_news,
        news_handlers::get_news_article,
        news_handlers::create_news_article,
    ),
    components(
        schemas(
            // Shared
            Meta,
            health_dtos::HealthResponseDto,
            // Geosites
            ApiResponse<Vec<geosites_dtos::GeositeResponseDto>>,
            ApiResponse<geosites_dtos::GeositeResponseDto>,
            ApiResponse<Vec<geosites_dtos::GeositePhotoResponseDto>>,
            ApiResponse<geosites_dtos::GeositePhotoResponseDto>,
            // Events
            ApiResponse<Vec<events_dtos::EventResponseDto>>,
            ApiResponse<events_dtos::EventResponseDto>,
            ApiResponse<Vec<events_dtos::EventRegistrationResponseDto>>,
            ApiResponse<events_dtos::EventRegistrationResponseDto>,
            // Services
            ApiResponse<Vec<park_services_dtos::ParkServiceResponseDto>>,
            ApiResponse<park_services_dtos::ParkServiceResponseDto>,
            // Media
            ApiResponse<Vec<media_dtos::MediaItemResponseDto>>,
            ApiResponse<media_dtos::MediaItemResponseDto>,
            // Contact
            ApiResponse<Vec<contact_dtos::ContactFeedbackResponseDto>>,
            ApiResponse<contact_dtos::ContactFeedbackResponseDto>,
            // News
            ApiResponse<Vec<news_dtos::NewsArticleResponseDto>>,
            ApiResponse<news_dtos::NewsArticleResponseDto>,
        )
    ),
    tags(
        (name = "health", description = "Liveness check"),
        (name = "geosites", description = "Geosites and their photos"),
        (name = "events", description = "Events and visitor registrations"),
        (name = "services", description = "Guides, accommodation, transport and culinary services"),
        (name = "media", description = "Photo and video gallery"),
        (name = "contact", description = "Contact form, feedback and complaints"),
        (name = "news", description = "News, articles and announcements"),
    ),
    info(
        title = "Geopark Portal API",
        version = "0.1.0",
        description = "API documentation for the Geopark Portal",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
