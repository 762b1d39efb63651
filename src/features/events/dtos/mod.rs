pub mod event_dto;

pub use event_dto::{
    CreateEventDto, EventRegistrationResponseDto, EventResponseDto, RegisterForEventDto,
    UpdateRegistrationStatusDto,
};
