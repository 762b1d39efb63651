mod event;

pub use event::{Event, EventRegistration, NewEvent, NewRegistration, RegistrationStatus};
