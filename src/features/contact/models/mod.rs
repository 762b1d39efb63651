mod contact_feedback;

pub use contact_feedback::{ContactFeedback, ContactType, FeedbackStatus};
