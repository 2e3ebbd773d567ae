//! Feedback domain module
//!
//! Feedback is freeform text attached to either a team or a single member.

mod entity;
mod repository;
mod validation;

pub use entity::{Feedback, FeedbackId, FeedbackTarget, NewFeedback, TargetType};
pub use repository::FeedbackRepository;
pub use validation::{validate_feedback_content, FeedbackValidationError};
