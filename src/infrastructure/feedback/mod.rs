//! Feedback infrastructure

mod in_memory_repository;
mod postgres_repository;
mod service;

pub use in_memory_repository::InMemoryFeedbackRepository;
pub use postgres_repository::PostgresFeedbackRepository;
pub use service::{CreateFeedbackRequest, FeedbackService};
