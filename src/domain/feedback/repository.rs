//! Feedback repository trait

use async_trait::async_trait;

use super::entity::{Feedback, FeedbackTarget, NewFeedback};
use crate::domain::DomainError;

/// Repository for feedback entries
#[async_trait]
pub trait FeedbackRepository: Send + Sync + std::fmt::Debug {
    /// Persist a new entry; the store assigns the ID and creation time
    async fn create(&self, feedback: NewFeedback) -> Result<Feedback, DomainError>;

    /// List every entry ordered by ID
    async fn list(&self) -> Result<Vec<Feedback>, DomainError>;

    /// List entries whose target type and ID both match, ordered by ID
    async fn list_by_target(&self, target: FeedbackTarget) -> Result<Vec<Feedback>, DomainError>;
}
