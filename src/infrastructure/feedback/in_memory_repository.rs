//! In-memory feedback repository implementation

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::feedback::{Feedback, FeedbackId, FeedbackRepository, FeedbackTarget, NewFeedback};
use crate::domain::DomainError;
use crate::infrastructure::storage::InMemoryDatabase;

/// In-memory implementation of FeedbackRepository
#[derive(Debug, Clone)]
pub struct InMemoryFeedbackRepository {
    db: Arc<InMemoryDatabase>,
}

impl InMemoryFeedbackRepository {
    pub fn new(db: Arc<InMemoryDatabase>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl FeedbackRepository for InMemoryFeedbackRepository {
    async fn create(&self, feedback: NewFeedback) -> Result<Feedback, DomainError> {
        let mut tables = self.db.write()?;
        let id = tables.next_feedback_id();
        let feedback = feedback.into_feedback(FeedbackId::new(id), Utc::now());
        tables.feedback.insert(id, feedback.clone());

        Ok(feedback)
    }

    async fn list(&self) -> Result<Vec<Feedback>, DomainError> {
        let tables = self.db.read()?;
        Ok(tables.feedback.values().cloned().collect())
    }

    async fn list_by_target(&self, target: FeedbackTarget) -> Result<Vec<Feedback>, DomainError> {
        let tables = self.db.read()?;
        Ok(tables
            .feedback
            .values()
            .filter(|f| f.is_about(target))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_repo() -> InMemoryFeedbackRepository {
        InMemoryFeedbackRepository::new(Arc::new(InMemoryDatabase::new()))
    }

    fn entry(content: &str, target: FeedbackTarget) -> NewFeedback {
        NewFeedback::new(content, target).unwrap()
    }

    #[tokio::test]
    async fn test_create_assigns_id_and_timestamp() {
        let repo = create_repo();
        let before = Utc::now();

        let feedback = repo
            .create(entry("Great work!", FeedbackTarget::team(1).unwrap()))
            .await
            .unwrap();

        assert_eq!(feedback.id().value(), 1);
        assert!(feedback.created_at() >= before);
    }

    #[tokio::test]
    async fn test_list_by_target_matches_type_and_id() {
        let repo = create_repo();
        repo.create(entry("team one", FeedbackTarget::team(1).unwrap())).await.unwrap();
        repo.create(entry("member one", FeedbackTarget::member(1).unwrap())).await.unwrap();
        repo.create(entry("team two", FeedbackTarget::team(2).unwrap())).await.unwrap();
        repo.create(entry("team one again", FeedbackTarget::team(1).unwrap())).await.unwrap();

        let found = repo.list_by_target(FeedbackTarget::team(1).unwrap()).await.unwrap();
        let contents: Vec<&str> = found.iter().map(|f| f.content()).collect();
        assert_eq!(contents, vec!["team one", "team one again"]);

        assert_eq!(repo.list().await.unwrap().len(), 4);
    }
}
