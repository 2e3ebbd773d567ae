//! Feedback service

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::feedback::{
    Feedback, FeedbackRepository, FeedbackTarget, NewFeedback, TargetType,
};
use crate::domain::team::{TeamId, TeamRepository};
use crate::domain::team_member::{TeamMemberId, TeamMemberRepository};
use crate::domain::DomainError;
use crate::infrastructure::observability::record_entity_created;

/// Request for creating a new feedback entry
#[derive(Debug, Clone)]
pub struct CreateFeedbackRequest {
    pub content: String,
    pub target_type: TargetType,
    pub target_id: i64,
}

/// Service for recording and reading feedback
#[derive(Debug, Clone)]
pub struct FeedbackService {
    repository: Arc<dyn FeedbackRepository>,
    teams: Arc<dyn TeamRepository>,
    members: Arc<dyn TeamMemberRepository>,
}

impl FeedbackService {
    pub fn new(
        repository: Arc<dyn FeedbackRepository>,
        teams: Arc<dyn TeamRepository>,
        members: Arc<dyn TeamMemberRepository>,
    ) -> Self {
        Self {
            repository,
            teams,
            members,
        }
    }

    async fn target_exists(&self, target: FeedbackTarget) -> Result<bool, DomainError> {
        match target.target_type() {
            TargetType::Team => self.teams.exists(TeamId::new(target.target_id())).await,
            TargetType::Member => {
                self.members
                    .exists(TeamMemberId::new(target.target_id()))
                    .await
            }
        }
    }

    /// Record feedback about an existing team or member
    pub async fn create(&self, request: CreateFeedbackRequest) -> Result<Feedback, DomainError> {
        info!(
            target_type = %request.target_type,
            target_id = request.target_id,
            "Creating feedback"
        );

        let target = FeedbackTarget::new(request.target_type, request.target_id)
            .map_err(|e| DomainError::validation(e.to_string()))?;
        let feedback = NewFeedback::new(request.content, target)
            .map_err(|e| DomainError::validation(e.to_string()))?;

        if !self.target_exists(target).await? {
            return Err(DomainError::invalid_target(format!(
                "Feedback target {} does not exist",
                target
            )));
        }

        let feedback = self.repository.create(feedback).await?;
        record_entity_created("feedback");

        debug!(id = %feedback.id(), "Feedback created");
        Ok(feedback)
    }

    /// All feedback entries
    pub async fn list_all(&self) -> Result<Vec<Feedback>, DomainError> {
        self.repository.list().await
    }

    /// Feedback about one team or member.
    ///
    /// The target is not required to exist; an unknown target simply has no
    /// feedback.
    pub async fn list_by_target(&self, target: FeedbackTarget) -> Result<Vec<Feedback>, DomainError> {
        self.repository.list_by_target(target).await
    }
}
