//! Team member service

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::team_member::{NewTeamMember, TeamMember, TeamMemberId, TeamMemberRepository};
use crate::domain::DomainError;
use crate::infrastructure::observability::record_entity_created;

/// Request for creating a new team member
#[derive(Debug, Clone)]
pub struct CreateTeamMemberRequest {
    pub name: String,
    pub email: String,
    pub picture: Option<String>,
}

/// Service for managing team members
#[derive(Debug, Clone)]
pub struct TeamMemberService {
    repository: Arc<dyn TeamMemberRepository>,
}

impl TeamMemberService {
    /// Create a new team member service
    pub fn new(repository: Arc<dyn TeamMemberRepository>) -> Self {
        Self { repository }
    }

    /// Create a new team member.
    ///
    /// Email uniqueness is left to the store; a duplicate surfaces as
    /// [`DomainError::Conflict`].
    pub async fn create(&self, request: CreateTeamMemberRequest) -> Result<TeamMember, DomainError> {
        info!(name = %request.name, email = %request.email, "Creating team member");

        let member = NewTeamMember::new(request.name, request.email)
            .and_then(|m| m.with_picture(request.picture))
            .map_err(|e| DomainError::validation(e.to_string()))?;

        let member = self.repository.create(member).await?;
        record_entity_created("team_member");

        debug!(id = %member.id(), "Team member created");
        Ok(member)
    }

    /// List all team members
    pub async fn list(&self) -> Result<Vec<TeamMember>, DomainError> {
        self.repository.list().await
    }

    /// Get a team member by ID
    pub async fn get(&self, id: TeamMemberId) -> Result<TeamMember, DomainError> {
        self.repository
            .get(id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("Team member {} not found", id)))
    }
}
