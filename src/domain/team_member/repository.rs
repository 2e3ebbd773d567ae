//! Team member repository trait

use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use super::entity::{NewTeamMember, TeamMember, TeamMemberId};
use crate::domain::DomainError;

/// Repository for managing team members
#[cfg_attr(test, automock)]
#[async_trait]
pub trait TeamMemberRepository: Send + Sync + std::fmt::Debug {
    /// Get a team member by ID
    async fn get(&self, id: TeamMemberId) -> Result<Option<TeamMember>, DomainError>;

    /// Persist a new team member and return it with its assigned ID.
    ///
    /// Fails with [`DomainError::Conflict`] when the email is already taken.
    async fn create(&self, member: NewTeamMember) -> Result<TeamMember, DomainError>;

    /// List all team members ordered by ID
    async fn list(&self) -> Result<Vec<TeamMember>, DomainError>;

    /// Check if a team member exists
    async fn exists(&self, id: TeamMemberId) -> Result<bool, DomainError>;
}
