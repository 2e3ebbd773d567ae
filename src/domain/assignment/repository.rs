//! Team assignment repository trait

use async_trait::async_trait;

use super::entity::TeamAssignment;
use crate::domain::team::{Team, TeamId};
use crate::domain::team_member::TeamMember;
use crate::domain::DomainError;

/// Repository for the team/member join table
#[async_trait]
pub trait AssignmentRepository: Send + Sync + std::fmt::Debug {
    /// Insert an association.
    ///
    /// Fails with [`DomainError::Conflict`] when the pair already exists.
    async fn create(&self, assignment: TeamAssignment) -> Result<TeamAssignment, DomainError>;

    /// Delete an association. Returns false when the pair did not exist.
    async fn delete(&self, assignment: TeamAssignment) -> Result<bool, DomainError>;

    /// Members assigned to a team, ordered by member ID
    async fn members_of(&self, team_id: TeamId) -> Result<Vec<TeamMember>, DomainError>;

    /// Every team with its members attached, ordered by team ID
    async fn list_teams_with_members(&self) -> Result<Vec<Team>, DomainError>;
}
