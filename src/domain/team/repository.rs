//! Team repository trait

use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use super::entity::{NewTeam, Team, TeamId};
use crate::domain::DomainError;

/// Repository for managing the team rows themselves.
///
/// Team membership lives in the assignment repository.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait TeamRepository: Send + Sync + std::fmt::Debug {
    /// Get a team by ID, without members
    async fn get(&self, id: TeamId) -> Result<Option<Team>, DomainError>;

    /// Persist a new team and return it with its assigned ID
    async fn create(&self, team: NewTeam) -> Result<Team, DomainError>;

    /// Delete a team together with its assignment rows as one atomic step.
    /// Returns false when no team matched; on failure nothing is removed.
    async fn delete(&self, id: TeamId) -> Result<bool, DomainError>;

    /// List all teams ordered by ID, without members
    async fn list(&self) -> Result<Vec<Team>, DomainError>;

    /// Check if a team exists
    async fn exists(&self, id: TeamId) -> Result<bool, DomainError>;
}
