//! Team service

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::assignment::AssignmentRepository;
use crate::domain::team::{NewTeam, Team, TeamId, TeamRepository};
use crate::domain::team_member::{TeamMember, TeamMemberId};
use crate::domain::DomainError;
use crate::infrastructure::assignment::AssignmentService;
use crate::infrastructure::observability::record_entity_created;

/// Request for creating a new team
#[derive(Debug, Clone)]
pub struct CreateTeamRequest {
    pub name: String,
    pub logo: Option<String>,
}

/// Service for managing teams
#[derive(Debug, Clone)]
pub struct TeamService {
    repository: Arc<dyn TeamRepository>,
    assignments: Arc<dyn AssignmentRepository>,
    assignment_service: AssignmentService,
}

impl TeamService {
    /// Create a new team service.
    ///
    /// Membership changes go through `assignment_service` so both entry
    /// points apply the same existence checks.
    pub fn new(
        repository: Arc<dyn TeamRepository>,
        assignments: Arc<dyn AssignmentRepository>,
        assignment_service: AssignmentService,
    ) -> Self {
        Self {
            repository,
            assignments,
            assignment_service,
        }
    }

    /// Create a new team
    pub async fn create(&self, request: CreateTeamRequest) -> Result<Team, DomainError> {
        info!(name = %request.name, "Creating team");

        let team = NewTeam::new(request.name)
            .and_then(|t| t.with_logo(request.logo))
            .map_err(|e| DomainError::validation(e.to_string()))?;

        let team = self.repository.create(team).await?;
        record_entity_created("team");

        debug!(id = %team.id(), "Team created");
        Ok(team)
    }

    /// List all teams without their members
    pub async fn list(&self) -> Result<Vec<Team>, DomainError> {
        self.repository.list().await
    }

    /// Get a team with its members attached
    pub async fn get(&self, id: TeamId) -> Result<Team, DomainError> {
        let team = self
            .repository
            .get(id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("Team {} not found", id)))?;

        let members = self.assignments.members_of(id).await?;
        Ok(team.with_members(members))
    }

    /// Members assigned to a team
    pub async fn get_members(&self, id: TeamId) -> Result<Vec<TeamMember>, DomainError> {
        if !self.repository.exists(id).await? {
            return Err(DomainError::not_found(format!("Team {} not found", id)));
        }

        self.assignments.members_of(id).await
    }

    /// Remove a single member from a team
    pub async fn remove_member(
        &self,
        id: TeamId,
        member_id: TeamMemberId,
    ) -> Result<(), DomainError> {
        self.assignment_service.remove(id, member_id).await
    }

    /// Delete a team together with its assignments.
    ///
    /// The store removes both in one step, so a failed delete leaves the
    /// team's memberships untouched.
    pub async fn delete(&self, id: TeamId) -> Result<(), DomainError> {
        info!(id = %id, "Deleting team");

        if !self.repository.delete(id).await? {
            return Err(DomainError::not_found(format!("Team {} not found", id)));
        }

        debug!(id = %id, "Team deleted");
        Ok(())
    }
}
