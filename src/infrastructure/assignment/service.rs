//! Team assignment service

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::assignment::{AssignmentRepository, TeamAssignment};
use crate::domain::team::{Team, TeamId, TeamRepository};
use crate::domain::team_member::{TeamMemberId, TeamMemberRepository};
use crate::domain::DomainError;
use crate::infrastructure::observability::record_entity_created;

/// Service for linking team members to teams
#[derive(Debug, Clone)]
pub struct AssignmentService {
    assignments: Arc<dyn AssignmentRepository>,
    teams: Arc<dyn TeamRepository>,
    members: Arc<dyn TeamMemberRepository>,
}

impl AssignmentService {
    pub fn new(
        assignments: Arc<dyn AssignmentRepository>,
        teams: Arc<dyn TeamRepository>,
        members: Arc<dyn TeamMemberRepository>,
    ) -> Self {
        Self {
            assignments,
            teams,
            members,
        }
    }

    async fn ensure_both_exist(
        &self,
        team_id: TeamId,
        member_id: TeamMemberId,
    ) -> Result<(), DomainError> {
        if !self.teams.exists(team_id).await? {
            return Err(DomainError::not_found(format!("Team {} not found", team_id)));
        }

        if !self.members.exists(member_id).await? {
            return Err(DomainError::not_found(format!(
                "Team member {} not found",
                member_id
            )));
        }

        Ok(())
    }

    /// Assign a member to a team.
    ///
    /// Fails with [`DomainError::NotFound`] when either side is missing and
    /// with [`DomainError::Conflict`] when the pair is already linked.
    pub async fn assign(
        &self,
        team_id: TeamId,
        member_id: TeamMemberId,
    ) -> Result<TeamAssignment, DomainError> {
        info!(team_id = %team_id, member_id = %member_id, "Assigning member to team");

        self.ensure_both_exist(team_id, member_id).await?;

        let assignment = self
            .assignments
            .create(TeamAssignment::new(team_id, member_id))
            .await?;
        record_entity_created("team_assignment");

        debug!(assignment = %assignment, "Member assigned");
        Ok(assignment)
    }

    /// Every team with its members attached
    pub async fn list_all(&self) -> Result<Vec<Team>, DomainError> {
        self.assignments.list_teams_with_members().await
    }

    /// Unlink a member from a team
    pub async fn remove(&self, team_id: TeamId, member_id: TeamMemberId) -> Result<(), DomainError> {
        info!(team_id = %team_id, member_id = %member_id, "Removing member from team");

        self.ensure_both_exist(team_id, member_id).await?;

        let assignment = TeamAssignment::new(team_id, member_id);
        if !self.assignments.delete(assignment).await? {
            return Err(DomainError::not_found(format!(
                "Member {} is not assigned to team {}",
                member_id, team_id
            )));
        }

        debug!(assignment = %assignment, "Member removed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::team::NewTeam;
    use crate::domain::team_member::NewTeamMember;
    use crate::infrastructure::assignment::InMemoryAssignmentRepository;
    use crate::infrastructure::storage::InMemoryDatabase;
    use crate::infrastructure::team::InMemoryTeamRepository;
    use crate::infrastructure::team_member::InMemoryTeamMemberRepository;

    struct Fixture {
        service: AssignmentService,
        teams: Arc<InMemoryTeamRepository>,
        members: Arc<InMemoryTeamMemberRepository>,
    }

    fn fixture() -> Fixture {
        let db = Arc::new(InMemoryDatabase::new());
        let teams = Arc::new(InMemoryTeamRepository::new(db.clone()));
        let members = Arc::new(InMemoryTeamMemberRepository::new(db.clone()));
        let service = AssignmentService::new(
            Arc::new(InMemoryAssignmentRepository::new(db)),
            teams.clone(),
            members.clone(),
        );
        Fixture {
            service,
            teams,
            members,
        }
    }

    async fn seed(f: &Fixture) -> (TeamId, TeamMemberId) {
        let team = f.teams.create(NewTeam::new("Dev Team").unwrap()).await.unwrap();
        let member = f
            .members
            .create(NewTeamMember::new("John Doe", "john@example.com").unwrap())
            .await
            .unwrap();
        (team.id(), member.id())
    }

    #[tokio::test]
    async fn test_assign_and_list_all() {
        let f = fixture();
        let (team, member) = seed(&f).await;

        f.service.assign(team, member).await.unwrap();

        let teams = f.service.list_all().await.unwrap();
        assert_eq!(teams.len(), 1);
        assert_eq!(teams[0].members()[0].id(), member);
    }

    #[tokio::test]
    async fn test_assign_twice_fails() {
        let f = fixture();
        let (team, member) = seed(&f).await;

        f.service.assign(team, member).await.unwrap();
        let result = f.service.assign(team, member).await;
        assert!(matches!(result, Err(DomainError::Conflict { .. })));
    }

    #[tokio::test]
    async fn test_assign_missing_entities() {
        let f = fixture();
        let (team, member) = seed(&f).await;

        let err = f.service.assign(TeamId::new(99), member).await.unwrap_err();
        assert!(err.is_not_found());
        assert!(err.to_string().contains("Team 99"));

        let err = f.service.assign(team, TeamMemberId::new(99)).await.unwrap_err();
        assert!(err.is_not_found());
        assert!(err.to_string().contains("Team member 99"));
    }

    #[tokio::test]
    async fn test_remove() {
        let f = fixture();
        let (team, member) = seed(&f).await;
        f.service.assign(team, member).await.unwrap();

        f.service.remove(team, member).await.unwrap();
        assert!(f.service.list_all().await.unwrap()[0].members().is_empty());

        let result = f.service.remove(team, member).await;
        assert!(matches!(result, Err(DomainError::NotFound { .. })));
    }
}
