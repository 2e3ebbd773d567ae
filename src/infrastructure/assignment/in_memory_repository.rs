//! In-memory team assignment repository implementation

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::assignment::{AssignmentRepository, TeamAssignment};
use crate::domain::team::{Team, TeamId};
use crate::domain::team_member::TeamMember;
use crate::domain::DomainError;
use crate::infrastructure::storage::InMemoryDatabase;

/// In-memory implementation of AssignmentRepository
#[derive(Debug, Clone)]
pub struct InMemoryAssignmentRepository {
    db: Arc<InMemoryDatabase>,
}

impl InMemoryAssignmentRepository {
    pub fn new(db: Arc<InMemoryDatabase>) -> Self {
        Self { db }
    }
}

fn members_in(
    team_id: i64,
    assignments: &std::collections::BTreeSet<(i64, i64)>,
    members: &std::collections::BTreeMap<i64, TeamMember>,
) -> Vec<TeamMember> {
    assignments
        .range((team_id, i64::MIN)..=(team_id, i64::MAX))
        .filter_map(|(_, member_id)| members.get(member_id).cloned())
        .collect()
}

#[async_trait]
impl AssignmentRepository for InMemoryAssignmentRepository {
    async fn create(&self, assignment: TeamAssignment) -> Result<TeamAssignment, DomainError> {
        let mut tables = self.db.write()?;
        let team_id = assignment.team_id().value();
        let member_id = assignment.team_member_id().value();

        if !tables.teams.contains_key(&team_id) || !tables.team_members.contains_key(&member_id) {
            return Err(DomainError::not_found(
                "Failed to assign member: referenced row does not exist",
            ));
        }

        if !tables.team_assignments.insert((team_id, member_id)) {
            return Err(DomainError::conflict(format!(
                "Member {} is already assigned to team {}",
                member_id, team_id
            )));
        }

        Ok(assignment)
    }

    async fn delete(&self, assignment: TeamAssignment) -> Result<bool, DomainError> {
        let mut tables = self.db.write()?;
        Ok(tables.team_assignments.remove(&(
            assignment.team_id().value(),
            assignment.team_member_id().value(),
        )))
    }

    async fn members_of(&self, team_id: TeamId) -> Result<Vec<TeamMember>, DomainError> {
        let tables = self.db.read()?;
        Ok(members_in(
            team_id.value(),
            &tables.team_assignments,
            &tables.team_members,
        ))
    }

    async fn list_teams_with_members(&self) -> Result<Vec<Team>, DomainError> {
        let tables = self.db.read()?;
        Ok(tables
            .teams
            .values()
            .map(|team| {
                let members = members_in(
                    team.id().value(),
                    &tables.team_assignments,
                    &tables.team_members,
                );
                team.clone().with_members(members)
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::team::{NewTeam, TeamRepository};
    use crate::domain::team_member::{NewTeamMember, TeamMemberId, TeamMemberRepository};
    use crate::infrastructure::team::InMemoryTeamRepository;
    use crate::infrastructure::team_member::InMemoryTeamMemberRepository;

    struct Fixture {
        teams: InMemoryTeamRepository,
        members: InMemoryTeamMemberRepository,
        assignments: InMemoryAssignmentRepository,
    }

    fn fixture() -> Fixture {
        let db = Arc::new(InMemoryDatabase::new());
        Fixture {
            teams: InMemoryTeamRepository::new(db.clone()),
            members: InMemoryTeamMemberRepository::new(db.clone()),
            assignments: InMemoryAssignmentRepository::new(db),
        }
    }

    async fn seed(f: &Fixture) -> (TeamId, TeamMemberId, TeamMemberId) {
        let team = f.teams.create(NewTeam::new("Dev Team").unwrap()).await.unwrap();
        let john = f
            .members
            .create(NewTeamMember::new("John Doe", "john@example.com").unwrap())
            .await
            .unwrap();
        let jane = f
            .members
            .create(NewTeamMember::new("Jane Smith", "jane@example.com").unwrap())
            .await
            .unwrap();
        (team.id(), john.id(), jane.id())
    }

    #[tokio::test]
    async fn test_create_links_member() {
        let f = fixture();
        let (team, john, _) = seed(&f).await;
        let assignment = TeamAssignment::new(team, john);

        assert_eq!(f.assignments.create(assignment).await.unwrap(), assignment);

        let members = f.assignments.members_of(team).await.unwrap();
        assert_eq!(members.len(), 1);
        assert_eq!(members[0].id(), john);
    }

    #[tokio::test]
    async fn test_duplicate_is_conflict() {
        let f = fixture();
        let (team, john, _) = seed(&f).await;
        let assignment = TeamAssignment::new(team, john);

        f.assignments.create(assignment).await.unwrap();
        let result = f.assignments.create(assignment).await;
        assert!(matches!(result, Err(DomainError::Conflict { .. })));
    }

    #[tokio::test]
    async fn test_dangling_reference_is_not_found() {
        let f = fixture();
        let (team, john, _) = seed(&f).await;

        let result = f
            .assignments
            .create(TeamAssignment::new(TeamId::new(99), john))
            .await;
        assert!(matches!(result, Err(DomainError::NotFound { .. })));

        let result = f
            .assignments
            .create(TeamAssignment::new(team, TeamMemberId::new(99)))
            .await;
        assert!(matches!(result, Err(DomainError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_members_of_and_listing() {
        let f = fixture();
        let (team, john, jane) = seed(&f).await;
        let other = f.teams.create(NewTeam::new("Empty").unwrap()).await.unwrap();

        f.assignments.create(TeamAssignment::new(team, jane)).await.unwrap();
        f.assignments.create(TeamAssignment::new(team, john)).await.unwrap();

        let members = f.assignments.members_of(team).await.unwrap();
        let ids: Vec<i64> = members.iter().map(|m| m.id().value()).collect();
        assert_eq!(ids, vec![john.value(), jane.value()]);

        let teams = f.assignments.list_teams_with_members().await.unwrap();
        assert_eq!(teams.len(), 2);
        assert_eq!(teams[0].members().len(), 2);
        assert_eq!(teams[1].id(), other.id());
        assert!(teams[1].members().is_empty());
    }

    #[tokio::test]
    async fn test_delete() {
        let f = fixture();
        let (team, john, jane) = seed(&f).await;
        f.assignments.create(TeamAssignment::new(team, john)).await.unwrap();
        f.assignments.create(TeamAssignment::new(team, jane)).await.unwrap();

        assert!(f.assignments.delete(TeamAssignment::new(team, john)).await.unwrap());
        assert!(!f.assignments.delete(TeamAssignment::new(team, john)).await.unwrap());

        let members = f.assignments.members_of(team).await.unwrap();
        assert_eq!(members.len(), 1);
        assert_eq!(members[0].id(), jane);
    }
}
