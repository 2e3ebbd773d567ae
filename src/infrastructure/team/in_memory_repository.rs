//! In-memory team repository implementation

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::team::{NewTeam, Team, TeamId, TeamRepository};
use crate::domain::DomainError;
use crate::infrastructure::storage::InMemoryDatabase;

/// In-memory implementation of TeamRepository
#[derive(Debug, Clone)]
pub struct InMemoryTeamRepository {
    db: Arc<InMemoryDatabase>,
}

impl InMemoryTeamRepository {
    pub fn new(db: Arc<InMemoryDatabase>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TeamRepository for InMemoryTeamRepository {
    async fn get(&self, id: TeamId) -> Result<Option<Team>, DomainError> {
        let tables = self.db.read()?;
        Ok(tables.teams.get(&id.value()).cloned())
    }

    async fn create(&self, team: NewTeam) -> Result<Team, DomainError> {
        let mut tables = self.db.write()?;
        let id = tables.next_team_id();
        let team = team.into_team(TeamId::new(id));
        tables.teams.insert(id, team.clone());

        Ok(team)
    }

    async fn delete(&self, id: TeamId) -> Result<bool, DomainError> {
        let mut tables = self.db.write()?;

        if tables.teams.remove(&id.value()).is_none() {
            return Ok(false);
        }

        tables
            .team_assignments
            .retain(|(team_id, _)| *team_id != id.value());

        Ok(true)
    }

    async fn list(&self) -> Result<Vec<Team>, DomainError> {
        let tables = self.db.read()?;
        Ok(tables.teams.values().cloned().collect())
    }

    async fn exists(&self, id: TeamId) -> Result<bool, DomainError> {
        let tables = self.db.read()?;
        Ok(tables.teams.contains_key(&id.value()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_repo() -> (Arc<InMemoryDatabase>, InMemoryTeamRepository) {
        let db = Arc::new(InMemoryDatabase::new());
        (db.clone(), InMemoryTeamRepository::new(db))
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let (_, repo) = create_repo();
        let team = repo.create(NewTeam::new("Dev Team").unwrap()).await.unwrap();

        assert_eq!(team.id().value(), 1);

        let retrieved = repo.get(team.id()).await.unwrap();
        assert_eq!(retrieved.unwrap().name(), "Dev Team");
    }

    #[tokio::test]
    async fn test_delete() {
        let (_, repo) = create_repo();
        let team = repo.create(NewTeam::new("Dev Team").unwrap()).await.unwrap();

        assert!(repo.exists(team.id()).await.unwrap());
        assert!(repo.delete(team.id()).await.unwrap());
        assert!(!repo.exists(team.id()).await.unwrap());
        assert!(!repo.delete(team.id()).await.unwrap());
    }

    #[tokio::test]
    async fn test_delete_removes_only_own_assignments() {
        let (db, repo) = create_repo();
        let team = repo.create(NewTeam::new("Dev Team").unwrap()).await.unwrap();
        let other = repo.create(NewTeam::new("Ops Team").unwrap()).await.unwrap();
        {
            let mut tables = db.write().unwrap();
            tables.team_assignments.insert((team.id().value(), 1));
            tables.team_assignments.insert((team.id().value(), 2));
            tables.team_assignments.insert((other.id().value(), 1));
        }

        assert!(repo.delete(team.id()).await.unwrap());

        let tables = db.read().unwrap();
        assert!(!tables.teams.contains_key(&team.id().value()));
        assert_eq!(
            tables.team_assignments.iter().copied().collect::<Vec<_>>(),
            vec![(other.id().value(), 1)]
        );
    }

    #[tokio::test]
    async fn test_delete_missing_team_keeps_assignments() {
        let (db, repo) = create_repo();
        db.write().unwrap().team_assignments.insert((7, 1));

        assert!(!repo.delete(TeamId::new(7)).await.unwrap());
        assert!(db.read().unwrap().team_assignments.contains(&(7, 1)));
    }

    #[tokio::test]
    async fn test_list() {
        let (_, repo) = create_repo();
        repo.create(NewTeam::new("Team A").unwrap()).await.unwrap();
        repo.create(NewTeam::new("Team B").unwrap()).await.unwrap();

        let teams = repo.list().await.unwrap();
        assert_eq!(teams.len(), 2);
        assert_eq!(teams[0].name(), "Team A");
        assert_eq!(teams[1].name(), "Team B");
    }

    #[tokio::test]
    async fn test_ids_not_reused_after_delete() {
        let (_, repo) = create_repo();
        let first = repo.create(NewTeam::new("Team A").unwrap()).await.unwrap();
        repo.delete(first.id()).await.unwrap();

        let second = repo.create(NewTeam::new("Team B").unwrap()).await.unwrap();
        assert_eq!(second.id().value(), 2);
    }
}
