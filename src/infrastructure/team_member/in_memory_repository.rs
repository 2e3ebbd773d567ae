//! In-memory team member repository implementation

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::team_member::{NewTeamMember, TeamMember, TeamMemberId, TeamMemberRepository};
use crate::domain::DomainError;
use crate::infrastructure::storage::InMemoryDatabase;

/// In-memory implementation of TeamMemberRepository
#[derive(Debug, Clone)]
pub struct InMemoryTeamMemberRepository {
    db: Arc<InMemoryDatabase>,
}

impl InMemoryTeamMemberRepository {
    pub fn new(db: Arc<InMemoryDatabase>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TeamMemberRepository for InMemoryTeamMemberRepository {
    async fn get(&self, id: TeamMemberId) -> Result<Option<TeamMember>, DomainError> {
        let tables = self.db.read()?;
        Ok(tables.team_members.get(&id.value()).cloned())
    }

    async fn create(&self, member: NewTeamMember) -> Result<TeamMember, DomainError> {
        let mut tables = self.db.write()?;

        if tables.email_taken(member.email()) {
            return Err(DomainError::conflict(format!(
                "Email '{}' is already registered",
                member.email()
            )));
        }

        let id = tables.next_team_member_id();
        let member = member.into_member(TeamMemberId::new(id));
        tables.team_members.insert(id, member.clone());

        Ok(member)
    }

    async fn list(&self) -> Result<Vec<TeamMember>, DomainError> {
        let tables = self.db.read()?;
        Ok(tables.team_members.values().cloned().collect())
    }

    async fn exists(&self, id: TeamMemberId) -> Result<bool, DomainError> {
        let tables = self.db.read()?;
        Ok(tables.team_members.contains_key(&id.value()))
    }
}
