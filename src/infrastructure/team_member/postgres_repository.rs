//! PostgreSQL team member repository implementation

use async_trait::async_trait;
use sqlx::{postgres::PgRow, PgPool, Row};

use crate::domain::team_member::{NewTeamMember, TeamMember, TeamMemberId, TeamMemberRepository};
use crate::domain::DomainError;
use crate::infrastructure::storage::map_write_error;

/// PostgreSQL implementation of TeamMemberRepository
#[derive(Debug, Clone)]
pub struct PostgresTeamMemberRepository {
    pool: PgPool,
}

impl PostgresTeamMemberRepository {
    /// Create a new repository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TeamMemberRepository for PostgresTeamMemberRepository {
    async fn get(&self, id: TeamMemberId) -> Result<Option<TeamMember>, DomainError> {
        let row = sqlx::query("SELECT id, name, email, picture FROM team_members WHERE id = $1")
            .bind(id.value())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to get team member: {}", e)))?;

        row.as_ref().map(row_to_member).transpose()
    }

    async fn create(&self, member: NewTeamMember) -> Result<TeamMember, DomainError> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO team_members (name, email, picture)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(member.name())
        .bind(member.email())
        .bind(member.picture())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            map_write_error(
                e,
                || format!("Email '{}' is already registered", member.email()),
                "Failed to create team member",
            )
        })?;

        Ok(member.into_member(TeamMemberId::new(id)))
    }

    async fn list(&self) -> Result<Vec<TeamMember>, DomainError> {
        let rows = sqlx::query("SELECT id, name, email, picture FROM team_members ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to list team members: {}", e)))?;

        rows.iter().map(row_to_member).collect()
    }

    async fn exists(&self, id: TeamMemberId) -> Result<bool, DomainError> {
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM team_members WHERE id = $1)")
            .bind(id.value())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to check team member: {}", e)))
    }
}

/// Map a row with `id, name, email, picture` columns to a member
pub(crate) fn row_to_member(row: &PgRow) -> Result<TeamMember, DomainError> {
    let read = |e: sqlx::Error| DomainError::storage(format!("Invalid team member row: {}", e));

    Ok(TeamMember::restore(
        TeamMemberId::new(row.try_get("id").map_err(read)?),
        row.try_get("name").map_err(read)?,
        row.try_get("email").map_err(read)?,
        row.try_get("picture").map_err(read)?,
    ))
}
