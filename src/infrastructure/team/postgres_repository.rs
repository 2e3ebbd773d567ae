//! PostgreSQL team repository implementation

use async_trait::async_trait;
use sqlx::{postgres::PgRow, PgPool, Row};
use tracing::debug;

use crate::domain::team::{NewTeam, Team, TeamId, TeamRepository};
use crate::domain::DomainError;
use crate::infrastructure::storage::map_write_error;

/// PostgreSQL implementation of TeamRepository
#[derive(Debug, Clone)]
pub struct PostgresTeamRepository {
    pool: PgPool,
}

impl PostgresTeamRepository {
    /// Create a new repository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TeamRepository for PostgresTeamRepository {
    async fn get(&self, id: TeamId) -> Result<Option<Team>, DomainError> {
        let row = sqlx::query("SELECT id, name, logo FROM teams WHERE id = $1")
            .bind(id.value())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to get team: {}", e)))?;

        row.as_ref().map(row_to_team).transpose()
    }

    async fn create(&self, team: NewTeam) -> Result<Team, DomainError> {
        let id: i64 = sqlx::query_scalar("INSERT INTO teams (name, logo) VALUES ($1, $2) RETURNING id")
            .bind(team.name())
            .bind(team.logo())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                map_write_error(
                    e,
                    || format!("Team '{}' already exists", team.name()),
                    "Failed to create team",
                )
            })?;

        Ok(team.into_team(TeamId::new(id)))
    }

    async fn delete(&self, id: TeamId) -> Result<bool, DomainError> {
        let fail = |e: sqlx::Error| DomainError::storage(format!("Failed to delete team: {}", e));

        let mut tx = self.pool.begin().await.map_err(fail)?;

        // Row lock blocks concurrent assignments until commit
        let locked: Option<i64> = sqlx::query_scalar("SELECT id FROM teams WHERE id = $1 FOR UPDATE")
            .bind(id.value())
            .fetch_optional(&mut *tx)
            .await
            .map_err(fail)?;

        if locked.is_none() {
            tx.rollback().await.map_err(fail)?;
            return Ok(false);
        }

        let removed = sqlx::query("DELETE FROM team_assignments WHERE team_id = $1")
            .bind(id.value())
            .execute(&mut *tx)
            .await
            .map_err(fail)?
            .rows_affected();

        sqlx::query("DELETE FROM teams WHERE id = $1")
            .bind(id.value())
            .execute(&mut *tx)
            .await
            .map_err(fail)?;

        tx.commit().await.map_err(fail)?;

        debug!(id = %id, removed_assignments = removed, "Team row deleted");
        Ok(true)
    }

    async fn list(&self) -> Result<Vec<Team>, DomainError> {
        let rows = sqlx::query("SELECT id, name, logo FROM teams ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to list teams: {}", e)))?;

        rows.iter().map(row_to_team).collect()
    }

    async fn exists(&self, id: TeamId) -> Result<bool, DomainError> {
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM teams WHERE id = $1)")
            .bind(id.value())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to check team: {}", e)))
    }
}

/// Map a row with `id, name, logo` columns to a team without members
pub(crate) fn row_to_team(row: &PgRow) -> Result<Team, DomainError> {
    let read = |e: sqlx::Error| DomainError::storage(format!("Invalid team row: {}", e));

    Ok(Team::restore(
        TeamId::new(row.try_get("id").map_err(read)?),
        row.try_get("name").map_err(read)?,
        row.try_get("logo").map_err(read)?,
    ))
}
