//! PostgreSQL team assignment repository implementation

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::assignment::{AssignmentRepository, TeamAssignment};
use crate::domain::team::{Team, TeamId};
use crate::domain::team_member::TeamMember;
use crate::domain::DomainError;
use crate::infrastructure::storage::map_write_error;
use crate::infrastructure::team::row_to_team;
use crate::infrastructure::team_member::row_to_member;

/// PostgreSQL implementation of AssignmentRepository
#[derive(Debug, Clone)]
pub struct PostgresAssignmentRepository {
    pool: PgPool,
}

impl PostgresAssignmentRepository {
    /// Create a new repository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AssignmentRepository for PostgresAssignmentRepository {
    async fn create(&self, assignment: TeamAssignment) -> Result<TeamAssignment, DomainError> {
        sqlx::query("INSERT INTO team_assignments (team_id, team_member_id) VALUES ($1, $2)")
            .bind(assignment.team_id().value())
            .bind(assignment.team_member_id().value())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                map_write_error(
                    e,
                    || {
                        format!(
                            "Member {} is already assigned to team {}",
                            assignment.team_member_id(),
                            assignment.team_id()
                        )
                    },
                    "Failed to assign member",
                )
            })?;

        Ok(assignment)
    }

    async fn delete(&self, assignment: TeamAssignment) -> Result<bool, DomainError> {
        let result =
            sqlx::query("DELETE FROM team_assignments WHERE team_id = $1 AND team_member_id = $2")
                .bind(assignment.team_id().value())
                .bind(assignment.team_member_id().value())
                .execute(&self.pool)
                .await
                .map_err(|e| DomainError::storage(format!("Failed to remove assignment: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }

    async fn members_of(&self, team_id: TeamId) -> Result<Vec<TeamMember>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT m.id, m.name, m.email, m.picture
            FROM team_members m
            JOIN team_assignments a ON a.team_member_id = m.id
            WHERE a.team_id = $1
            ORDER BY m.id
            "#,
        )
        .bind(team_id.value())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to list team members: {}", e)))?;

        rows.iter().map(row_to_member).collect()
    }

    async fn list_teams_with_members(&self) -> Result<Vec<Team>, DomainError> {
        let team_rows = sqlx::query("SELECT id, name, logo FROM teams ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to list teams: {}", e)))?;

        let member_rows = sqlx::query(
            r#"
            SELECT a.team_id, m.id, m.name, m.email, m.picture
            FROM team_assignments a
            JOIN team_members m ON m.id = a.team_member_id
            ORDER BY a.team_id, m.id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to list assignments: {}", e)))?;

        let mut members_by_team: std::collections::HashMap<i64, Vec<TeamMember>> =
            std::collections::HashMap::new();
        for row in &member_rows {
            let team_id: i64 = row
                .try_get("team_id")
                .map_err(|e| DomainError::storage(format!("Invalid assignment row: {}", e)))?;
            members_by_team
                .entry(team_id)
                .or_default()
                .push(row_to_member(row)?);
        }

        team_rows
            .iter()
            .map(|row| {
                let team = row_to_team(row)?;
                let members = members_by_team
                    .remove(&team.id().value())
                    .unwrap_or_default();
                Ok(team.with_members(members))
            })
            .collect()
    }
}
