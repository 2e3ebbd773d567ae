//! PostgreSQL feedback repository implementation

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{postgres::PgRow, PgPool, Row};

use crate::domain::feedback::{
    Feedback, FeedbackId, FeedbackRepository, FeedbackTarget, NewFeedback, TargetType,
};
use crate::domain::DomainError;

/// PostgreSQL implementation of FeedbackRepository
#[derive(Debug, Clone)]
pub struct PostgresFeedbackRepository {
    pool: PgPool,
}

impl PostgresFeedbackRepository {
    /// Create a new repository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FeedbackRepository for PostgresFeedbackRepository {
    async fn create(&self, feedback: NewFeedback) -> Result<Feedback, DomainError> {
        let target = feedback.target();
        let row = sqlx::query(
            r#"
            INSERT INTO feedback (content, target_type, target_id)
            VALUES ($1, $2, $3)
            RETURNING id, created_at
            "#,
        )
        .bind(feedback.content())
        .bind(target.target_type().as_str())
        .bind(target.target_id())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to create feedback: {}", e)))?;

        let read = |e: sqlx::Error| DomainError::storage(format!("Invalid feedback row: {}", e));
        let id: i64 = row.try_get("id").map_err(read)?;
        let created_at: DateTime<Utc> = row.try_get("created_at").map_err(read)?;

        Ok(feedback.into_feedback(FeedbackId::new(id), created_at))
    }

    async fn list(&self) -> Result<Vec<Feedback>, DomainError> {
        let rows = sqlx::query(
            "SELECT id, content, target_type, target_id, created_at FROM feedback ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to list feedback: {}", e)))?;

        rows.iter().map(row_to_feedback).collect()
    }

    async fn list_by_target(&self, target: FeedbackTarget) -> Result<Vec<Feedback>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, content, target_type, target_id, created_at
            FROM feedback
            WHERE target_type = $1 AND target_id = $2
            ORDER BY id
            "#,
        )
        .bind(target.target_type().as_str())
        .bind(target.target_id())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to list feedback: {}", e)))?;

        rows.iter().map(row_to_feedback).collect()
    }
}

fn row_to_feedback(row: &PgRow) -> Result<Feedback, DomainError> {
    let read = |e: sqlx::Error| DomainError::storage(format!("Invalid feedback row: {}", e));

    let target_type: String = row.try_get("target_type").map_err(read)?;

    Ok(Feedback::restore(
        FeedbackId::new(row.try_get("id").map_err(read)?),
        row.try_get("content").map_err(read)?,
        str_to_target_type(&target_type)?,
        row.try_get("target_id").map_err(read)?,
        row.try_get("created_at").map_err(read)?,
    ))
}

/// Stored values outside the check constraint are a corrupt row, not a
/// client error
fn str_to_target_type(s: &str) -> Result<TargetType, DomainError> {
    s.parse::<TargetType>()
        .map_err(|e| DomainError::storage(format!("Invalid feedback row: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_type_conversion() {
        assert_eq!(str_to_target_type("team").unwrap(), TargetType::Team);
        assert_eq!(str_to_target_type("member").unwrap(), TargetType::Member);
        assert_eq!(
            str_to_target_type(TargetType::Member.as_str()).unwrap(),
            TargetType::Member
        );
    }

    #[test]
    fn test_unknown_target_type_is_storage_error() {
        let err = str_to_target_type("project").unwrap_err();
        assert!(matches!(err, DomainError::Storage { .. }));
        assert!(err.to_string().contains("project"));

        assert!(matches!(
            str_to_target_type("TEAM"),
            Err(DomainError::Storage { .. })
        ));
    }
}
