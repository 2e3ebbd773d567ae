//! Storage factory for runtime backend selection

use std::sync::Arc;

use tracing::info;

use crate::domain::{AssignmentRepository, DomainError, FeedbackRepository, TeamMemberRepository, TeamRepository};
use crate::infrastructure::assignment::{InMemoryAssignmentRepository, PostgresAssignmentRepository};
use crate::infrastructure::feedback::{InMemoryFeedbackRepository, PostgresFeedbackRepository};
use crate::infrastructure::team::{InMemoryTeamRepository, PostgresTeamRepository};
use crate::infrastructure::team_member::{
    InMemoryTeamMemberRepository, PostgresTeamMemberRepository,
};

use super::in_memory::InMemoryDatabase;
use super::migrations::run_schema_migrations;
use super::postgres::{connect, PostgresConfig};

/// Supported storage types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageType {
    /// In-memory storage (for testing/development)
    InMemory,
    /// PostgreSQL storage
    Postgres,
}

impl StorageType {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "memory" | "inmemory" | "in-memory" | "in_memory" => Some(Self::InMemory),
            "postgres" | "postgresql" | "pg" => Some(Self::Postgres),
            _ => None,
        }
    }
}

/// Storage configuration
#[derive(Debug, Clone)]
pub enum StorageConfig {
    /// In-memory storage configuration
    InMemory,
    /// PostgreSQL storage configuration
    Postgres {
        config: PostgresConfig,
        run_migrations: bool,
    },
}

impl StorageConfig {
    /// Returns the storage type
    pub fn storage_type(&self) -> StorageType {
        match self {
            Self::InMemory => StorageType::InMemory,
            Self::Postgres { .. } => StorageType::Postgres,
        }
    }
}

/// One repository per table, all backed by the same store
#[derive(Debug, Clone)]
pub struct Repositories {
    pub team_members: Arc<dyn TeamMemberRepository>,
    pub teams: Arc<dyn TeamRepository>,
    pub assignments: Arc<dyn AssignmentRepository>,
    pub feedback: Arc<dyn FeedbackRepository>,
}

impl Repositories {
    /// Repositories sharing a fresh in-memory database
    pub fn in_memory() -> Self {
        let db = Arc::new(InMemoryDatabase::new());

        Self {
            team_members: Arc::new(InMemoryTeamMemberRepository::new(db.clone())),
            teams: Arc::new(InMemoryTeamRepository::new(db.clone())),
            assignments: Arc::new(InMemoryAssignmentRepository::new(db.clone())),
            feedback: Arc::new(InMemoryFeedbackRepository::new(db)),
        }
    }

    /// Repositories sharing one PostgreSQL pool
    pub fn postgres(pool: sqlx::PgPool) -> Self {
        Self {
            team_members: Arc::new(PostgresTeamMemberRepository::new(pool.clone())),
            teams: Arc::new(PostgresTeamRepository::new(pool.clone())),
            assignments: Arc::new(PostgresAssignmentRepository::new(pool.clone())),
            feedback: Arc::new(PostgresFeedbackRepository::new(pool)),
        }
    }
}

/// Factory for creating repository sets
#[derive(Debug)]
pub struct StorageFactory;

impl StorageFactory {
    /// Creates the repositories described by the configuration, connecting
    /// and migrating the database when needed
    pub async fn create(config: &StorageConfig) -> Result<Repositories, DomainError> {
        match config {
            StorageConfig::InMemory => {
                info!("Using in-memory storage");
                Ok(Repositories::in_memory())
            }
            StorageConfig::Postgres {
                config,
                run_migrations,
            } => {
                info!(database = %config.display_target(), "Connecting to PostgreSQL");
                let pool = connect(config).await?;

                if *run_migrations {
                    let applied = run_schema_migrations(&pool).await?;
                    info!(applied, "Schema migrations complete");
                }

                Ok(Repositories::postgres(pool))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_type_from_str() {
        assert_eq!(StorageType::from_str("memory"), Some(StorageType::InMemory));
        assert_eq!(StorageType::from_str("in-memory"), Some(StorageType::InMemory));
        assert_eq!(StorageType::from_str("Postgres"), Some(StorageType::Postgres));
        assert_eq!(StorageType::from_str("pg"), Some(StorageType::Postgres));
        assert_eq!(StorageType::from_str("mysql"), None);
    }

    #[test]
    fn test_storage_config_types() {
        assert_eq!(StorageConfig::InMemory.storage_type(), StorageType::InMemory);

        let postgres = StorageConfig::Postgres {
            config: PostgresConfig::default(),
            run_migrations: true,
        };
        assert_eq!(postgres.storage_type(), StorageType::Postgres);
    }

    #[tokio::test]
    async fn test_create_in_memory() {
        let repos = StorageFactory::create(&StorageConfig::InMemory).await.unwrap();

        assert!(repos.team_members.list().await.unwrap().is_empty());
        assert!(repos.teams.list().await.unwrap().is_empty());
        assert!(repos.feedback.list().await.unwrap().is_empty());
    }
}
