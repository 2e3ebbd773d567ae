//! PostgreSQL connection pooling and error translation

use std::time::Duration;

use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};

use crate::domain::DomainError;

/// PostgreSQL connection configuration
#[derive(Debug, Clone)]
pub struct PostgresConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
    /// Maximum number of connections in the pool
    pub max_connections: u32,
    /// Minimum number of idle connections to maintain
    pub min_connections: u32,
    /// Time to wait for a free connection, in seconds
    pub acquire_timeout_secs: u64,
    /// Idle timeout in seconds
    pub idle_timeout_secs: u64,
}

impl Default for PostgresConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 5432,
            user: "postgres".to_string(),
            password: String::new(),
            database: "coaching_app".to_string(),
            max_connections: 100,
            min_connections: 10,
            acquire_timeout_secs: 30,
            idle_timeout_secs: 600,
        }
    }
}

impl PostgresConfig {
    pub fn with_max_connections(mut self, max: u32) -> Self {
        self.max_connections = max;
        self
    }

    pub fn with_min_connections(mut self, min: u32) -> Self {
        self.min_connections = min;
        self
    }

    pub fn with_acquire_timeout(mut self, secs: u64) -> Self {
        self.acquire_timeout_secs = secs;
        self
    }

    /// Build driver connect options without going through a URL, so
    /// passwords with reserved characters need no escaping.
    pub fn connect_options(&self) -> PgConnectOptions {
        let options = PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .database(&self.database);

        if self.password.is_empty() {
            options
        } else {
            options.password(&self.password)
        }
    }

    /// Connection target without credentials, for logging
    pub fn display_target(&self) -> String {
        format!("{}@{}:{}/{}", self.user, self.host, self.port, self.database)
    }
}

/// Open a pooled connection to PostgreSQL
pub async fn connect(config: &PostgresConfig) -> Result<PgPool, DomainError> {
    let min_connections = config.min_connections.min(config.max_connections);

    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(min_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .idle_timeout(Duration::from_secs(config.idle_timeout_secs))
        .connect_with(config.connect_options())
        .await
        .map_err(|e| DomainError::storage(format!("Failed to connect to PostgreSQL: {}", e)))
}

/// Translate a failed write into a domain error.
///
/// Unique violations become [`DomainError::Conflict`] with the given
/// message; foreign key violations become [`DomainError::NotFound`].
/// Everything else is a storage failure.
pub(crate) fn map_write_error(
    err: sqlx::Error,
    conflict_message: impl FnOnce() -> String,
    context: &str,
) -> DomainError {
    if let Some(db_err) = err.as_database_error() {
        if db_err.is_unique_violation() {
            return DomainError::conflict(conflict_message());
        }

        if db_err.is_foreign_key_violation() {
            return DomainError::not_found(format!(
                "{}: referenced row does not exist",
                context
            ));
        }
    }

    DomainError::storage(format!("{}: {}", context, err))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PostgresConfig::default();

        assert_eq!(config.host, "localhost");
        assert_eq!(config.port, 5432);
        assert_eq!(config.database, "coaching_app");
        assert_eq!(config.max_connections, 100);
        assert_eq!(config.min_connections, 10);
    }

    #[test]
    fn test_builder_methods() {
        let config = PostgresConfig::default()
            .with_max_connections(5)
            .with_min_connections(1)
            .with_acquire_timeout(3);

        assert_eq!(config.max_connections, 5);
        assert_eq!(config.min_connections, 1);
        assert_eq!(config.acquire_timeout_secs, 3);
    }

    #[test]
    fn test_display_target_hides_password() {
        let config = PostgresConfig {
            password: "hunter2".to_string(),
            ..Default::default()
        };

        let target = config.display_target();
        assert_eq!(target, "postgres@localhost:5432/coaching_app");
        assert!(!target.contains("hunter2"));
    }

    #[test]
    fn test_non_database_error_is_storage() {
        let err = map_write_error(
            sqlx::Error::PoolTimedOut,
            || "duplicate".to_string(),
            "Failed to create team",
        );

        assert!(matches!(err, DomainError::Storage { .. }));
    }
}
