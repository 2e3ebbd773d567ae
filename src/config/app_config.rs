use serde::Deserialize;

use crate::infrastructure::observability::MetricsConfig;
use crate::infrastructure::storage::{PostgresConfig, StorageConfig, StorageType};

/// Flat variables that override the layered settings, keyed to their
/// config path
const FLAT_ENV_OVERRIDES: &[(&str, &str)] = &[
    ("DB_HOST", "database.host"),
    ("DB_PORT", "database.port"),
    ("DB_USER", "database.user"),
    ("DB_PASSWORD", "database.password"),
    ("DB_NAME", "database.name"),
    ("SERVER_PORT", "server.port"),
];

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub storage: StorageSettings,
    pub logging: LoggingConfig,
    pub metrics: MetricsConfig,
    pub cors: CorsConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub name: String,
    pub min_connections: u32,
    pub max_connections: u32,
    pub acquire_timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    /// `postgres` or `memory`
    pub backend: String,
    pub run_migrations: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Allowed browser origins; empty allows any origin
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        let pg = PostgresConfig::default();

        Self {
            host: pg.host,
            port: pg.port,
            user: pg.user,
            password: pg.password,
            name: pg.database,
            min_connections: pg.min_connections,
            max_connections: pg.max_connections,
            acquire_timeout_secs: pg.acquire_timeout_secs,
        }
    }
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            backend: "postgres".to_string(),
            run_migrations: true,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from files and the process environment
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_with(|key| std::env::var(key).ok())
    }

    /// Load configuration, reading flat overrides through `lookup`
    pub fn load_with<F>(lookup: F) -> Result<Self, config::ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("cors.allowed_origins"),
            );

        for (var, key) in FLAT_ENV_OVERRIDES {
            let value = lookup(var).filter(|v| !v.is_empty() || *var == "DB_PASSWORD");
            builder = builder.set_override_option(*key, value)?;
        }

        builder.build()?.try_deserialize()
    }

    /// Connection settings for the PostgreSQL backend
    pub fn to_postgres_config(&self) -> PostgresConfig {
        PostgresConfig {
            host: self.database.host.clone(),
            port: self.database.port,
            user: self.database.user.clone(),
            password: self.database.password.clone(),
            database: self.database.name.clone(),
            ..PostgresConfig::default()
        }
        .with_max_connections(self.database.max_connections)
        .with_min_connections(self.database.min_connections)
        .with_acquire_timeout(self.database.acquire_timeout_secs)
    }

    /// Resolve the storage backend. Unknown names are a configuration error
    /// rather than a silent fallback.
    pub fn storage_config(&self) -> Result<StorageConfig, crate::domain::DomainError> {
        match StorageType::from_str(&self.storage.backend) {
            Some(StorageType::InMemory) => Ok(StorageConfig::InMemory),
            Some(StorageType::Postgres) => Ok(StorageConfig::Postgres {
                config: self.to_postgres_config(),
                run_migrations: self.storage.run_migrations,
            }),
            None => Err(crate::domain::DomainError::configuration(format!(
                "Unknown storage backend '{}'",
                self.storage.backend
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.database.host, "localhost");
        assert_eq!(config.database.name, "coaching_app");
        assert_eq!(config.database.max_connections, 100);
        assert_eq!(config.database.min_connections, 10);
        assert_eq!(config.storage.backend, "postgres");
        assert!(config.storage.run_migrations);
        assert_eq!(config.logging.format, LogFormat::Pretty);
        assert!(config.metrics.enabled);
        assert!(config.cors.allowed_origins.is_empty());
    }

    #[test]
    fn test_load_without_overrides_uses_defaults() {
        let config = AppConfig::load_with(lookup(&[])).unwrap();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.database.port, 5432);
    }

    #[test]
    fn test_flat_overrides() {
        let config = AppConfig::load_with(lookup(&[
            ("DB_HOST", "db.internal"),
            ("DB_PORT", "6543"),
            ("DB_USER", "coach"),
            ("DB_PASSWORD", "s3cret"),
            ("DB_NAME", "coaching_test"),
            ("SERVER_PORT", "9090"),
        ]))
        .unwrap();

        assert_eq!(config.database.host, "db.internal");
        assert_eq!(config.database.port, 6543);
        assert_eq!(config.database.user, "coach");
        assert_eq!(config.database.password, "s3cret");
        assert_eq!(config.database.name, "coaching_test");
        assert_eq!(config.server.port, 9090);
    }

    #[test]
    fn test_empty_flat_override_is_ignored() {
        let config = AppConfig::load_with(lookup(&[("DB_HOST", "")])).unwrap();
        assert_eq!(config.database.host, "localhost");
    }

    #[test]
    fn test_invalid_port_is_error() {
        assert!(AppConfig::load_with(lookup(&[("SERVER_PORT", "not-a-port")])).is_err());
    }

    #[test]
    fn test_to_postgres_config() {
        let mut config = AppConfig::default();
        config.database.host = "db".to_string();
        config.database.max_connections = 5;
        config.database.min_connections = 1;

        let pg = config.to_postgres_config();
        assert_eq!(pg.host, "db");
        assert_eq!(pg.database, "coaching_app");
        assert_eq!(pg.max_connections, 5);
        assert_eq!(pg.min_connections, 1);
    }

    #[test]
    fn test_storage_config() {
        let mut config = AppConfig::default();
        assert!(matches!(
            config.storage_config().unwrap(),
            StorageConfig::Postgres { run_migrations: true, .. }
        ));

        config.storage.backend = "memory".to_string();
        assert!(matches!(config.storage_config().unwrap(), StorageConfig::InMemory));

        config.storage.backend = "mysql".to_string();
        assert!(config.storage_config().is_err());
    }
}
