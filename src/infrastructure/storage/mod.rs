//! Storage infrastructure - backends, connection pooling and schema

mod factory;
mod in_memory;
pub mod migrations;
mod postgres;

pub use factory::{Repositories, StorageConfig, StorageFactory, StorageType};
pub use in_memory::InMemoryDatabase;
pub use migrations::{revert_last_migration, run_schema_migrations, Migration, PostgresMigrator};
pub(crate) use postgres::map_write_error;
pub use postgres::{connect, PostgresConfig};
