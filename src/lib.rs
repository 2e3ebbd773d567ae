//! Coaching API
//!
//! Backend for a coaching application: team members, teams, the
//! assignments linking them, and feedback about either.

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use api::state::AppState;
use infrastructure::storage::StorageFactory;
use tracing::info;

/// Create the application state for the configured storage backend
pub async fn create_app_state_with_config(config: &AppConfig) -> anyhow::Result<AppState> {
    let storage = config.storage_config()?;
    info!("Storage backend: {:?}", storage.storage_type());

    let repositories = StorageFactory::create(&storage).await?;

    Ok(AppState::new(repositories))
}
