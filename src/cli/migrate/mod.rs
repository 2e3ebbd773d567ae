//! Migrate command - applies or reverts the PostgreSQL schema

use clap::Args;
use tracing::info;

use crate::infrastructure::storage::{connect, revert_last_migration, run_schema_migrations};

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct MigrateArgs {
    /// Revert the most recently applied migration instead
    #[arg(long)]
    pub revert: bool,
}

/// Run migrations against the configured database and exit
pub async fn run(args: MigrateArgs) -> anyhow::Result<()> {
    let config = super::bootstrap()?;
    let pg_config = config.to_postgres_config();

    info!(database = %pg_config.display_target(), "Connecting to PostgreSQL");
    let pool = connect(&pg_config).await?;

    if args.revert {
        match revert_last_migration(&pool).await? {
            Some(version) => info!(version, "Reverted migration"),
            None => info!("No migrations to revert"),
        }
    } else {
        let applied = run_schema_migrations(&pool).await?;
        info!(applied, "Schema is up to date");
    }

    pool.close().await;
    Ok(())
}
