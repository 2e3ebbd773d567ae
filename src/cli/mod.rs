//! CLI module for the coaching API
//!
//! - `serve`: run the HTTP server (default)
//! - `migrate`: apply or revert database migrations and exit

pub mod migrate;
pub mod serve;

use clap::{Parser, Subcommand};

use crate::config::AppConfig;
use crate::infrastructure::logging;

/// Coaching app backend - teams, members, assignments and feedback
#[derive(Parser)]
#[command(name = "coaching-api")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Run the HTTP server (default)
    Serve,

    /// Apply pending schema migrations to PostgreSQL
    Migrate(migrate::MigrateArgs),
}

impl Cli {
    /// The selected subcommand, falling back to `serve`
    pub fn command(self) -> Command {
        self.command.unwrap_or(Command::Serve)
    }
}

/// Load `.env`, the layered configuration and the global subscriber
pub(crate) fn bootstrap() -> anyhow::Result<AppConfig> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;
    logging::init_logging(&config.logging);

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_command_is_serve() {
        let cli = Cli::try_parse_from(["coaching-api"]).unwrap();
        assert_eq!(cli.command(), Command::Serve);
    }

    #[test]
    fn test_migrate_revert_flag() {
        let cli = Cli::try_parse_from(["coaching-api", "migrate", "--revert"]).unwrap();
        assert_eq!(
            cli.command(),
            Command::Migrate(migrate::MigrateArgs { revert: true })
        );
    }

    #[test]
    fn test_unknown_command_fails() {
        assert!(Cli::try_parse_from(["coaching-api", "ui"]).is_err());
    }
}
