//! Team infrastructure

mod in_memory_repository;
mod postgres_repository;
mod service;

pub use in_memory_repository::InMemoryTeamRepository;
pub(crate) use postgres_repository::row_to_team;
pub use postgres_repository::PostgresTeamRepository;
pub use service::{CreateTeamRequest, TeamService};
