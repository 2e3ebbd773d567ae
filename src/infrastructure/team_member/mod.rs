//! Team member infrastructure implementations

mod in_memory_repository;
mod postgres_repository;
mod service;

pub use in_memory_repository::InMemoryTeamMemberRepository;
pub(crate) use postgres_repository::row_to_member;
pub use postgres_repository::PostgresTeamMemberRepository;
pub use service::{CreateTeamMemberRequest, TeamMemberService};
