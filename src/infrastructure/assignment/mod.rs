//! Team assignment infrastructure

mod in_memory_repository;
mod postgres_repository;
mod service;

pub use in_memory_repository::InMemoryAssignmentRepository;
pub use postgres_repository::PostgresAssignmentRepository;
pub use service::AssignmentService;
