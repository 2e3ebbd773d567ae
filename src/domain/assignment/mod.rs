//! Team assignment domain module

mod entity;
mod repository;

pub use entity::TeamAssignment;
pub use repository::AssignmentRepository;
