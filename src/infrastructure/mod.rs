//! Infrastructure layer - Storage backends, services and observability

pub mod assignment;
pub mod feedback;
pub mod logging;
pub mod observability;
pub mod storage;
pub mod team;
pub mod team_member;
