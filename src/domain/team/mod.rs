//! Team domain module
//!
//! Teams group members for coaching. Membership is a many-to-many relation
//! stored as assignments.

mod entity;
mod repository;
mod validation;

pub use entity::{NewTeam, Team, TeamId};
#[cfg(test)]
pub use repository::MockTeamRepository;
pub use repository::TeamRepository;
pub use validation::{validate_team_logo, validate_team_name, TeamValidationError};
