//! Team member domain module
//!
//! Members are the people being coached. They can belong to any number of
//! teams and receive feedback directly.

mod entity;
mod repository;
mod validation;

pub use entity::{NewTeamMember, TeamMember, TeamMemberId};
#[cfg(test)]
pub use repository::MockTeamMemberRepository;
pub use repository::TeamMemberRepository;
pub use validation::{
    validate_email, validate_member_name, validate_picture, TeamMemberValidationError,
};
