//! Domain layer - Core business entities, rules and repository traits

pub mod assignment;
pub mod error;
pub mod feedback;
pub mod team;
pub mod team_member;

pub use assignment::{AssignmentRepository, TeamAssignment};
pub use error::DomainError;
pub use feedback::{
    Feedback, FeedbackId, FeedbackRepository, FeedbackTarget, FeedbackValidationError,
    NewFeedback, TargetType,
};
pub use team::{NewTeam, Team, TeamId, TeamRepository, TeamValidationError};
pub use team_member::{
    NewTeamMember, TeamMember, TeamMemberId, TeamMemberRepository, TeamMemberValidationError,
};

/// Parse a store identifier from text. Only strictly positive integers are
/// accepted since the store never hands out zero or negative IDs.
pub(crate) fn parse_positive_id(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok().filter(|id| *id > 0)
}
