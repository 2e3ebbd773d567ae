//! Team assignment entity

use serde::{Deserialize, Serialize};

use crate::domain::team::TeamId;
use crate::domain::team_member::TeamMemberId;

/// Association between one team and one member.
///
/// The pair is the identity: at most one assignment exists per
/// (team, member).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeamAssignment {
    team_id: TeamId,
    team_member_id: TeamMemberId,
}

impl TeamAssignment {
    pub fn new(team_id: TeamId, team_member_id: TeamMemberId) -> Self {
        Self {
            team_id,
            team_member_id,
        }
    }

    pub fn team_id(&self) -> TeamId {
        self.team_id
    }

    pub fn team_member_id(&self) -> TeamMemberId {
        self.team_member_id
    }
}

impl std::fmt::Display for TeamAssignment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "team {} / member {}", self.team_id, self.team_member_id)
    }
}
