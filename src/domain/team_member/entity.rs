//! Team member entity and related types

use serde::{Deserialize, Serialize};

use super::validation::{
    validate_email, validate_member_name, validate_picture, TeamMemberValidationError,
};
use crate::domain::DomainError;

/// Store-assigned team member identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeamMemberId(i64);

impl TeamMemberId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::str::FromStr for TeamMemberId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::domain::parse_positive_id(s)
            .map(Self)
            .ok_or_else(|| DomainError::invalid_id(format!("Invalid team member ID '{}'", s)))
    }
}

impl std::fmt::Display for TeamMemberId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A validated team member that has not been persisted yet
#[derive(Debug, Clone, PartialEq)]
pub struct NewTeamMember {
    name: String,
    email: String,
    picture: Option<String>,
}

impl NewTeamMember {
    /// Create a new unsaved team member after validation
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> Result<Self, TeamMemberValidationError> {
        let name = name.into().trim().to_string();
        let email = email.into().trim().to_string();
        validate_member_name(&name)?;
        validate_email(&email)?;

        Ok(Self {
            name,
            email,
            picture: None,
        })
    }

    /// Set the picture reference; blank references are treated as absent
    pub fn with_picture(
        mut self,
        picture: Option<String>,
    ) -> Result<Self, TeamMemberValidationError> {
        let picture = picture.filter(|p| !p.trim().is_empty());

        if let Some(ref p) = picture {
            validate_picture(p)?;
        }

        self.picture = picture;
        Ok(self)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn picture(&self) -> Option<&str> {
        self.picture.as_deref()
    }

    /// Attach the identity assigned by the store
    pub fn into_member(self, id: TeamMemberId) -> TeamMember {
        TeamMember {
            id,
            name: self.name,
            email: self.email,
            picture: self.picture,
        }
    }
}

/// Team member entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMember {
    id: TeamMemberId,
    name: String,
    email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    picture: Option<String>,
}

impl TeamMember {
    /// Rebuild a member from persisted columns
    pub fn restore(
        id: TeamMemberId,
        name: String,
        email: String,
        picture: Option<String>,
    ) -> Self {
        Self {
            id,
            name,
            email,
            picture,
        }
    }

    pub fn id(&self) -> TeamMemberId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn picture(&self) -> Option<&str> {
        self.picture.as_deref()
    }
}
