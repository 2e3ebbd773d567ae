//! Feedback entity and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::validation::{validate_feedback_content, FeedbackValidationError};

/// Store-assigned feedback identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeedbackId(i64);

impl FeedbackId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for FeedbackId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Kind of entity a feedback entry is about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetType {
    Team,
    Member,
}

impl TargetType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Team => "team",
            Self::Member => "member",
        }
    }
}

impl std::str::FromStr for TargetType {
    type Err = FeedbackValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "team" => Ok(Self::Team),
            "member" => Ok(Self::Member),
            other => Err(FeedbackValidationError::InvalidTargetType(other.to_string())),
        }
    }
}

impl std::fmt::Display for TargetType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The team or member a feedback entry refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FeedbackTarget {
    target_type: TargetType,
    target_id: i64,
}

impl FeedbackTarget {
    pub fn new(target_type: TargetType, target_id: i64) -> Result<Self, FeedbackValidationError> {
        if target_id <= 0 {
            return Err(FeedbackValidationError::InvalidTargetId);
        }

        Ok(Self {
            target_type,
            target_id,
        })
    }

    pub fn team(team_id: i64) -> Result<Self, FeedbackValidationError> {
        Self::new(TargetType::Team, team_id)
    }

    pub fn member(member_id: i64) -> Result<Self, FeedbackValidationError> {
        Self::new(TargetType::Member, member_id)
    }

    pub fn target_type(&self) -> TargetType {
        self.target_type
    }

    pub fn target_id(&self) -> i64 {
        self.target_id
    }
}

impl std::fmt::Display for FeedbackTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.target_type, self.target_id)
    }
}

/// A validated feedback entry that has not been persisted yet
#[derive(Debug, Clone, PartialEq)]
pub struct NewFeedback {
    content: String,
    target: FeedbackTarget,
}

impl NewFeedback {
    pub fn new(
        content: impl Into<String>,
        target: FeedbackTarget,
    ) -> Result<Self, FeedbackValidationError> {
        let content = content.into();
        validate_feedback_content(&content)?;

        Ok(Self { content, target })
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn target(&self) -> FeedbackTarget {
        self.target
    }

    /// Attach the identity and creation time assigned by the store
    pub fn into_feedback(self, id: FeedbackId, created_at: DateTime<Utc>) -> Feedback {
        Feedback {
            id,
            content: self.content,
            target_type: self.target.target_type,
            target_id: self.target.target_id,
            created_at,
        }
    }
}

/// Feedback entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feedback {
    id: FeedbackId,
    content: String,
    target_type: TargetType,
    target_id: i64,
    created_at: DateTime<Utc>,
}

impl Feedback {
    /// Rebuild a feedback entry from persisted columns
    pub fn restore(
        id: FeedbackId,
        content: String,
        target_type: TargetType,
        target_id: i64,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            content,
            target_type,
            target_id,
            created_at,
        }
    }

    pub fn id(&self) -> FeedbackId {
        self.id
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn target_type(&self) -> TargetType {
        self.target_type
    }

    pub fn target_id(&self) -> i64 {
        self.target_id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn is_about(&self, target: FeedbackTarget) -> bool {
        self.target_type == target.target_type() && self.target_id == target.target_id()
    }
}
