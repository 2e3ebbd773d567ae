//! Team entity and related types

use serde::{Deserialize, Serialize};

use super::validation::{validate_team_logo, validate_team_name, TeamValidationError};
use crate::domain::team_member::TeamMember;
use crate::domain::DomainError;

/// Store-assigned team identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeamId(i64);

impl TeamId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::str::FromStr for TeamId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::domain::parse_positive_id(s)
            .map(Self)
            .ok_or_else(|| DomainError::invalid_id(format!("Invalid team ID '{}'", s)))
    }
}

impl std::fmt::Display for TeamId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A validated team that has not been persisted yet
#[derive(Debug, Clone, PartialEq)]
pub struct NewTeam {
    name: String,
    logo: Option<String>,
}

impl NewTeam {
    /// Create a new unsaved team after validation
    pub fn new(name: impl Into<String>) -> Result<Self, TeamValidationError> {
        let name = name.into().trim().to_string();
        validate_team_name(&name)?;

        Ok(Self { name, logo: None })
    }

    /// Set the logo reference; blank references are treated as absent
    pub fn with_logo(mut self, logo: Option<String>) -> Result<Self, TeamValidationError> {
        let logo = logo.filter(|l| !l.trim().is_empty());

        if let Some(ref l) = logo {
            validate_team_logo(l)?;
        }

        self.logo = logo;
        Ok(self)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn logo(&self) -> Option<&str> {
        self.logo.as_deref()
    }

    /// Attach the identity assigned by the store
    pub fn into_team(self, id: TeamId) -> Team {
        Team {
            id,
            name: self.name,
            logo: self.logo,
            members: Vec::new(),
        }
    }
}

/// Team entity
///
/// `members` is only populated when the team was loaded together with its
/// assignments; plain listings leave it empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    id: TeamId,
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    logo: Option<String>,
    #[serde(default)]
    members: Vec<TeamMember>,
}

impl Team {
    /// Rebuild a team from persisted columns
    pub fn restore(id: TeamId, name: String, logo: Option<String>) -> Self {
        Self {
            id,
            name,
            logo,
            members: Vec::new(),
        }
    }

    /// Attach the member set (builder pattern)
    pub fn with_members(mut self, members: Vec<TeamMember>) -> Self {
        self.members = members;
        self
    }

    pub fn id(&self) -> TeamId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn logo(&self) -> Option<&str> {
        self.logo.as_deref()
    }

    pub fn members(&self) -> &[TeamMember] {
        &self.members
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::team_member::{NewTeamMember, TeamMemberId};

    #[test]
    fn test_team_id_parse() {
        let id: TeamId = "7".parse().unwrap();
        assert_eq!(id.value(), 7);
    }

    #[test]
    fn test_team_id_parse_invalid() {
        assert!("seven".parse::<TeamId>().is_err());
        assert!("0".parse::<TeamId>().is_err());
        assert!("1.5".parse::<TeamId>().is_err());
    }

    #[test]
    fn test_team_creation() {
        let team = NewTeam::new("Dev Team").unwrap().into_team(TeamId::new(1));

        assert_eq!(team.id().value(), 1);
        assert_eq!(team.name(), "Dev Team");
        assert!(team.logo().is_none());
        assert!(team.members().is_empty());
    }

    #[test]
    fn test_team_with_logo() {
        let team = NewTeam::new("Dev Team")
            .unwrap()
            .with_logo(Some("team-logo.png".to_string()))
            .unwrap();

        assert_eq!(team.logo(), Some("team-logo.png"));
    }

    #[test]
    fn test_team_invalid_name() {
        assert_eq!(NewTeam::new(""), Err(TeamValidationError::EmptyName));
    }

    #[test]
    fn test_team_with_members_serialization() {
        let member = NewTeamMember::new("John Doe", "john@example.com")
            .unwrap()
            .into_member(TeamMemberId::new(3));
        let team = Team::restore(TeamId::new(1), "Dev Team".to_string(), None)
            .with_members(vec![member]);

        let json = serde_json::to_string(&team).unwrap();
        assert!(json.contains("\"id\":1"));
        assert!(json.contains("\"members\":[{\"id\":3"));
        assert!(!json.contains("logo"));
    }
}
