//! Team validation

use thiserror::Error;

/// Errors that can occur during team validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TeamValidationError {
    #[error("Team name is required")]
    EmptyName,

    #[error("Team name cannot exceed {0} characters")]
    NameTooLong(usize),

    #[error("Team logo reference cannot exceed {0} characters")]
    LogoTooLong(usize),
}

const MAX_TEAM_NAME_LENGTH: usize = 255;
const MAX_TEAM_LOGO_LENGTH: usize = 2048;

/// Validate a team name
pub fn validate_team_name(name: &str) -> Result<(), TeamValidationError> {
    if name.trim().is_empty() {
        return Err(TeamValidationError::EmptyName);
    }

    if name.chars().count() > MAX_TEAM_NAME_LENGTH {
        return Err(TeamValidationError::NameTooLong(MAX_TEAM_NAME_LENGTH));
    }

    Ok(())
}

/// Validate a team logo reference
pub fn validate_team_logo(logo: &str) -> Result<(), TeamValidationError> {
    if logo.chars().count() > MAX_TEAM_LOGO_LENGTH {
        return Err(TeamValidationError::LogoTooLong(MAX_TEAM_LOGO_LENGTH));
    }

    Ok(())
}
