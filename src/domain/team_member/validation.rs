//! Team member validation

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// Errors that can occur during team member validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TeamMemberValidationError {
    #[error("Name is required")]
    EmptyName,

    #[error("Name cannot exceed {0} characters")]
    NameTooLong(usize),

    #[error("Email is required")]
    EmptyEmail,

    #[error("Email cannot exceed {0} characters")]
    EmailTooLong(usize),

    #[error("Email '{0}' is not a valid email address")]
    InvalidEmail(String),

    #[error("Picture reference cannot exceed {0} characters")]
    PictureTooLong(usize),
}

const MAX_NAME_LENGTH: usize = 255;
const MAX_EMAIL_LENGTH: usize = 255;
const MAX_PICTURE_LENGTH: usize = 2048;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

/// Validate a member name
pub fn validate_member_name(name: &str) -> Result<(), TeamMemberValidationError> {
    if name.trim().is_empty() {
        return Err(TeamMemberValidationError::EmptyName);
    }

    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(TeamMemberValidationError::NameTooLong(MAX_NAME_LENGTH));
    }

    Ok(())
}

/// Validate a member email
///
/// Only the shape `local@domain.tld` is checked here. Uniqueness is the
/// store's job.
pub fn validate_email(email: &str) -> Result<(), TeamMemberValidationError> {
    if email.trim().is_empty() {
        return Err(TeamMemberValidationError::EmptyEmail);
    }

    if email.chars().count() > MAX_EMAIL_LENGTH {
        return Err(TeamMemberValidationError::EmailTooLong(MAX_EMAIL_LENGTH));
    }

    if !EMAIL_PATTERN.is_match(email) {
        return Err(TeamMemberValidationError::InvalidEmail(email.to_string()));
    }

    Ok(())
}

/// Validate an optional picture reference
pub fn validate_picture(picture: &str) -> Result<(), TeamMemberValidationError> {
    if picture.chars().count() > MAX_PICTURE_LENGTH {
        return Err(TeamMemberValidationError::PictureTooLong(MAX_PICTURE_LENGTH));
    }

    Ok(())
}
