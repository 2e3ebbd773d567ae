//! Feedback validation

use thiserror::Error;

/// Errors that can occur during feedback validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FeedbackValidationError {
    #[error("Feedback content is required")]
    EmptyContent,

    #[error("Feedback content cannot exceed {0} characters")]
    ContentTooLong(usize),

    #[error("Target type must be 'team' or 'member', got '{0}'")]
    InvalidTargetType(String),

    #[error("Target ID must be a positive integer")]
    InvalidTargetId,
}

const MAX_CONTENT_LENGTH: usize = 5000;

/// Validate feedback content
pub fn validate_feedback_content(content: &str) -> Result<(), FeedbackValidationError> {
    if content.trim().is_empty() {
        return Err(FeedbackValidationError::EmptyContent);
    }

    if content.chars().count() > MAX_CONTENT_LENGTH {
        return Err(FeedbackValidationError::ContentTooLong(MAX_CONTENT_LENGTH));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_content() {
        assert!(validate_feedback_content("Great work!").is_ok());
    }

    #[test]
    fn test_empty_content() {
        assert_eq!(
            validate_feedback_content(""),
            Err(FeedbackValidationError::EmptyContent)
        );
        assert_eq!(
            validate_feedback_content("\n  "),
            Err(FeedbackValidationError::EmptyContent)
        );
    }

    #[test]
    fn test_content_too_long() {
        assert!(validate_feedback_content(&"x".repeat(5000)).is_ok());
        assert_eq!(
            validate_feedback_content(&"x".repeat(5001)),
            Err(FeedbackValidationError::ContentTooLong(5000))
        );
    }
}
