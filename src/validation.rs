//! Validation rules shared by project and task entities.
//!
//! Both entity kinds carry a name and a description with identical
//! constraints, so the checks live here rather than in either domain.

use crate::config::TextLimits;
use thiserror::Error;

/// Errors returned while constructing or editing an entity.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// The name is empty after trimming.
    #[error("name must not be empty")]
    EmptyName,

    /// The name exceeds the configured length limit.
    #[error("name must be at most {max} characters, got {actual}")]
    NameTooLong {
        /// Configured maximum.
        max: usize,
        /// Length of the rejected value.
        actual: usize,
    },

    /// The description exceeds the configured length limit.
    #[error("description must be at most {max} characters, got {actual}")]
    DescriptionTooLong {
        /// Configured maximum.
        max: usize,
        /// Length of the rejected value.
        actual: usize,
    },

    /// The status is not one of `todo`, `doing`, or `done`.
    #[error("invalid status '{0}', expected one of: todo, doing, done")]
    InvalidStatus(String),

    /// The deadline is not a `YYYY-MM-DD` calendar date.
    #[error("invalid deadline '{0}', expected YYYY-MM-DD")]
    InvalidDeadline(String),
}

/// Trims and checks an entity name.
///
/// # Errors
///
/// Returns [`ValidationError::EmptyName`] when nothing remains after
/// trimming, or [`ValidationError::NameTooLong`] when the trimmed value has
/// more characters than `limits.max_name_len`.
pub fn validate_name(raw: &str, limits: &TextLimits) -> Result<String, ValidationError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    let actual = name.chars().count();
    if actual > limits.max_name_len {
        return Err(ValidationError::NameTooLong {
            max: limits.max_name_len,
            actual,
        });
    }
    Ok(name.to_owned())
}

/// Trims and checks an entity description. Empty descriptions are allowed.
///
/// # Errors
///
/// Returns [`ValidationError::DescriptionTooLong`] when the trimmed value has
/// more characters than `limits.max_description_len`.
pub fn validate_description(raw: &str, limits: &TextLimits) -> Result<String, ValidationError> {
    let description = raw.trim();
    let actual = description.chars().count();
    if actual > limits.max_description_len {
        return Err(ValidationError::DescriptionTooLong {
            max: limits.max_description_len,
            actual,
        });
    }
    Ok(description.to_owned())
}
