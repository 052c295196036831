//! Errors surfaced while handling a menu action.

use crate::{
    project::services::ProjectServiceError, task::services::TaskServiceError,
    validation::ValidationError,
};
use std::io;
use thiserror::Error;

/// Errors surfaced while handling a menu action.
#[derive(Debug, Error)]
pub enum MenuError {
    /// Reading input or writing output failed.
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),

    /// Input ended while an action was still prompting.
    #[error("input ended")]
    EndOfInput,

    /// An identifier was not a non-negative integer.
    #[error("invalid id '{0}', expected a number")]
    InvalidId(String),

    /// Status or deadline input was rejected.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A project operation failed.
    #[error(transparent)]
    Project(#[from] ProjectServiceError),

    /// A task operation failed.
    #[error(transparent)]
    Task(#[from] TaskServiceError),
}

impl MenuError {
    /// Returns `true` when the menu loop must stop rather than report the
    /// error and continue.
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::Io(_) | Self::EndOfInput)
    }
}
