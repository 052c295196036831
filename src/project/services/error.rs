//! Service-level errors for project operations.

use crate::{
    project::{domain::ProjectId, ports::ProjectRepositoryError},
    task::ports::TaskRepositoryError,
    validation::ValidationError,
};
use thiserror::Error;

/// Service-level errors for project operations.
#[derive(Debug, Error)]
pub enum ProjectServiceError {
    /// Name or description validation failed.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Another project already uses this name, ignoring case.
    #[error("project name must be unique: '{0}' is already taken")]
    DuplicateName(String),

    /// The project does not exist.
    #[error("project not found: {0}")]
    NotFound(ProjectId),

    /// The configured project limit has been reached.
    #[error("maximum number of projects reached ({limit})")]
    LimitExceeded {
        /// Configured maximum.
        limit: usize,
    },

    /// Project storage failed.
    #[error(transparent)]
    Repository(ProjectRepositoryError),

    /// Task storage failed while cascading a delete.
    #[error(transparent)]
    TaskRepository(#[from] TaskRepositoryError),
}

impl From<ProjectRepositoryError> for ProjectServiceError {
    fn from(err: ProjectRepositoryError) -> Self {
        match err {
            ProjectRepositoryError::DuplicateName(name) => Self::DuplicateName(name),
            ProjectRepositoryError::NotFound(id) => Self::NotFound(id),
            other => Self::Repository(other),
        }
    }
}

/// Result type for project service operations.
pub type ProjectServiceResult<T> = Result<T, ProjectServiceError>;
