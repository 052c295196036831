//! Service-level errors for task operations.

use crate::{
    project::{domain::ProjectId, ports::ProjectRepositoryError},
    task::{domain::TaskId, ports::TaskRepositoryError},
    validation::ValidationError,
};
use thiserror::Error;

/// Service-level errors for task operations.
#[derive(Debug, Error)]
pub enum TaskServiceError {
    /// Name, description, status, or deadline validation failed.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The referenced project does not exist.
    #[error("project not found: {0}")]
    ProjectNotFound(ProjectId),

    /// The task does not exist.
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),

    /// The project already holds the configured maximum of tasks.
    #[error("maximum number of tasks for project {project_id} reached ({limit})")]
    LimitExceeded {
        /// Project at capacity.
        project_id: ProjectId,
        /// Configured maximum.
        limit: usize,
    },

    /// Task storage failed.
    #[error(transparent)]
    Repository(TaskRepositoryError),

    /// Project storage failed while checking the owning project.
    #[error(transparent)]
    ProjectRepository(ProjectRepositoryError),
}

impl TaskServiceError {
    /// Returns `true` for either not-found variant.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::ProjectNotFound(_) | Self::TaskNotFound(_))
    }
}

impl From<TaskRepositoryError> for TaskServiceError {
    fn from(err: TaskRepositoryError) -> Self {
        match err {
            TaskRepositoryError::NotFound(id) => Self::TaskNotFound(id),
            other => Self::Repository(other),
        }
    }
}

impl From<ProjectRepositoryError> for TaskServiceError {
    fn from(err: ProjectRepositoryError) -> Self {
        match err {
            ProjectRepositoryError::NotFound(id) => Self::ProjectNotFound(id),
            other => Self::ProjectRepository(other),
        }
    }
}

/// Result type for task service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;
