//! Repository port for task storage and per-project lookup.

use crate::project::domain::ProjectId;
use crate::task::domain::{Task, TaskId};
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task storage contract.
///
/// Implementations keep an id-keyed primary map and an index from project
/// identifier to the ordered identifiers of that project's tasks. The index
/// never holds identifiers absent from the primary map.
#[cfg_attr(test, mockall::automock)]
pub trait TaskRepository: Send + Sync {
    /// Reserves the next task identifier.
    ///
    /// Identifiers start at 1, increase monotonically, and are never reused.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the store is
    /// unavailable.
    fn allocate_id(&self) -> TaskRepositoryResult<TaskId>;

    /// Stores a new task and appends it to its project's index entry.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::DuplicateId`] when the identifier is
    /// already stored.
    fn add(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Removes a task and its index entry.
    ///
    /// Returns `false` when the task does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the store is
    /// unavailable.
    fn remove(&self, id: TaskId) -> TaskRepositoryResult<bool>;

    /// Finds a task by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the store is
    /// unavailable.
    fn get_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Returns a project's tasks in insertion order.
    ///
    /// An unknown project yields an empty list rather than an error.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the store is
    /// unavailable.
    fn list_by_project(&self, project_id: ProjectId) -> TaskRepositoryResult<Vec<Task>>;

    /// Removes every task owned by a project and returns how many went.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the store is
    /// unavailable.
    fn remove_by_project(&self, project_id: ProjectId) -> TaskRepositoryResult<usize>;

    /// Replaces a stored task, moving its index entry if the owning project
    /// changed.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not exist.
    fn update(&self, task: &Task) -> TaskRepositoryResult<Task>;

    /// Returns every task in ascending identifier order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the store is
    /// unavailable.
    fn list_all(&self) -> TaskRepositoryResult<Vec<Task>>;

    /// Returns the number of tasks owned by a project.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the store is
    /// unavailable.
    fn count_by_project(&self, project_id: ProjectId) -> TaskRepositoryResult<usize> {
        Ok(self.list_by_project(project_id)?.len())
    }
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// A task with the same identifier already exists.
    #[error("duplicate task identifier: {0}")]
    DuplicateId(TaskId),

    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Storage-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a storage error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
