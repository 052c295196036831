//! Repository port for project storage, identifier allocation, and name lookup.

use crate::project::domain::{Project, ProjectId};
use std::sync::Arc;
use thiserror::Error;

/// Result type for project repository operations.
pub type ProjectRepositoryResult<T> = Result<T, ProjectRepositoryError>;

/// Project storage contract.
///
/// Implementations keep an id-keyed primary map and a case-insensitive name
/// index, and must apply every mutation to both or to neither.
#[cfg_attr(test, mockall::automock)]
pub trait ProjectRepository: Send + Sync {
    /// Reserves the next project identifier.
    ///
    /// Identifiers start at 1, increase monotonically, and are never handed
    /// out twice, even after the project holding one is removed.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectRepositoryError::Persistence`] when the store is
    /// unavailable.
    fn allocate_id(&self) -> ProjectRepositoryResult<ProjectId>;

    /// Stores a new project.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectRepositoryError::DuplicateId`] when the identifier is
    /// already stored or [`ProjectRepositoryError::DuplicateName`] when the
    /// name collides case-insensitively with another project.
    fn add(&self, project: &Project) -> ProjectRepositoryResult<()>;

    /// Removes a project and its name index entry.
    ///
    /// Returns `false` when the project does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectRepositoryError::Persistence`] when the store is
    /// unavailable.
    fn remove(&self, id: ProjectId) -> ProjectRepositoryResult<bool>;

    /// Finds a project by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectRepositoryError::Persistence`] when the store is
    /// unavailable.
    fn get_by_id(&self, id: ProjectId) -> ProjectRepositoryResult<Option<Project>>;

    /// Finds a project by name, ignoring case and surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectRepositoryError::Persistence`] when the store is
    /// unavailable.
    fn get_by_name(&self, name: &str) -> ProjectRepositoryResult<Option<Project>>;

    /// Returns every project in ascending identifier order.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectRepositoryError::Persistence`] when the store is
    /// unavailable.
    fn list_all(&self) -> ProjectRepositoryResult<Vec<Project>>;

    /// Replaces a stored project, re-indexing its name if it changed.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectRepositoryError::NotFound`] when the project does not
    /// exist or [`ProjectRepositoryError::DuplicateName`] when the new name
    /// belongs to a different project.
    fn update(&self, project: &Project) -> ProjectRepositoryResult<Project>;

    /// Returns the number of stored projects.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectRepositoryError::Persistence`] when the store is
    /// unavailable.
    fn count(&self) -> ProjectRepositoryResult<usize> {
        Ok(self.list_all()?.len())
    }
}

/// Errors returned by project repository implementations.
#[derive(Debug, Clone, Error)]
pub enum ProjectRepositoryError {
    /// A project with the same identifier already exists.
    #[error("duplicate project identifier: {0}")]
    DuplicateId(ProjectId),

    /// A project with the same name, ignoring case, already exists.
    #[error("project name already in use: {0}")]
    DuplicateName(String),

    /// The project was not found.
    #[error("project not found: {0}")]
    NotFound(ProjectId),

    /// Storage-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl ProjectRepositoryError {
    /// Wraps a storage error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
