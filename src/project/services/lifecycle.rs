//! Service layer for project creation, listing, and cascading deletion.
//!
//! Provides [`ProjectService`], which enforces name uniqueness and the
//! project limit on creation and removes a project's tasks before the
//! project itself.

use super::{ProjectServiceError, ProjectServiceResult};
use crate::{
    config::TodoConfig,
    project::{
        domain::{Project, ProjectId},
        ports::ProjectRepository,
    },
    sync::MutationGate,
    task::ports::TaskRepository,
};
use std::sync::Arc;
use tracing::{debug, info};

/// Project lifecycle orchestration service.
#[derive(Clone)]
pub struct ProjectService<P, T>
where
    P: ProjectRepository,
    T: TaskRepository,
{
    projects: Arc<P>,
    tasks: Arc<T>,
    config: TodoConfig,
    gate: MutationGate,
}

impl<P, T> ProjectService<P, T>
where
    P: ProjectRepository,
    T: TaskRepository,
{
    /// Creates a new project service.
    ///
    /// Services built over the same repositories must share `gate`.
    #[must_use]
    pub const fn new(
        projects: Arc<P>,
        tasks: Arc<T>,
        config: TodoConfig,
        gate: MutationGate,
    ) -> Self {
        Self {
            projects,
            tasks,
            config,
            gate,
        }
    }

    /// Creates a project.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectServiceError::DuplicateName`] when a project with the
    /// same name exists (ignoring case),
    /// [`ProjectServiceError::LimitExceeded`] when the project limit is
    /// reached, or [`ProjectServiceError::Validation`] when the name or
    /// description is rejected.
    pub fn create_project(&self, name: &str, description: &str) -> ProjectServiceResult<Project> {
        let _guard = self.gate.enter();

        if self.projects.get_by_name(name)?.is_some() {
            return Err(ProjectServiceError::DuplicateName(name.trim().to_owned()));
        }

        let limit = self.config.max_projects();
        if self.projects.count()? >= limit {
            return Err(ProjectServiceError::LimitExceeded { limit });
        }

        let id = self.projects.allocate_id()?;
        let project = Project::new(id, name, description, &self.config.text_limits())?;
        self.projects.add(&project)?;
        info!(project_id = %id, name = project.name(), "project created");
        Ok(project)
    }

    /// Deletes a project together with every task it owns.
    ///
    /// Tasks are removed before the project, so no task outlives its project
    /// at any point of the operation. Returns `false` when the project does
    /// not exist.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectServiceError::Repository`] or
    /// [`ProjectServiceError::TaskRepository`] when storage fails.
    pub fn delete_project(&self, id: ProjectId) -> ProjectServiceResult<bool> {
        let _guard = self.gate.enter();

        if self.projects.get_by_id(id)?.is_none() {
            debug!(project_id = %id, "delete requested for unknown project");
            return Ok(false);
        }

        let removed_tasks = self.tasks.remove_by_project(id)?;
        let removed = self.projects.remove(id)?;
        info!(project_id = %id, removed_tasks, "project deleted");
        Ok(removed)
    }

    /// Returns every project in creation order.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectServiceError::Repository`] when storage fails.
    pub fn list_projects(&self) -> ProjectServiceResult<Vec<Project>> {
        Ok(self.projects.list_all()?)
    }

    /// Returns a single project.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectServiceError::NotFound`] when the project does not
    /// exist.
    pub fn get_project(&self, id: ProjectId) -> ProjectServiceResult<Project> {
        self.projects
            .get_by_id(id)?
            .ok_or(ProjectServiceError::NotFound(id))
    }
}
