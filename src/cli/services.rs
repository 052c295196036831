//! Service bundle shared by the menu and the binary.

use crate::{
    config::TodoConfig,
    project::{
        ports::ProjectRepository,
        services::{ProjectService, ProjectUpdater},
    },
    sync::MutationGate,
    task::{
        ports::TaskRepository,
        services::{TaskService, TaskUpdater},
    },
};
use std::sync::Arc;

/// Project and task services wired over one pair of repositories.
#[derive(Clone)]
pub struct Services<P, T>
where
    P: ProjectRepository,
    T: TaskRepository,
{
    projects: ProjectService<P, T>,
    project_updater: ProjectUpdater<P>,
    tasks: TaskService<T, P>,
    task_updater: TaskUpdater<T>,
}

impl<P, T> Services<P, T>
where
    P: ProjectRepository,
    T: TaskRepository,
{
    /// Builds every service over the given repositories with one shared
    /// [`MutationGate`].
    #[must_use]
    pub fn new(projects: Arc<P>, tasks: Arc<T>, config: TodoConfig) -> Self {
        let gate = MutationGate::new();
        let limits = config.text_limits();
        Self {
            projects: ProjectService::new(
                Arc::clone(&projects),
                Arc::clone(&tasks),
                config,
                gate.clone(),
            ),
            project_updater: ProjectUpdater::new(Arc::clone(&projects), limits),
            tasks: TaskService::new(Arc::clone(&tasks), projects, config, gate),
            task_updater: TaskUpdater::new(tasks, limits),
        }
    }

    /// Returns the project lifecycle service.
    #[must_use]
    pub const fn projects(&self) -> &ProjectService<P, T> {
        &self.projects
    }

    /// Returns the project field updater.
    #[must_use]
    pub const fn project_updater(&self) -> &ProjectUpdater<P> {
        &self.project_updater
    }

    /// Returns the task service.
    #[must_use]
    pub const fn tasks(&self) -> &TaskService<T, P> {
        &self.tasks
    }

    /// Returns the task field updater.
    #[must_use]
    pub const fn task_updater(&self) -> &TaskUpdater<T> {
        &self.task_updater
    }
}
