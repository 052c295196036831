//! Service layer for adding, deleting, and listing tasks within projects.

use super::{TaskServiceError, TaskServiceResult};
use crate::{
    config::TodoConfig,
    project::{domain::ProjectId, ports::ProjectRepository},
    sync::MutationGate,
    task::{
        domain::{NewTask, Task, TaskId, TaskStatus},
        ports::TaskRepository,
    },
};
use chrono::NaiveDate;
use std::sync::Arc;
use tracing::{debug, info};

/// Request payload for adding a task to a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddTaskRequest {
    project_id: ProjectId,
    name: String,
    description: String,
    status: TaskStatus,
    deadline: Option<NaiveDate>,
}

impl AddTaskRequest {
    /// Creates a request with an empty description, `todo` status, and no
    /// deadline.
    #[must_use]
    pub fn new(project_id: ProjectId, name: impl Into<String>) -> Self {
        Self {
            project_id,
            name: name.into(),
            description: String::new(),
            status: TaskStatus::default(),
            deadline: None,
        }
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the initial status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the deadline.
    #[must_use]
    pub const fn with_deadline(mut self, deadline: Option<NaiveDate>) -> Self {
        self.deadline = deadline;
        self
    }
}

/// Task orchestration service scoped by owning project.
#[derive(Clone)]
pub struct TaskService<T, P>
where
    T: TaskRepository,
    P: ProjectRepository,
{
    tasks: Arc<T>,
    projects: Arc<P>,
    config: TodoConfig,
    gate: MutationGate,
}

impl<T, P> TaskService<T, P>
where
    T: TaskRepository,
    P: ProjectRepository,
{
    /// Creates a new task service.
    ///
    /// Services built over the same repositories must share `gate`.
    #[must_use]
    pub const fn new(
        tasks: Arc<T>,
        projects: Arc<P>,
        config: TodoConfig,
        gate: MutationGate,
    ) -> Self {
        Self {
            tasks,
            projects,
            config,
            gate,
        }
    }

    /// Adds a task to an existing project.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::ProjectNotFound`] when the project does not
    /// exist, [`TaskServiceError::LimitExceeded`] when the project already
    /// holds the maximum number of tasks, or [`TaskServiceError::Validation`]
    /// when the name or description is rejected.
    pub fn add_task(&self, request: AddTaskRequest) -> TaskServiceResult<Task> {
        let AddTaskRequest {
            project_id,
            name,
            description,
            status,
            deadline,
        } = request;

        let _guard = self.gate.enter();
        self.ensure_project_exists(project_id)?;

        let limit = self.config.max_tasks();
        if self.tasks.count_by_project(project_id)? >= limit {
            return Err(TaskServiceError::LimitExceeded { project_id, limit });
        }

        let id = self.tasks.allocate_id()?;
        let task = Task::new(
            NewTask {
                id,
                project_id,
                name: &name,
                description: &description,
                status,
                deadline,
            },
            &self.config.text_limits(),
        )?;
        self.tasks.add(&task)?;
        info!(task_id = %id, project_id = %project_id, "task added");
        Ok(task)
    }

    /// Deletes a task. Returns `false` when the task does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when storage fails.
    pub fn delete_task(&self, id: TaskId) -> TaskServiceResult<bool> {
        let removed = self.tasks.remove(id)?;
        if removed {
            info!(task_id = %id, "task deleted");
        } else {
            debug!(task_id = %id, "delete requested for unknown task");
        }
        Ok(removed)
    }

    /// Returns a project's tasks in creation order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::ProjectNotFound`] when the project does not
    /// exist, distinguishing a missing project from one without tasks.
    pub fn list_tasks_by_project(&self, project_id: ProjectId) -> TaskServiceResult<Vec<Task>> {
        self.ensure_project_exists(project_id)?;
        Ok(self.tasks.list_by_project(project_id)?)
    }

    /// Returns a single task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::TaskNotFound`] when the task does not
    /// exist.
    pub fn get_task(&self, id: TaskId) -> TaskServiceResult<Task> {
        self.tasks
            .get_by_id(id)?
            .ok_or(TaskServiceError::TaskNotFound(id))
    }

    fn ensure_project_exists(&self, project_id: ProjectId) -> TaskServiceResult<()> {
        if self.projects.get_by_id(project_id)?.is_none() {
            return Err(TaskServiceError::ProjectNotFound(project_id));
        }
        Ok(())
    }
}
