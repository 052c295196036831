//! Single-field edits for stored tasks.

use super::{TaskServiceError, TaskServiceResult};
use crate::{
    config::TextLimits,
    task::{
        domain::{Task, TaskId, TaskStatus},
        ports::TaskRepository,
    },
};
use chrono::NaiveDate;
use std::sync::Arc;
use tracing::info;

/// Applies validated field edits to stored tasks.
///
/// Task names carry no uniqueness constraint, so renames only re-run the
/// length and emptiness checks.
#[derive(Clone)]
pub struct TaskUpdater<T>
where
    T: TaskRepository,
{
    tasks: Arc<T>,
    limits: TextLimits,
}

impl<T> TaskUpdater<T>
where
    T: TaskRepository,
{
    /// Creates a new task updater.
    #[must_use]
    pub const fn new(tasks: Arc<T>, limits: TextLimits) -> Self {
        Self { tasks, limits }
    }

    /// Renames a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::TaskNotFound`] when the task does not exist
    /// or [`TaskServiceError::Validation`] when the name is rejected.
    pub fn rename(&self, id: TaskId, name: &str) -> TaskServiceResult<Task> {
        let task = self.find_or_not_found(id)?;
        self.store(&task.renamed(name, &self.limits)?, "name")
    }

    /// Replaces a task's description.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::TaskNotFound`] when the task does not exist
    /// or [`TaskServiceError::Validation`] when the description is rejected.
    pub fn edit_description(&self, id: TaskId, description: &str) -> TaskServiceResult<Task> {
        let task = self.find_or_not_found(id)?;
        self.store(
            &task.with_description(description, &self.limits)?,
            "description",
        )
    }

    /// Changes a task's status.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::TaskNotFound`] when the task does not exist.
    pub fn change_status(&self, id: TaskId, status: TaskStatus) -> TaskServiceResult<Task> {
        let task = self.find_or_not_found(id)?;
        self.store(&task.with_status(status), "status")
    }

    /// Sets or clears a task's deadline.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::TaskNotFound`] when the task does not exist.
    pub fn edit_deadline(
        &self,
        id: TaskId,
        deadline: Option<NaiveDate>,
    ) -> TaskServiceResult<Task> {
        let task = self.find_or_not_found(id)?;
        self.store(&task.with_deadline(deadline), "deadline")
    }

    fn find_or_not_found(&self, id: TaskId) -> TaskServiceResult<Task> {
        self.tasks
            .get_by_id(id)?
            .ok_or(TaskServiceError::TaskNotFound(id))
    }

    fn store(&self, task: &Task, field: &'static str) -> TaskServiceResult<Task> {
        let updated = self.tasks.update(task)?;
        info!(task_id = %updated.id(), field, "task updated");
        Ok(updated)
    }
}
