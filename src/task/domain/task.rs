//! Task entity.

use super::{TaskId, TaskStatus};
use crate::{
    config::TextLimits,
    project::domain::ProjectId,
    validation::{ValidationError, validate_description, validate_name},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Validated task record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    project_id: ProjectId,
    name: String,
    description: String,
    status: TaskStatus,
    deadline: Option<NaiveDate>,
}

/// Parameter object for constructing a [`Task`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask<'a> {
    /// Identifier allocated by the task repository.
    pub id: TaskId,
    /// Owning project.
    pub project_id: ProjectId,
    /// Task name, validated and trimmed on construction.
    pub name: &'a str,
    /// Task description, validated and trimmed on construction.
    pub description: &'a str,
    /// Initial workflow status.
    pub status: TaskStatus,
    /// Optional due date.
    pub deadline: Option<NaiveDate>,
}

impl Task {
    /// Creates a validated task.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] when the name is empty or either text
    /// field exceeds its configured length.
    pub fn new(data: NewTask<'_>, limits: &TextLimits) -> Result<Self, ValidationError> {
        Ok(Self {
            id: data.id,
            project_id: data.project_id,
            name: validate_name(data.name, limits)?,
            description: validate_description(data.description, limits)?,
            status: data.status,
            deadline: data.deadline,
        })
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the owning project identifier.
    #[must_use]
    pub const fn project_id(&self) -> ProjectId {
        self.project_id
    }

    /// Returns the task name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the task description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the workflow status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the deadline, if any.
    #[must_use]
    pub const fn deadline(&self) -> Option<NaiveDate> {
        self.deadline
    }

    /// Returns a copy carrying a new, validated name.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] when the new name is rejected.
    pub fn renamed(&self, name: &str, limits: &TextLimits) -> Result<Self, ValidationError> {
        Ok(Self {
            name: validate_name(name, limits)?,
            ..self.clone()
        })
    }

    /// Returns a copy carrying a new, validated description.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] when the new description is rejected.
    pub fn with_description(
        &self,
        description: &str,
        limits: &TextLimits,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            description: validate_description(description, limits)?,
            ..self.clone()
        })
    }

    /// Returns a copy with a different status.
    #[must_use]
    pub fn with_status(&self, status: TaskStatus) -> Self {
        Self {
            status,
            ..self.clone()
        }
    }

    /// Returns a copy with a different deadline; `None` clears it.
    #[must_use]
    pub fn with_deadline(&self, deadline: Option<NaiveDate>) -> Self {
        Self {
            deadline,
            ..self.clone()
        }
    }

    /// Returns a copy reassigned to another project.
    ///
    /// Services never move tasks; repositories still re-index correctly
    /// when a stored task comes back with a different owner.
    #[must_use]
    pub fn moved_to(&self, project_id: ProjectId) -> Self {
        Self {
            project_id,
            ..self.clone()
        }
    }
}
