//! Application services for task management.

mod error;
mod lifecycle;
mod updater;

pub use error::{TaskServiceError, TaskServiceResult};
pub use lifecycle::{AddTaskRequest, TaskService};
pub use updater::TaskUpdater;
