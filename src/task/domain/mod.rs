//! Domain model for tasks.
//!
//! A task belongs to one project and carries a validated name and
//! description, a workflow status, and an optional deadline. Existence of the
//! owning project and per-project capacity are enforced by the services.

mod deadline;
mod ids;
mod status;
mod task;

pub use deadline::parse_deadline;
pub use ids::TaskId;
pub use status::TaskStatus;
pub use task::{NewTask, Task};
