//! Application services for project management.

mod error;
mod lifecycle;
mod updater;

pub use error::{ProjectServiceError, ProjectServiceResult};
pub use lifecycle::ProjectService;
pub use updater::ProjectUpdater;
