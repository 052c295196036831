//! Domain model for projects.
//!
//! A project is an identified, validated name and description. Storage,
//! uniqueness, and cascading behaviour belong to the ports and services.

mod ids;
mod project;

pub use ids::ProjectId;
pub use project::{Project, name_key};
