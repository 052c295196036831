//! Todolist: in-memory project and task management.
//!
//! This crate keeps projects and the tasks they own in process memory and
//! enforces the invariants that link the two collections: case-insensitive
//! project name uniqueness, capacity limits, monotonic identifiers, and
//! cascading task removal when a project is deleted.
//!
//! # Architecture
//!
//! Todolist follows hexagonal architecture principles:
//!
//! - **Domain**: Validated entities with no infrastructure dependencies
//! - **Ports**: Repository traits the services are generic over
//! - **Adapters**: Indexed in-memory repository implementations
//! - **Services**: Business rules layered over the ports
//!
//! # Modules
//!
//! - [`project`]: Project entities, storage, and lifecycle rules
//! - [`task`]: Task entities, storage, and per-project rules
//! - [`config`]: Bounded limits loaded from the environment
//! - [`cli`]: Line-oriented menu driving the services

pub mod cli;
pub mod config;
pub mod project;
pub mod sync;
pub mod task;
pub mod validation;
