//! Project management for Todolist.
//!
//! Projects own tasks. This module creates, renames, lists, and deletes
//! projects while keeping names unique without regard to case, honouring the
//! configured project limit, and cascading deletes into the task store. The
//! module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
