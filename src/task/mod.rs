//! Task management for Todolist.
//!
//! Tasks belong to exactly one project. This module adds, edits, lists, and
//! deletes tasks, requiring the owning project to exist and honouring the
//! per-project task limit. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
