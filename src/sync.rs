//! Combined lock for mutations that span both repositories.
//!
//! Each in-memory repository guards its own maps, but several service
//! operations read one store and then write another: a project delete clears
//! tasks before removing the project, and adding a task checks the project
//! and the per-project count before inserting. Services built over the same
//! stores share one [`MutationGate`] and hold it for the whole
//! check-then-act sequence.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Shared exclusive lock serialising cross-repository mutations.
#[derive(Debug, Clone, Default)]
pub struct MutationGate {
    lock: Arc<Mutex<()>>,
}

impl MutationGate {
    /// Creates a new, unshared gate.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Blocks until the gate is free and returns a guard holding it.
    ///
    /// The gate protects no data of its own, so a poisoned lock is recovered
    /// rather than reported.
    pub fn enter(&self) -> MutexGuard<'_, ()> {
        self.lock.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
