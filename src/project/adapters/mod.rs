//! Adapter implementations for project repository ports.

pub mod memory;
