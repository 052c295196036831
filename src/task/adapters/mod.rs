//! Adapter implementations for task repository ports.

pub mod memory;
