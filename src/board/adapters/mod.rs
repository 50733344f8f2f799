//! Adapter implementations for board ports.

pub mod confirm;
pub mod memory;
