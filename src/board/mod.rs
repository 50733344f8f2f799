//! Task board for a single working session.
//!
//! The board owns a collection of tasks spread across three status lanes
//! (`todo`, `doing`, `done`). Tasks are created and edited through a modal
//! form, moved between lanes by drag gestures, and narrowed by a free-text
//! filter. Nothing outlives the process. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
