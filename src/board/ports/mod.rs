//! Port contracts for the task board.
//!
//! Ports define infrastructure-agnostic interfaces used by board services.

pub mod confirm;
pub mod repository;

pub use confirm::Confirmer;
pub use repository::{TaskRepository, TaskRepositoryError, TaskRepositoryResult};
