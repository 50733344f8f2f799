//! Confirmation-gated task deletion.

use super::{TaskStore, TaskStoreResult};
use crate::board::{
    domain::TaskId,
    ports::{Confirmer, TaskRepository},
};
use mockable::Clock;
use tracing::debug;

/// Outcome of a delete request that went through confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The user confirmed and the task was removed.
    Deleted,
    /// The user confirmed but the task no longer existed.
    Missing,
    /// The user declined; the store was not called.
    Declined,
}

/// Asks `confirmer` with `message`, then deletes `id` on approval.
///
/// # Errors
///
/// Returns the store error when the delete fails.
pub fn delete_with_confirmation<R, C, F>(
    store: &TaskStore<R, C>,
    confirmer: &F,
    message: &str,
    id: TaskId,
) -> TaskStoreResult<DeleteOutcome>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
    F: Confirmer + ?Sized,
{
    if !confirmer.confirm(message) {
        debug!(task_id = %id, "delete declined");
        return Ok(DeleteOutcome::Declined);
    }
    if store.delete(id)? {
        Ok(DeleteOutcome::Deleted)
    } else {
        Ok(DeleteOutcome::Missing)
    }
}
