//! Drag-and-drop lane transitions.

use super::{TaskStore, TaskStoreResult};
use crate::board::{
    domain::{Task, TaskId, TaskPatch, TaskStatus},
    ports::TaskRepository,
};
use mockable::Clock;
use tracing::{debug, warn};

/// Effect a drop target declares while a task hovers over it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropEffect {
    /// The task will be moved to the hovered lane.
    Move,
}

/// Tracks the task in flight between pick-up and drop.
///
/// At most one task is in flight. A new pick-up replaces the previous one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DragDropCoordinator {
    dragged: Option<TaskId>,
}

impl DragDropCoordinator {
    /// Creates a coordinator with nothing in flight.
    #[must_use]
    pub const fn new() -> Self {
        Self { dragged: None }
    }

    /// Returns the task currently picked up, if any.
    #[must_use]
    pub const fn dragged(&self) -> Option<TaskId> {
        self.dragged
    }

    /// Picks up a task card.
    pub fn pick_up(&mut self, id: TaskId) {
        if let Some(previous) = self.dragged.replace(id) {
            debug!(task_id = %id, previous = %previous, "pick-up replaced task in flight");
        } else {
            debug!(task_id = %id, "task picked up");
        }
    }

    /// Declares that `lane` accepts the drop. Board state is untouched.
    #[must_use]
    pub const fn hover(&self, _lane: TaskStatus) -> DropEffect {
        DropEffect::Move
    }

    /// Drops the task in flight on `lane`.
    ///
    /// Moves the task with a status-only update and clears the in-flight
    /// slot. Returns `Ok(None)` when nothing was picked up or the task has
    /// since disappeared. Dropping on the current lane still performs the
    /// update, which leaves the task unchanged.
    ///
    /// # Errors
    ///
    /// Returns the store error when the update fails. The in-flight slot is
    /// cleared either way.
    pub fn drop_on<R, C>(
        &mut self,
        lane: TaskStatus,
        store: &TaskStore<R, C>,
    ) -> TaskStoreResult<Option<Task>>
    where
        R: TaskRepository,
        C: Clock + Send + Sync,
    {
        let Some(id) = self.dragged.take() else {
            warn!(lane = %lane, "drop ignored, nothing picked up");
            return Ok(None);
        };
        debug!(task_id = %id, lane = %lane, "task dropped");
        store.update(id, TaskPatch::status_only(lane))
    }
}
