//! Read model handed to the rendering layer.

use super::TaskFilter;
use crate::board::domain::{Task, TaskStatus};
use serde::Serialize;

/// One lane of the board as it should be drawn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LaneView {
    /// Lane identity.
    pub lane: TaskStatus,
    /// Number of visible tasks in the lane.
    pub count: usize,
    /// Visible tasks in collection order.
    pub tasks: Vec<Task>,
}

impl LaneView {
    /// Returns the lane heading.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        self.lane.label()
    }

    /// Returns `true` when nothing is visible in the lane.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

/// Immutable snapshot of the filtered board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardView {
    /// The filter query the view was built with.
    pub filter: String,
    /// Lanes in board order: todo, doing, done.
    pub lanes: Vec<LaneView>,
}

impl BoardView {
    /// Builds the view for `tasks` under `filter`.
    #[must_use]
    pub fn build(tasks: &[Task], filter: &TaskFilter) -> Self {
        let lanes = TaskStatus::ALL
            .into_iter()
            .map(|lane| {
                let visible: Vec<Task> = filter.in_lane(tasks, lane).cloned().collect();
                LaneView {
                    lane,
                    count: visible.len(),
                    tasks: visible,
                }
            })
            .collect();

        Self {
            filter: filter.query().to_owned(),
            lanes,
        }
    }

    /// Returns the view of one lane.
    #[must_use]
    pub fn lane(&self, lane: TaskStatus) -> Option<&LaneView> {
        self.lanes.iter().find(|view| view.lane == lane)
    }

    /// Returns the visible task count of one lane.
    #[must_use]
    pub fn count(&self, lane: TaskStatus) -> usize {
        self.lane(lane).map_or(0, |view| view.count)
    }

    /// Returns the total number of visible tasks.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.lanes.iter().map(|view| view.count).sum()
    }
}
