//! Free-text task filter.

use crate::board::domain::{Task, TaskStatus};

/// Case-insensitive substring filter over task titles and descriptions.
///
/// Holds only the query. Matching is recomputed from the collection on
/// every call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFilter {
    query: String,
    folded: String,
}

impl TaskFilter {
    /// Creates a filter for the given query.
    #[must_use]
    pub fn new(query: impl Into<String>) -> Self {
        let raw = query.into();
        let folded = raw.to_lowercase();
        Self { query: raw, folded }
    }

    /// Returns the query as typed.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Returns `true` when the filter lets every task through.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.query.is_empty()
    }

    /// Returns `true` when `task` matches the query.
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        self.is_empty()
            || task.title().to_lowercase().contains(&self.folded)
            || task.description().to_lowercase().contains(&self.folded)
    }

    /// Yields matching tasks in collection order.
    pub fn apply<'a>(&'a self, tasks: &'a [Task]) -> impl Iterator<Item = &'a Task> + 'a {
        tasks.iter().filter(|task| self.matches(task))
    }

    /// Yields matching tasks in the given lane, in collection order.
    pub fn in_lane<'a>(
        &'a self,
        tasks: &'a [Task],
        lane: TaskStatus,
    ) -> impl Iterator<Item = &'a Task> + 'a {
        self.apply(tasks).filter(move |task| task.status() == lane)
    }

    /// Counts matching tasks in the given lane.
    #[must_use]
    pub fn lane_count(&self, tasks: &[Task], lane: TaskStatus) -> usize {
        self.in_lane(tasks, lane).count()
    }
}
