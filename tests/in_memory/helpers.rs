//! Shared test helpers for in-memory board integration tests.

use devtasks::board::{
    adapters::{confirm::StaticConfirmer, memory::InMemoryTaskRepository},
    domain::{Task, TaskStatus},
    services::Board,
};
use devtasks::config::BoardConfig;
use mockable::DefaultClock;
use rstest::fixture;
use std::sync::Arc;

/// Board type used across integration tests.
pub type TestBoard = Board<InMemoryTaskRepository, DefaultClock, StaticConfirmer>;

/// Provides a fresh in-memory repository for each test.
#[fixture]
pub fn repo() -> InMemoryTaskRepository {
    InMemoryTaskRepository::new()
}

/// Provides a clock for task creation.
#[fixture]
pub fn clock() -> DefaultClock {
    DefaultClock
}

/// Provides a board seeded with the demo tasks whose deletions are approved.
///
/// # Errors
///
/// Returns an error if seeding fails.
#[fixture]
pub fn demo_board() -> Result<TestBoard, devtasks::board::services::BoardError> {
    Board::new(
        Arc::new(InMemoryTaskRepository::new()),
        Arc::new(DefaultClock),
        StaticConfirmer::approve(),
        BoardConfig::default().with_demo_tasks(true),
    )
}

/// Returns `(title, lane)` pairs in collection order.
#[must_use]
pub fn lanes_of(tasks: &[Task]) -> Vec<(String, TaskStatus)> {
    tasks
        .iter()
        .map(|task| (task.title().to_owned(), task.status()))
        .collect()
}

/// Finds a task by title.
///
/// # Errors
///
/// Returns an error if no task carries the title.
pub fn find_titled<'a>(tasks: &'a [Task], title: &str) -> eyre::Result<&'a Task> {
    tasks
        .iter()
        .find(|task| task.title() == title)
        .ok_or_else(|| eyre::eyre!("no task titled {title}"))
}
