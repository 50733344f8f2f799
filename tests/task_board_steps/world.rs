//! Shared world state for task board BDD scenarios.

use std::cell::Cell;
use std::rc::Rc;
use std::sync::Arc;

use devtasks::board::{
    adapters::memory::InMemoryTaskRepository,
    domain::TaskId,
    ports::Confirmer,
    services::{Board, BoardError, SaveOutcome},
};
use devtasks::config::BoardConfig;
use mockable::DefaultClock;
use rstest::fixture;

/// Confirmer whose answer a scenario can change after the board exists.
#[derive(Debug, Clone)]
pub struct ScriptedConfirmer {
    answer: Rc<Cell<bool>>,
}

impl Confirmer for ScriptedConfirmer {
    fn confirm(&self, _message: &str) -> bool {
        self.answer.get()
    }
}

/// Board type used by the BDD world.
pub type TestBoard = Board<InMemoryTaskRepository, DefaultClock, ScriptedConfirmer>;

/// Scenario world for board behaviour tests.
pub struct BoardWorld {
    pub board: Option<TestBoard>,
    pub confirm_answer: Rc<Cell<bool>>,
    pub last_save_result: Option<Result<SaveOutcome, BoardError>>,
}

impl BoardWorld {
    /// Creates a world with no board yet and confirmations approved.
    #[must_use]
    pub fn new() -> Self {
        Self {
            board: None,
            confirm_answer: Rc::new(Cell::new(true)),
            last_save_result: None,
        }
    }

    /// Builds the scenario board.
    ///
    /// # Errors
    ///
    /// Returns an error if demo seeding fails.
    pub fn start_board(&mut self, config: BoardConfig) -> Result<(), eyre::Report> {
        let confirmer = ScriptedConfirmer {
            answer: Rc::clone(&self.confirm_answer),
        };
        self.board = Some(Board::new(
            Arc::new(InMemoryTaskRepository::new()),
            Arc::new(DefaultClock),
            confirmer,
            config,
        )?);
        Ok(())
    }

    /// Returns the scenario board.
    ///
    /// # Errors
    ///
    /// Returns an error if no board has been started.
    pub fn board(&self) -> Result<&TestBoard, eyre::Report> {
        self.board
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing board in scenario world"))
    }

    /// Returns the scenario board mutably.
    ///
    /// # Errors
    ///
    /// Returns an error if no board has been started.
    pub fn board_mut(&mut self) -> Result<&mut TestBoard, eyre::Report> {
        self.board
            .as_mut()
            .ok_or_else(|| eyre::eyre!("missing board in scenario world"))
    }

    /// Looks up a task identifier by title.
    ///
    /// # Errors
    ///
    /// Returns an error if no task carries the title.
    pub fn task_id(&self, title: &str) -> Result<TaskId, eyre::Report> {
        self.board()?
            .store()
            .snapshot()?
            .iter()
            .find(|task| task.title() == title)
            .map(devtasks::board::domain::Task::id)
            .ok_or_else(|| eyre::eyre!("no task titled {title}"))
    }
}

impl Default for BoardWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BoardWorld {
    BoardWorld::default()
}
