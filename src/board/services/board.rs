//! Board session: one store, one filter, one drag, one form.

use super::{
    BoardView, DeleteOutcome, DragDropCoordinator, DropEffect, ModalController, ModalError,
    SaveOutcome, TaskFilter, TaskStore, TaskStoreError, delete_with_confirmation,
};
use crate::board::{
    domain::{Task, TaskDraft, TaskId, TaskPriority, TaskStatus},
    ports::{Confirmer, TaskRepository},
};
use crate::config::BoardConfig;
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Errors raised by board session actions.
#[derive(Debug, Error)]
pub enum BoardError {
    /// A store operation failed.
    #[error(transparent)]
    Store(#[from] TaskStoreError),
    /// A form action failed.
    #[error(transparent)]
    Modal(#[from] ModalError),
}

/// Result type for board session actions.
pub type BoardResult<T> = Result<T, BoardError>;

/// Starter tasks shown on a fresh demo board.
#[must_use]
pub fn demo_tasks() -> Vec<TaskDraft> {
    vec![
        TaskDraft::new("Configurar Banco de Dados")
            .with_description("Instalar PostgreSQL e criar schemas")
            .with_status(TaskStatus::Done)
            .with_priority(TaskPriority::High),
        TaskDraft::new("Criar Rotas da API")
            .with_description("Definir endpoints RESTful")
            .with_status(TaskStatus::Doing)
            .with_priority(TaskPriority::High),
        TaskDraft::new("Estilizar Frontend")
            .with_description("Aplicar Tailwind CSS")
            .with_status(TaskStatus::Todo)
            .with_priority(TaskPriority::Medium),
    ]
}

/// Entry point for a rendering layer.
///
/// Every gesture runs to completion, store mutation included, before the
/// method returns. Call [`Board::view`] afterwards to redraw.
pub struct Board<R, C, F>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
    F: Confirmer,
{
    store: TaskStore<R, C>,
    confirmer: F,
    config: BoardConfig,
    filter: TaskFilter,
    drag: DragDropCoordinator,
    modal: ModalController,
}

impl<R, C, F> Board<R, C, F>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
    F: Confirmer,
{
    /// Creates a board session, seeding demo tasks when configured.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Store`] when seeding fails.
    pub fn new(
        repository: Arc<R>,
        clock: Arc<C>,
        confirmer: F,
        config: BoardConfig,
    ) -> BoardResult<Self> {
        let store = TaskStore::new(repository, clock).with_title_policy(config.title_policy);
        let board = Self {
            store,
            confirmer,
            config,
            filter: TaskFilter::default(),
            drag: DragDropCoordinator::new(),
            modal: ModalController::new(),
        };
        if board.config.seed_demo_tasks {
            board.seed_demo_tasks()?;
        }
        Ok(board)
    }

    /// Returns the underlying store.
    #[must_use]
    pub const fn store(&self) -> &TaskStore<R, C> {
        &self.store
    }

    /// Returns the session configuration.
    #[must_use]
    pub const fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Appends the demo tasks to the board.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Store`] when a create fails.
    pub fn seed_demo_tasks(&self) -> BoardResult<Vec<Task>> {
        let created = demo_tasks()
            .into_iter()
            .map(|draft| self.store.create(draft))
            .collect::<Result<Vec<_>, _>>()?;
        debug!(count = created.len(), "demo tasks seeded");
        Ok(created)
    }

    /// Builds the filtered view of the board.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Store`] when the snapshot cannot be read.
    pub fn view(&self) -> BoardResult<BoardView> {
        let tasks = self.store.snapshot()?;
        Ok(BoardView::build(&tasks, &self.filter))
    }

    /// Returns the active filter.
    #[must_use]
    pub const fn filter(&self) -> &TaskFilter {
        &self.filter
    }

    /// Replaces the filter query.
    pub fn set_filter(&mut self, query: impl Into<String>) {
        self.filter = TaskFilter::new(query);
    }

    /// Returns the drag coordinator.
    #[must_use]
    pub const fn drag(&self) -> &DragDropCoordinator {
        &self.drag
    }

    /// Picks up a task card.
    pub fn pick_up(&mut self, id: TaskId) {
        self.drag.pick_up(id);
    }

    /// Declares that `lane` accepts the drop.
    #[must_use]
    pub const fn hover(&self, lane: TaskStatus) -> DropEffect {
        self.drag.hover(lane)
    }

    /// Drops the task in flight on `lane`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Store`] when the update fails.
    pub fn drop_on(&mut self, lane: TaskStatus) -> BoardResult<Option<Task>> {
        Ok(self.drag.drop_on(lane, &self.store)?)
    }

    /// Returns the task form.
    #[must_use]
    pub const fn modal(&self) -> &ModalController {
        &self.modal
    }

    /// Returns the task form for typing into its fields.
    pub const fn modal_mut(&mut self) -> &mut ModalController {
        &mut self.modal
    }

    /// Opens a blank form for a new task.
    pub fn open_new_task(&mut self) {
        self.modal.open_create();
    }

    /// Opens the form for an existing task.
    ///
    /// Returns `false` without opening anything when the task is unknown.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Store`] when the lookup fails.
    pub fn open_task(&mut self, id: TaskId) -> BoardResult<bool> {
        let Some(task) = self.store.get(id)? else {
            return Ok(false);
        };
        self.modal.open_edit(&task);
        Ok(true)
    }

    /// Saves the form.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Modal`] when the form refuses or the store fails.
    pub fn save_modal(&mut self) -> BoardResult<SaveOutcome> {
        Ok(self.modal.save(&self.store)?)
    }

    /// Deletes the task being edited after confirmation.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Modal`] when the form refuses or the store fails.
    pub fn delete_from_modal(&mut self) -> BoardResult<DeleteOutcome> {
        Ok(self.modal.delete(
            &self.store,
            &self.confirmer,
            &self.config.delete_confirmation_message,
        )?)
    }

    /// Closes the form without saving.
    pub fn cancel_modal(&mut self) {
        self.modal.cancel();
    }

    /// Deletes a task from its card after confirmation.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Store`] when the delete fails.
    pub fn delete_task(&self, id: TaskId) -> BoardResult<DeleteOutcome> {
        Ok(delete_with_confirmation(
            &self.store,
            &self.confirmer,
            &self.config.delete_confirmation_message,
            id,
        )?)
    }
}
