//! Create/edit task form.
//!
//! The form is an explicit state machine: [`ModalState::Closed`],
//! [`ModalState::OpenCreate`], or [`ModalState::OpenEdit`]. An edit works on
//! a snapshot of the task; nothing reaches the store until save.

use super::{DeleteOutcome, TaskStore, TaskStoreError, delete_with_confirmation};
use crate::board::{
    domain::{Task, TaskDraft, TaskId, TaskPriority, TaskStatus},
    ports::{Confirmer, TaskRepository},
};
use mockable::Clock;
use thiserror::Error;
use tracing::{debug, warn};

/// Heading shown while creating a task.
pub const CREATE_HEADING: &str = "Nova Tarefa";

/// Heading shown while editing a task.
pub const EDIT_HEADING: &str = "Editar Tarefa";

/// State of the task form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ModalState {
    /// No form is shown.
    #[default]
    Closed,
    /// Form for a new task.
    OpenCreate {
        /// Draft values typed so far.
        form: TaskDraft,
    },
    /// Form for an existing task.
    OpenEdit {
        /// Snapshot of the task as it was when the form opened.
        task: Task,
        /// Draft values typed so far.
        form: TaskDraft,
    },
}

/// Result of a successful save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// A new task was created.
    Created(Task),
    /// The edited task was updated.
    Updated(Task),
    /// The edited task no longer existed; nothing changed.
    Missing(TaskId),
}

/// Errors raised by form actions.
#[derive(Debug, Error)]
pub enum ModalError {
    /// The action needs an open form.
    #[error("task form is closed")]
    Closed,
    /// Save is disabled while the title is empty.
    #[error("cannot save a task without a title")]
    SaveUnavailable,
    /// Delete is only offered while editing an existing task.
    #[error("delete is only available while editing a task")]
    DeleteUnavailable,
    /// The store rejected the change.
    #[error(transparent)]
    Store(#[from] TaskStoreError),
}

/// Result type for form actions.
pub type ModalResult<T> = Result<T, ModalError>;

/// Reconciles create and edit intents into one form and forwards the
/// decisions to the store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModalController {
    state: ModalState,
}

impl ModalController {
    /// Creates a closed form.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: ModalState::Closed,
        }
    }

    /// Returns the current state.
    #[must_use]
    pub const fn state(&self) -> &ModalState {
        &self.state
    }

    /// Returns `true` when the form is shown.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        !matches!(self.state, ModalState::Closed)
    }

    /// Returns the form heading, or `None` when closed.
    #[must_use]
    pub const fn heading(&self) -> Option<&'static str> {
        match self.state {
            ModalState::Closed => None,
            ModalState::OpenCreate { .. } => Some(CREATE_HEADING),
            ModalState::OpenEdit { .. } => Some(EDIT_HEADING),
        }
    }

    /// Returns the task being edited, if any.
    #[must_use]
    pub const fn editing(&self) -> Option<&Task> {
        match &self.state {
            ModalState::OpenEdit { task, .. } => Some(task),
            _ => None,
        }
    }

    /// Returns the draft values, or `None` when closed.
    #[must_use]
    pub const fn form(&self) -> Option<&TaskDraft> {
        match &self.state {
            ModalState::Closed => None,
            ModalState::OpenCreate { form } | ModalState::OpenEdit { form, .. } => Some(form),
        }
    }

    /// Returns the draft values for editing, or `None` when closed.
    pub const fn form_mut(&mut self) -> Option<&mut TaskDraft> {
        match &mut self.state {
            ModalState::Closed => None,
            ModalState::OpenCreate { form } | ModalState::OpenEdit { form, .. } => Some(form),
        }
    }

    /// Returns `true` when save is enabled.
    #[must_use]
    pub fn can_save(&self) -> bool {
        self.form().is_some_and(TaskDraft::has_title)
    }

    /// Opens a blank form for a new task.
    pub fn open_create(&mut self) {
        self.warn_if_open();
        self.state = ModalState::OpenCreate {
            form: TaskDraft::default(),
        };
        debug!("task form opened for create");
    }

    /// Opens the form seeded from a snapshot of `task`.
    pub fn open_edit(&mut self, task: &Task) {
        self.warn_if_open();
        self.state = ModalState::OpenEdit {
            task: task.clone(),
            form: TaskDraft::from(task),
        };
        debug!(task_id = %task.id(), "task form opened for edit");
    }

    /// Sets the title field.
    ///
    /// # Errors
    ///
    /// Returns [`ModalError::Closed`] when no form is open.
    pub fn set_title(&mut self, title: impl Into<String>) -> ModalResult<()> {
        self.form_mut().ok_or(ModalError::Closed)?.title = title.into();
        Ok(())
    }

    /// Sets the description field.
    ///
    /// # Errors
    ///
    /// Returns [`ModalError::Closed`] when no form is open.
    pub fn set_description(&mut self, description: impl Into<String>) -> ModalResult<()> {
        self.form_mut().ok_or(ModalError::Closed)?.description = description.into();
        Ok(())
    }

    /// Sets the priority field.
    ///
    /// # Errors
    ///
    /// Returns [`ModalError::Closed`] when no form is open.
    pub fn set_priority(&mut self, priority: TaskPriority) -> ModalResult<()> {
        self.form_mut().ok_or(ModalError::Closed)?.priority = priority;
        Ok(())
    }

    /// Sets the status field.
    ///
    /// # Errors
    ///
    /// Returns [`ModalError::Closed`] when no form is open.
    pub fn set_status(&mut self, status: TaskStatus) -> ModalResult<()> {
        self.form_mut().ok_or(ModalError::Closed)?.status = status;
        Ok(())
    }

    /// Saves the form and closes it.
    ///
    /// Creates a task in create mode; merges every form field over the
    /// edited task in edit mode. Once the title check passes the form is
    /// closed, even if the store then fails.
    ///
    /// # Errors
    ///
    /// Returns [`ModalError::Closed`] when no form is open,
    /// [`ModalError::SaveUnavailable`] when the title is empty (the form
    /// stays open), or [`ModalError::Store`] when the store fails.
    pub fn save<R, C>(&mut self, store: &TaskStore<R, C>) -> ModalResult<SaveOutcome>
    where
        R: TaskRepository,
        C: Clock + Send + Sync,
    {
        if !self.is_open() {
            return Err(ModalError::Closed);
        }
        if !self.can_save() {
            warn!("save rejected, title is empty");
            return Err(ModalError::SaveUnavailable);
        }

        match std::mem::take(&mut self.state) {
            ModalState::OpenCreate { form } => Ok(SaveOutcome::Created(store.create(form)?)),
            ModalState::OpenEdit { task, form } => {
                let outcome = store
                    .update(task.id(), form.into())?
                    .map_or_else(|| SaveOutcome::Missing(task.id()), SaveOutcome::Updated);
                Ok(outcome)
            }
            ModalState::Closed => Err(ModalError::Closed),
        }
    }

    /// Asks for confirmation and deletes the edited task on approval.
    ///
    /// The form closes whatever the user answers.
    ///
    /// # Errors
    ///
    /// Returns [`ModalError::Closed`] when no form is open,
    /// [`ModalError::DeleteUnavailable`] in create mode (the form stays
    /// open), or [`ModalError::Store`] when the store fails.
    pub fn delete<R, C, F>(
        &mut self,
        store: &TaskStore<R, C>,
        confirmer: &F,
        message: &str,
    ) -> ModalResult<DeleteOutcome>
    where
        R: TaskRepository,
        C: Clock + Send + Sync,
        F: Confirmer + ?Sized,
    {
        let id = match &self.state {
            ModalState::Closed => return Err(ModalError::Closed),
            ModalState::OpenCreate { .. } => return Err(ModalError::DeleteUnavailable),
            ModalState::OpenEdit { task, .. } => task.id(),
        };
        self.state = ModalState::Closed;
        Ok(delete_with_confirmation(store, confirmer, message, id)?)
    }

    /// Closes the form and discards the draft.
    pub fn cancel(&mut self) {
        if self.is_open() {
            debug!("task form cancelled");
        }
        self.state = ModalState::Closed;
    }

    fn warn_if_open(&self) {
        if self.is_open() {
            warn!("task form reopened while already open, discarding draft");
        }
    }
}
