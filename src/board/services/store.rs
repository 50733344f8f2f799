//! Task store: the single owner of task mutations.

use crate::board::{
    domain::{Task, TaskDomainError, TaskDraft, TaskId, TaskPatch},
    ports::{TaskRepository, TaskRepositoryError},
};
use crate::config::TitlePolicy;
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Errors raised by task store operations.
#[derive(Debug, Error)]
pub enum TaskStoreError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Result type for task store operations.
pub type TaskStoreResult<T> = Result<T, TaskStoreError>;

/// Owns the task collection and funnels every create, update, and delete.
///
/// Readers only ever receive cloned snapshots, never the live collection.
#[derive(Clone)]
pub struct TaskStore<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
    title_policy: TitlePolicy,
}

impl<R, C> TaskStore<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a store that trusts callers to validate titles.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self {
            repository,
            clock,
            title_policy: TitlePolicy::FormOnly,
        }
    }

    /// Sets where the non-empty title rule is enforced.
    #[must_use]
    pub const fn with_title_policy(mut self, title_policy: TitlePolicy) -> Self {
        self.title_policy = title_policy;
        self
    }

    /// Returns the active title policy.
    #[must_use]
    pub const fn title_policy(&self) -> TitlePolicy {
        self.title_policy
    }

    /// Creates a task from a draft and appends it to the collection.
    ///
    /// The task receives a fresh identifier and the current time as its
    /// creation timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Domain`] when the title is empty under
    /// [`TitlePolicy::EveryMutation`], or [`TaskStoreError::Repository`] when
    /// the repository rejects the task.
    pub fn create(&self, draft: TaskDraft) -> TaskStoreResult<Task> {
        self.check_title(&draft.title)?;
        let task = Task::new(draft, &*self.clock);
        self.repository.store(&task)?;
        debug!(task_id = %task.id(), status = %task.status(), "task created");
        Ok(task)
    }

    /// Merges `patch` over the task with the given identifier.
    ///
    /// The task keeps its position in the collection. Returns `Ok(None)`
    /// without touching anything when the task does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Domain`] when the merged title is empty
    /// under [`TitlePolicy::EveryMutation`], or [`TaskStoreError::Repository`]
    /// when the repository fails.
    pub fn update(&self, id: TaskId, patch: TaskPatch) -> TaskStoreResult<Option<Task>> {
        let Some(mut task) = self.repository.find_by_id(id)? else {
            debug!(task_id = %id, "update skipped, task not found");
            return Ok(None);
        };
        task.apply(patch);
        self.check_title(task.title())?;
        match self.repository.update(&task) {
            Ok(()) => {}
            Err(TaskRepositoryError::NotFound(_)) => return Ok(None),
            Err(err) => return Err(err.into()),
        }
        debug!(task_id = %id, status = %task.status(), "task updated");
        Ok(Some(task))
    }

    /// Removes the task with the given identifier.
    ///
    /// Returns `Ok(false)` when no such task exists. Confirmation is the
    /// caller's concern.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Repository`] when the repository fails.
    pub fn delete(&self, id: TaskId) -> TaskStoreResult<bool> {
        match self.repository.remove(id) {
            Ok(_) => {
                debug!(task_id = %id, "task deleted");
                Ok(true)
            }
            Err(TaskRepositoryError::NotFound(_)) => {
                debug!(task_id = %id, "delete skipped, task not found");
                Ok(false)
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Returns a snapshot of one task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Repository`] when the repository fails.
    pub fn get(&self, id: TaskId) -> TaskStoreResult<Option<Task>> {
        Ok(self.repository.find_by_id(id)?)
    }

    /// Returns a snapshot of every task in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Repository`] when the repository fails.
    pub fn snapshot(&self) -> TaskStoreResult<Vec<Task>> {
        Ok(self.repository.list()?)
    }

    fn check_title(&self, title: &str) -> Result<(), TaskDomainError> {
        if self.title_policy == TitlePolicy::EveryMutation && title.is_empty() {
            return Err(TaskDomainError::EmptyTitle);
        }
        Ok(())
    }
}
