//! Board configuration.
//!
//! Settings are plain data with serde support so a host can load them from
//! JSON alongside its own configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default text shown when asking the user to confirm a deletion.
pub const DEFAULT_DELETE_CONFIRMATION: &str = "Tem certeza que deseja excluir esta tarefa?";

/// Where the non-empty title rule is enforced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TitlePolicy {
    /// Only the task form refuses to save an empty title. Direct store calls
    /// are trusted.
    #[default]
    FormOnly,
    /// The store also rejects creates and updates that would leave a task
    /// without a title.
    EveryMutation,
}

/// Configuration for a board session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Prompt passed to the confirmer before a task is deleted.
    pub delete_confirmation_message: String,
    /// Where empty titles are rejected.
    pub title_policy: TitlePolicy,
    /// Whether a new board starts with the demo tasks.
    pub seed_demo_tasks: bool,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            delete_confirmation_message: DEFAULT_DELETE_CONFIRMATION.to_owned(),
            title_policy: TitlePolicy::FormOnly,
            seed_demo_tasks: false,
        }
    }
}

impl BoardConfig {
    /// Creates a configuration that validates titles on every mutation.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            title_policy: TitlePolicy::EveryMutation,
            ..Self::default()
        }
    }

    /// Parses a configuration from JSON. Missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`BoardConfigError::Parse`] when the input is not valid JSON
    /// or a value has the wrong shape.
    pub fn from_json(input: &str) -> Result<Self, BoardConfigError> {
        serde_json::from_str(input).map_err(BoardConfigError::Parse)
    }

    /// Sets the delete confirmation prompt.
    #[must_use]
    pub fn with_delete_confirmation_message(mut self, message: impl Into<String>) -> Self {
        self.delete_confirmation_message = message.into();
        self
    }

    /// Sets the title policy.
    #[must_use]
    pub const fn with_title_policy(mut self, policy: TitlePolicy) -> Self {
        self.title_policy = policy;
        self
    }

    /// Enables or disables demo seeding.
    #[must_use]
    pub const fn with_demo_tasks(mut self, enabled: bool) -> Self {
        self.seed_demo_tasks = enabled;
        self
    }
}

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum BoardConfigError {
    /// The JSON document could not be parsed.
    #[error("invalid board configuration: {0}")]
    Parse(#[source] serde_json::Error),
}
