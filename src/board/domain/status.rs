//! Lane and priority enumerations.

use super::{ParseTaskPriorityError, ParseTaskStatusError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Status lane a task belongs to.
///
/// Every task sits in exactly one lane.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Work not yet started.
    #[default]
    Todo,
    /// Work in progress.
    Doing,
    /// Finished work.
    Done,
}

impl TaskStatus {
    /// All lanes in board order.
    pub const ALL: [Self; 3] = [Self::Todo, Self::Doing, Self::Done];

    /// Returns the canonical lane identifier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::Doing => "doing",
            Self::Done => "done",
        }
    }

    /// Returns the lane heading shown above the column.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Todo => "A Fazer",
            Self::Doing => "Em Andamento",
            Self::Done => "Concluído",
        }
    }

    /// Returns the option text used by the task form's status select.
    ///
    /// Differs from [`TaskStatus::label`] for the doing lane.
    #[must_use]
    pub const fn form_label(self) -> &'static str {
        match self {
            Self::Todo => "A Fazer",
            Self::Doing => "Em Progresso",
            Self::Done => "Concluído",
        }
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "todo" => Ok(Self::Todo),
            "doing" => Ok(Self::Doing),
            "done" => Ok(Self::Done),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Task priority.
///
/// Carried for display only; no board behaviour depends on it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskPriority {
    /// Low priority (`Baixa`).
    #[serde(rename = "Baixa")]
    Low,
    /// Medium priority (`Média`).
    #[default]
    #[serde(rename = "Média")]
    Medium,
    /// High priority (`Alta`).
    #[serde(rename = "Alta")]
    High,
}

impl TaskPriority {
    /// All priorities from lowest to highest.
    pub const ALL: [Self; 3] = [Self::Low, Self::Medium, Self::High];

    /// Returns the canonical priority label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "Baixa",
            Self::Medium => "Média",
            Self::High => "Alta",
        }
    }
}

impl TryFrom<&str> for TaskPriority {
    type Error = ParseTaskPriorityError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_lowercase();
        match normalized.as_str() {
            "baixa" | "low" => Ok(Self::Low),
            "média" | "media" | "medium" => Ok(Self::Medium),
            "alta" | "high" => Ok(Self::High),
            _ => Err(ParseTaskPriorityError(value.to_owned())),
        }
    }
}

impl fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
