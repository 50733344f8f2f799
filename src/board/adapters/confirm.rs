//! Fixed-answer confirmation adapter.

use crate::board::ports::Confirmer;

/// Confirmer that always gives the same answer.
///
/// Suits headless callers that have already decided, and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticConfirmer {
    answer: bool,
}

impl StaticConfirmer {
    /// Confirmer that approves every prompt.
    #[must_use]
    pub const fn approve() -> Self {
        Self { answer: true }
    }

    /// Confirmer that declines every prompt.
    #[must_use]
    pub const fn decline() -> Self {
        Self { answer: false }
    }
}

impl Confirmer for StaticConfirmer {
    fn confirm(&self, _message: &str) -> bool {
        self.answer
    }
}
