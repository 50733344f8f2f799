//! Confirmation port consulted before a task is deleted.

/// Synchronous yes/no prompt.
///
/// The call blocks until the user answers. Nothing else on the board runs
/// while a confirmation is pending.
#[cfg_attr(test, mockall::automock)]
pub trait Confirmer {
    /// Asks the user to confirm `message`, returning `true` on approval.
    fn confirm(&self, message: &str) -> bool;
}

