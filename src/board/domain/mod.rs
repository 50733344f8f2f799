//! Domain model for the task board.
//!
//! Tasks, their lanes and priorities, and the draft and patch values used to
//! create and edit them. Infrastructure concerns stay outside this boundary.

mod draft;
mod error;
mod ids;
mod status;
mod task;

pub use draft::{TaskDraft, TaskPatch};
pub use error::{ParseTaskPriorityError, ParseTaskStatusError, TaskDomainError};
pub use ids::TaskId;
pub use status::{TaskPriority, TaskStatus};
pub use task::Task;
