//! Application services for the task board.

mod board;
mod deletion;
mod drag_drop;
mod filter;
mod modal;
mod store;
mod view;

pub use board::{Board, BoardError, BoardResult, demo_tasks};
pub use deletion::{DeleteOutcome, delete_with_confirmation};
pub use drag_drop::{DragDropCoordinator, DropEffect};
pub use filter::TaskFilter;
pub use modal::{
    CREATE_HEADING, EDIT_HEADING, ModalController, ModalError, ModalResult, ModalState,
    SaveOutcome,
};
pub use store::{TaskStore, TaskStoreError, TaskStoreResult};
pub use view::{BoardView, LaneView};
