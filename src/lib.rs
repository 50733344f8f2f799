//! Devtasks: an in-memory task board engine.
//!
//! This crate holds the state behind a three-lane task board: the task
//! collection and its mutations, the lane filter, the drag-and-drop lane
//! transitions, and the create/edit form. A rendering layer reads the
//! derived [`board::services::BoardView`] and feeds user gestures back in.
//!
//! # Architecture
//!
//! Devtasks follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports
//!
//! # Modules
//!
//! - [`board`]: Tasks, lanes, filtering, drag and drop, and the task form
//! - [`config`]: Session configuration

pub mod board;
pub mod config;
