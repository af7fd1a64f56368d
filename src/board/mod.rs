//! Kanban board domain model and operations
//!
//! This module contains the board state and the operations applied to it.
//! It is split into submodules:
//! - `card`: Column keys and task cards
//! - `board_state`: Board snapshot with drag and edit sessions
//! - `outcome`: Applied/ignored results of operations
//! - `reducer`: Pure functions implementing each board operation

mod board_state;
mod card;
mod outcome;
pub mod reducer;

// Re-export all public types
pub use board_state::{BoardState, DragSession, EditSession};
pub use card::{ColumnKey, Task};
pub use outcome::{IgnoredReason, Outcome, Transition};
pub use reducer::{Action, reduce};
