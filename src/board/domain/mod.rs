//! Domain model for the task board.
//!
//! The board domain models task records, the fixed stage sequence, and the
//! pure derivation of a three-stage board view from a flat task list while
//! keeping all infrastructure concerns outside of the domain boundary.

mod board;
mod error;
mod ids;
mod stage;
mod task;

pub use board::Board;
pub use error::{BoardDomainError, ParseDirectionError, ParseStageError};
pub use ids::{TaskId, TaskTitle};
pub use stage::{MoveDirection, Stage};
pub use task::{Task, TaskFields};
