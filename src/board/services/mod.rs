//! Application services orchestrating board state and task transitions.

mod controller;
mod editing;

pub use controller::BoardController;
pub use editing::{Composer, EditDraft, Editor, TaskDraft};
