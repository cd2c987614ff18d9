//! Task record types fetched from and written to the task store.

use super::TaskId;
use serde::{Deserialize, Serialize};

/// The full mutable field set of a task record.
///
/// Everything except the identifier may change over a task's lifetime. The
/// `completed` flag is the sole determinant of stage placement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskFields {
    /// Display title shown on the board card.
    pub title: String,
    /// Free-form task description.
    #[serde(default)]
    pub description: String,
    /// Free-form text listing involved people.
    #[serde(default)]
    pub participants: String,
    /// Free-form comment/activity log.
    #[serde(default)]
    pub log: String,
    /// Completion flag deciding `waiting` versus `resolved` placement.
    #[serde(default)]
    pub completed: bool,
}

/// A task record as returned by the task store.
///
/// The identifier is assigned by the store and immutable once created; the
/// core never mutates a fetched task in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    #[serde(flatten)]
    fields: TaskFields,
}

impl Task {
    /// Reconstructs a task from store-held data.
    #[must_use]
    pub fn new(id: TaskId, fields: TaskFields) -> Self {
        Self { id, fields }
    }

    /// Returns the store-assigned identifier.
    #[must_use]
    pub const fn id(&self) -> &TaskId {
        &self.id
    }

    /// Returns the mutable field set.
    #[must_use]
    pub const fn fields(&self) -> &TaskFields {
        &self.fields
    }

    /// Returns the display title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.fields.title
    }

    /// Returns the completion flag.
    #[must_use]
    pub const fn completed(&self) -> bool {
        self.fields.completed
    }
}
