//! Derived three-stage board view over a flat task list.

use super::{Stage, Task, TaskId};

/// The derived three-stage view over the task list.
///
/// A board is never a source of truth: it is recomputed in full from the
/// latest fetched task list and replaced wholesale, never mutated
/// field-by-field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    waiting: Vec<Task>,
    pending_confirmation: Vec<Task>,
    resolved: Vec<Task>,
}

impl Board {
    /// Derives a board from the ordered task list returned by the store.
    ///
    /// `waiting` receives the tasks with `completed = false` and `resolved`
    /// the tasks with `completed = true`, each preserving the input order.
    /// The reserved middle stage has no backing predicate and stays empty.
    #[must_use]
    pub fn derive(tasks: &[Task]) -> Self {
        let (resolved, waiting): (Vec<Task>, Vec<Task>) =
            tasks.iter().cloned().partition(Task::completed);
        Self {
            waiting,
            pending_confirmation: Vec::new(),
            resolved,
        }
    }

    /// Returns the ordered tasks occupying the given stage.
    #[must_use]
    pub fn stage_items(&self, stage: Stage) -> &[Task] {
        match stage {
            Stage::Waiting => &self.waiting,
            Stage::PendingConfirmation => &self.pending_confirmation,
            Stage::Resolved => &self.resolved,
        }
    }

    /// Returns the tasks awaiting resolution.
    #[must_use]
    pub fn waiting(&self) -> &[Task] {
        &self.waiting
    }

    /// Returns the tasks in the reserved middle stage.
    #[must_use]
    pub fn pending_confirmation(&self) -> &[Task] {
        &self.pending_confirmation
    }

    /// Returns the resolved tasks.
    #[must_use]
    pub fn resolved(&self) -> &[Task] {
        &self.resolved
    }

    /// Returns `true` when any stage holds a task with the given identifier.
    #[must_use]
    pub fn contains(&self, id: &TaskId) -> bool {
        Stage::ORDER
            .iter()
            .any(|stage| self.stage_items(*stage).iter().any(|task| task.id() == id))
    }

    /// Returns the total number of tasks across all stages.
    #[must_use]
    pub fn task_count(&self) -> usize {
        self.waiting.len() + self.pending_confirmation.len() + self.resolved.len()
    }
}
