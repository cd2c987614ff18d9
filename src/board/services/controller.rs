//! Board orchestration: refresh and the task-transition operations.

use std::sync::Arc;
use tracing::{debug, warn};

use super::editing::{Composer, EditDraft, Editor, TaskDraft};
use crate::board::{
    domain::{Board, MoveDirection, Stage, Task, TaskId},
    ports::{TaskPatch, TaskStore},
};

/// Owner of the in-memory board view and the transition operations.
///
/// The held [`Board`] is always a pure function of the last fetched task
/// list: every mutating operation issues exactly one write to the store and,
/// on success, triggers a full refresh. Nothing is updated optimistically.
/// Store failures are reported to the log and leave board and modal state
/// exactly as they were; re-triggering the operation is up to the user.
pub struct BoardController<S: TaskStore> {
    store: Arc<S>,
    board: Board,
    composer: Composer,
    editor: Editor,
}

impl<S: TaskStore> BoardController<S> {
    /// Creates a controller with an empty board and closed modals.
    #[must_use]
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            board: Board::default(),
            composer: Composer::default(),
            editor: Editor::default(),
        }
    }

    /// Creates a controller and performs the initial fetch.
    pub async fn initialize(store: Arc<S>) -> Self {
        let mut controller = Self::new(store);
        controller.refresh().await;
        controller
    }

    /// Returns the current board view.
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the creation-form state.
    #[must_use]
    pub const fn composer(&self) -> &Composer {
        &self.composer
    }

    /// Returns the editing state.
    #[must_use]
    pub const fn editor(&self) -> &Editor {
        &self.editor
    }

    /// Opens the creation form with empty fields.
    pub fn open_composer(&mut self) {
        self.composer = Composer::Open(TaskDraft::default());
    }

    /// Closes the creation form and discards the draft.
    pub fn cancel_composer(&mut self) {
        self.composer = Composer::Closed;
    }

    /// Returns the creation draft mutably, if the form is open.
    pub fn composer_draft_mut(&mut self) -> Option<&mut TaskDraft> {
        self.composer.draft_mut()
    }

    /// Selects a task for editing, snapshotting it into a draft.
    pub fn begin_edit(&mut self, task: &Task) {
        self.editor = Editor::Editing(EditDraft::from_task(task));
    }

    /// Discards the editing draft without submitting.
    pub fn cancel_edit(&mut self) {
        self.editor = Editor::Idle;
    }

    /// Returns the editing draft mutably, if a task is selected.
    pub fn edit_draft_mut(&mut self) -> Option<&mut EditDraft> {
        self.editor.draft_mut()
    }

    /// Re-fetches the task list and rebuilds the board.
    ///
    /// On failure the prior board is retained unchanged; no retry is
    /// attempted by this layer.
    pub async fn refresh(&mut self) {
        match self.store.list().await {
            Ok(tasks) => self.board = Board::derive(&tasks),
            Err(err) => warn!(error = %err, "board refresh failed; keeping previous board"),
        }
    }

    /// Submits the creation draft as a new task.
    ///
    /// A draft whose trimmed title is empty is rejected locally with zero
    /// store calls. On success the form closes, the fields reset, and the
    /// board is refreshed.
    pub async fn add_task(&mut self) {
        let Composer::Open(draft) = &self.composer else {
            debug!("add requested while the creation form is closed");
            return;
        };
        let new_task = match draft.to_new_task() {
            Ok(new_task) => new_task,
            Err(err) => {
                debug!(error = %err, "task creation rejected locally");
                return;
            }
        };
        match self.store.create(new_task).await {
            Ok(task) => {
                debug!(id = %task.id(), "task created");
                self.composer = Composer::Closed;
                self.refresh().await;
            }
            Err(err) => warn!(error = %err, "task creation failed"),
        }
    }

    /// Commits the editing draft as a full replace of the selected task.
    ///
    /// On success the selection clears and the board is refreshed.
    pub async fn submit_edit(&mut self) {
        let Editor::Editing(draft) = &self.editor else {
            debug!("edit submitted with no task selected");
            return;
        };
        let id = draft.task_id().clone();
        match self.store.replace(&id, draft.to_fields()).await {
            Ok(()) => {
                self.editor = Editor::Idle;
                self.refresh().await;
            }
            Err(err) => warn!(error = %err, id = %id, "task edit failed"),
        }
    }

    /// Flips the completion flag of a task, leaving all other fields
    /// untouched, then refreshes.
    pub async fn toggle_completed(&mut self, id: &TaskId, current: bool) {
        let patch = TaskPatch::default().with_completed(!current);
        match self.store.update(id, patch).await {
            Ok(()) => self.refresh().await,
            Err(err) => warn!(error = %err, id = %id, "completion toggle failed"),
        }
    }

    /// Shifts a task one stage in the given direction.
    ///
    /// A shift past either end of the stage order is a silent no-op with
    /// zero store calls. Otherwise the target stage determines the new
    /// `completed` value; the reserved middle stage has no backing predicate,
    /// so a move landing there carries the task onward in the direction of
    /// travel.
    pub async fn move_task(&mut self, task: &Task, from: Stage, direction: MoveDirection) {
        let Some(target) = from.shifted(direction) else {
            return;
        };
        let completed = target
            .completed_predicate()
            .unwrap_or(direction.is_right());
        let patch = TaskPatch::default().with_completed(completed);
        match self.store.update(task.id(), patch).await {
            Ok(()) => {
                debug!(id = %task.id(), from = %from, to = %target, "task moved");
                self.refresh().await;
            }
            Err(err) => warn!(error = %err, id = %task.id(), "task move failed"),
        }
    }

    /// Deletes a task, then refreshes. No confirmation step.
    pub async fn delete_task(&mut self, id: &TaskId) {
        match self.store.delete(id).await {
            Ok(()) => self.refresh().await,
            Err(err) => warn!(error = %err, id = %id, "task deletion failed"),
        }
    }
}
