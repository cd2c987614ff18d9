//! Creation and editing state machines.
//!
//! Both machines follow a draft-plus-commit pattern: local edits mutate only
//! a held draft, never the board, until the draft is committed through the
//! controller or discarded by a cancel.

use crate::board::domain::{BoardDomainError, Task, TaskFields, TaskId, TaskTitle};
use crate::board::ports::NewTask;

/// Mutable draft backing the task creation form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskDraft {
    /// Title input; validated on submission.
    pub title: String,
    /// Description input.
    pub description: String,
    /// Participants input.
    pub participants: String,
    /// Comment/activity log input.
    pub log: String,
}

impl TaskDraft {
    /// Validates the draft and builds a creation payload.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyTitle`] when the trimmed title is
    /// empty; no store request may be issued in that case.
    pub fn to_new_task(&self) -> Result<NewTask, BoardDomainError> {
        let title = TaskTitle::new(self.title.clone())?;
        Ok(NewTask::new(title)
            .with_description(self.description.clone())
            .with_participants(self.participants.clone())
            .with_log(self.log.clone()))
    }
}

/// Creation-form state: closed, or open with an in-progress draft.
///
/// Every transition into `Closed` discards the draft, so the fields always
/// start empty when the form reopens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Composer {
    /// No creation form is shown.
    #[default]
    Closed,
    /// The creation form is open with the held draft.
    Open(TaskDraft),
}

impl Composer {
    /// Returns `true` when the creation form is open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self, Self::Open(_))
    }

    /// Returns the in-progress draft, if the form is open.
    #[must_use]
    pub const fn draft(&self) -> Option<&TaskDraft> {
        match self {
            Self::Closed => None,
            Self::Open(draft) => Some(draft),
        }
    }

    /// Returns the in-progress draft mutably, if the form is open.
    #[must_use]
    pub fn draft_mut(&mut self) -> Option<&mut TaskDraft> {
        match self {
            Self::Closed => None,
            Self::Open(draft) => Some(draft),
        }
    }
}

/// Mutable draft of an existing task selected for editing.
///
/// Holds the immutable identifier plus an editable copy of every mutable
/// field. Committing submits a full replace; the identifier never changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditDraft {
    task_id: TaskId,
    /// Editable title.
    pub title: String,
    /// Editable description.
    pub description: String,
    /// Editable participants.
    pub participants: String,
    /// Editable comment/activity log.
    pub log: String,
    /// Editable completion flag.
    pub completed: bool,
}

impl EditDraft {
    /// Snapshots a fetched task into an editable draft.
    #[must_use]
    pub fn from_task(task: &Task) -> Self {
        let fields = task.fields();
        Self {
            task_id: task.id().clone(),
            title: fields.title.clone(),
            description: fields.description.clone(),
            participants: fields.participants.clone(),
            log: fields.log.clone(),
            completed: fields.completed,
        }
    }

    /// Returns the identifier of the task under edit.
    #[must_use]
    pub const fn task_id(&self) -> &TaskId {
        &self.task_id
    }

    /// Builds the full replacement field set from the draft.
    #[must_use]
    pub fn to_fields(&self) -> TaskFields {
        TaskFields {
            title: self.title.clone(),
            description: self.description.clone(),
            participants: self.participants.clone(),
            log: self.log.clone(),
            completed: self.completed,
        }
    }
}

/// Editing state: idle, or editing a selected task through a draft.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Editor {
    /// No task is selected for editing.
    #[default]
    Idle,
    /// A task is selected; edits accumulate in the held draft.
    Editing(EditDraft),
}

impl Editor {
    /// Returns `true` when a task is selected for editing.
    #[must_use]
    pub const fn is_editing(&self) -> bool {
        matches!(self, Self::Editing(_))
    }

    /// Returns the held draft, if editing.
    #[must_use]
    pub const fn draft(&self) -> Option<&EditDraft> {
        match self {
            Self::Idle => None,
            Self::Editing(draft) => Some(draft),
        }
    }

    /// Returns the held draft mutably, if editing.
    #[must_use]
    pub fn draft_mut(&mut self) -> Option<&mut EditDraft> {
        match self {
            Self::Idle => None,
            Self::Editing(draft) => Some(draft),
        }
    }
}
