//! Wire representations exchanged with the REST task service.

use crate::board::domain::{Task, TaskFields, TaskId};
use crate::board::ports::NewTask;
use serde::{Deserialize, Serialize};

/// A task document as the service returns it.
///
/// The service exposes the identifier as `_id`; newer deployments also
/// accept plain `id`.
#[derive(Debug, Deserialize)]
pub(crate) struct TaskRecord {
    #[serde(rename = "_id", alias = "id")]
    id: String,
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    participants: String,
    #[serde(default)]
    log: String,
    #[serde(default)]
    completed: bool,
}

impl TaskRecord {
    /// Maps the wire document onto the domain task.
    pub(crate) fn into_task(self) -> Task {
        Task::new(
            TaskId::new(self.id),
            TaskFields {
                title: self.title,
                description: self.description,
                participants: self.participants,
                log: self.log,
                completed: self.completed,
            },
        )
    }
}

/// Creation payload; `completed` is always submitted as `false`.
#[derive(Debug, Serialize)]
pub(crate) struct CreateTaskBody<'a> {
    title: &'a str,
    description: &'a str,
    participants: &'a str,
    log: &'a str,
    completed: bool,
}

impl<'a> CreateTaskBody<'a> {
    pub(crate) fn from_new_task(new_task: &'a NewTask) -> Self {
        Self {
            title: new_task.title().as_str(),
            description: new_task.description(),
            participants: new_task.participants(),
            log: new_task.log(),
            completed: false,
        }
    }
}
