//! Reqwest-backed task store against the REST task service.

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use std::time::Duration;
use tracing::debug;
use url::Url;

use super::models::{CreateTaskBody, TaskRecord};
use crate::board::{
    domain::{Task, TaskFields, TaskId},
    ports::{NewTask, TaskPatch, TaskStore, TaskStoreError, TaskStoreResult},
};

/// Configuration for the HTTP task store.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    base_url: Url,
    timeout: Duration,
    connect_timeout: Duration,
}

impl StoreConfig {
    /// Creates a configuration with default timeouts.
    #[must_use]
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }

    /// Sets the per-request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the connection timeout.
    #[must_use]
    pub fn with_connect_timeout(mut self, connect_timeout: Duration) -> Self {
        self.connect_timeout = connect_timeout;
        self
    }
}

/// Task store adapter speaking the REST task service protocol.
///
/// Endpoints: `GET /tasks`, `POST /tasks`, `PUT /tasks/{id}`,
/// `PATCH /tasks/{id}`, `DELETE /tasks/{id}`.
#[derive(Debug, Clone)]
pub struct HttpTaskStore {
    http: Client,
    base_url: Url,
}

impl HttpTaskStore {
    /// Creates a store from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Transport`] when the underlying HTTP client
    /// cannot be constructed.
    pub fn new(config: StoreConfig) -> TaskStoreResult<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()
            .map_err(TaskStoreError::transport)?;
        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    fn collection_url(&self) -> TaskStoreResult<Url> {
        self.base_url
            .join("tasks")
            .map_err(TaskStoreError::transport)
    }

    fn task_url(&self, id: &TaskId) -> TaskStoreResult<Url> {
        self.base_url
            .join(&format!("tasks/{id}"))
            .map_err(TaskStoreError::transport)
    }

    /// Maps non-success statuses onto the store error taxonomy.
    ///
    /// A 404 becomes [`TaskStoreError::NotFound`] only for requests that
    /// targeted a specific task identifier.
    async fn ensure_success(
        response: Response,
        target: Option<&TaskId>,
    ) -> TaskStoreResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        match (status, target) {
            (StatusCode::NOT_FOUND, Some(id)) => Err(TaskStoreError::NotFound(id.clone())),
            (StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY, _) => {
                let message = if body.is_empty() {
                    status.to_string()
                } else {
                    body
                };
                Err(TaskStoreError::Validation(message))
            }
            _ => Err(TaskStoreError::transport(std::io::Error::other(format!(
                "unexpected status {status}: {body}"
            )))),
        }
    }
}

#[async_trait]
impl TaskStore for HttpTaskStore {
    async fn list(&self) -> TaskStoreResult<Vec<Task>> {
        let response = self
            .http
            .get(self.collection_url()?)
            .send()
            .await
            .map_err(TaskStoreError::transport)?;
        let response = Self::ensure_success(response, None).await?;
        let records: Vec<TaskRecord> = response.json().await.map_err(TaskStoreError::transport)?;
        Ok(records.into_iter().map(TaskRecord::into_task).collect())
    }

    async fn create(&self, new_task: NewTask) -> TaskStoreResult<Task> {
        let response = self
            .http
            .post(self.collection_url()?)
            .json(&CreateTaskBody::from_new_task(&new_task))
            .send()
            .await
            .map_err(TaskStoreError::transport)?;
        let response = Self::ensure_success(response, None).await?;
        let record: TaskRecord = response.json().await.map_err(TaskStoreError::transport)?;
        let task = record.into_task();
        debug!(id = %task.id(), "task created");
        Ok(task)
    }

    async fn replace(&self, id: &TaskId, fields: TaskFields) -> TaskStoreResult<()> {
        let response = self
            .http
            .put(self.task_url(id)?)
            .json(&fields)
            .send()
            .await
            .map_err(TaskStoreError::transport)?;
        Self::ensure_success(response, Some(id)).await?;
        Ok(())
    }

    async fn update(&self, id: &TaskId, patch: TaskPatch) -> TaskStoreResult<()> {
        if patch.is_empty() {
            return Ok(());
        }
        let response = self
            .http
            .patch(self.task_url(id)?)
            .json(&patch)
            .send()
            .await
            .map_err(TaskStoreError::transport)?;
        Self::ensure_success(response, Some(id)).await?;
        Ok(())
    }

    async fn delete(&self, id: &TaskId) -> TaskStoreResult<()> {
        let response = self
            .http
            .delete(self.task_url(id)?)
            .send()
            .await
            .map_err(TaskStoreError::transport)?;
        Self::ensure_success(response, Some(id)).await?;
        debug!(id = %id, "task deleted");
        Ok(())
    }
}
