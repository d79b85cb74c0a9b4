//! Saved task actions.
//!
//! CRUD over the daemon's saved tasks. The update request type carries no
//! agent field, so task-to-agent binding is immutable by construction on
//! this side of the wire.

use crate::api_client::{ApiClient, ApiClientError};
use oak_api::types::{CreateSavedTaskRequest, MessageResponse, UpdateSavedTaskRequest};
use oak_core::{AgentRun, SavedTask};

#[derive(Debug, thiserror::Error)]
pub enum TaskActionError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error(transparent)]
    Api(#[from] ApiClientError),
}

pub struct TaskController {
    client: ApiClient,
}

impl TaskController {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn refresh(&self) -> Result<Vec<SavedTask>, ApiClientError> {
        Ok(self.client.list_saved_tasks().await?.tasks)
    }

    pub async fn create(
        &self,
        request: CreateSavedTaskRequest,
    ) -> Result<SavedTask, TaskActionError> {
        validate_create(&request)?;
        Ok(self.client.create_saved_task(&request).await?)
    }

    pub async fn update(
        &self,
        task_id: &str,
        request: UpdateSavedTaskRequest,
    ) -> Result<SavedTask, ApiClientError> {
        self.client.update_saved_task(task_id, &request).await
    }

    pub async fn delete(&self, task_id: &str) -> Result<MessageResponse, ApiClientError> {
        self.client.delete_saved_task(task_id).await
    }

    /// Kick off the task's agent immediately, schedule or not.
    pub async fn run(&self, task_id: &str) -> Result<AgentRun, ApiClientError> {
        self.client.run_saved_task(task_id).await
    }
}

fn validate_create(request: &CreateSavedTaskRequest) -> Result<(), TaskActionError> {
    if request.name.trim().is_empty() {
        return Err(TaskActionError::MissingField("name"));
    }
    if request.agent_name.trim().is_empty() {
        return Err(TaskActionError::MissingField("agent_name"));
    }
    if request.task.trim().is_empty() {
        return Err(TaskActionError::MissingField("task"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_request() -> CreateSavedTaskRequest {
        CreateSavedTaskRequest {
            name: "nightly sweep".to_string(),
            agent_name: "refactor".to_string(),
            task: "tidy the parser".to_string(),
            description: None,
            schedule_cron: None,
            schedule_enabled: false,
        }
    }

    #[test]
    fn create_requires_name_agent_and_task() {
        assert!(validate_create(&create_request()).is_ok());

        let mut request = create_request();
        request.name = "  ".to_string();
        assert!(matches!(
            validate_create(&request),
            Err(TaskActionError::MissingField("name"))
        ));

        let mut request = create_request();
        request.agent_name.clear();
        assert!(matches!(
            validate_create(&request),
            Err(TaskActionError::MissingField("agent_name"))
        ));

        let mut request = create_request();
        request.task.clear();
        assert!(matches!(
            validate_create(&request),
            Err(TaskActionError::MissingField("task"))
        ));
    }
}
