//! Agent run actions.
//!
//! Cancel and rerun are requests, not transitions: the daemon owns the run
//! state machine and may reject either. Cancel is gated client-side on the
//! run still being active, mirroring which action the view offers.

use crate::api_client::{ApiClient, ApiClientError};
use oak_api::types::{ListAgentsResponse, MessageResponse, StartRunRequest};
use oak_core::AgentRun;

#[derive(Debug, thiserror::Error)]
pub enum RunActionError {
    #[error("Run {0} has already finished and cannot be cancelled")]
    NotCancellable(String),
    #[error(transparent)]
    Api(#[from] ApiClientError),
}

pub struct RunController {
    client: ApiClient,
}

impl RunController {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Fetch the current run list, newest first.
    pub async fn refresh(&self) -> Result<Vec<AgentRun>, ApiClientError> {
        Ok(self.client.list_runs().await?.runs)
    }

    pub async fn agents(&self) -> Result<ListAgentsResponse, ApiClientError> {
        self.client.list_agents().await
    }

    pub async fn start(&self, agent_name: &str, task: &str) -> Result<AgentRun, ApiClientError> {
        self.client
            .start_run(&StartRunRequest {
                agent_name: agent_name.to_string(),
                task: task.to_string(),
            })
            .await
    }

    /// Best-effort cancellation. Resolves once the daemon accepts the
    /// request; actual termination is observed through later refreshes.
    pub async fn cancel(&self, run: &AgentRun) -> Result<MessageResponse, RunActionError> {
        if !run.is_active() {
            return Err(RunActionError::NotCancellable(run.id.clone()));
        }
        Ok(self.client.cancel_run(&run.id).await?)
    }

    /// Start a fresh run with the same agent and task.
    pub async fn rerun(&self, run: &AgentRun) -> Result<AgentRun, ApiClientError> {
        self.start(&run.agent_name, &run.task).await
    }
}
