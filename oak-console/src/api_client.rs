//! REST client for the Open Agent Kit daemon.
//!
//! One method per endpoint, all JSON request/response. No retry and no
//! request cancellation: a call either resolves or surfaces its error, and
//! retrying is always an explicit caller decision.

use crate::config::ConsoleConfig;
use oak_api::error::ApiError;
use oak_api::types::{
    AddExclusionRequest, ConfigResponse, ConfigSection, CreateSavedTaskRequest,
    DiscoverModelsRequest, DiscoverModelsResponse, ExclusionsResponse, ListAgentsResponse,
    ListRunsResponse, ListSavedTasksResponse, MessageResponse, RemoveExclusionRequest,
    RestartDaemonResponse, StartRunRequest, TestConfigRequest, TestConfigResponse,
    UpdateConfigRequest, UpdateExclusionsResponse, UpdateSavedTaskRequest,
};
use oak_core::{AgentRun, SavedTask};
use reqwest::header::{HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum ApiClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    /// The daemon answered with its structured error envelope. The
    /// server-provided message is surfaced verbatim.
    #[error("{}", .0.message)]
    Api(ApiError),
    #[error("Unexpected response: {0}")]
    InvalidResponse(String),
    #[error("Config error: {0}")]
    Config(String),
}

#[derive(Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &ConsoleConfig) -> Result<Self, ApiClientError> {
        let timeout = Duration::from_millis(config.request_timeout_ms);
        let mut headers = HeaderMap::new();
        if let Some(key) = &config.auth.api_key {
            let value = HeaderValue::from_str(key)
                .map_err(|e| ApiClientError::Config(format!("Invalid api_key header: {}", e)))?;
            headers.insert("x-api-key", value);
        }
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    // ========================================================================
    // Configuration
    // ========================================================================

    pub async fn get_config(&self) -> Result<ConfigResponse, ApiClientError> {
        self.send(self.client.get(self.url("/api/v1/config"))).await
    }

    pub async fn update_config(
        &self,
        request: &UpdateConfigRequest,
    ) -> Result<MessageResponse, ApiClientError> {
        self.send(self.client.put(self.url("/api/v1/config")).json(request))
            .await
    }

    pub async fn discover_models(
        &self,
        section: ConfigSection,
        request: &DiscoverModelsRequest,
    ) -> Result<DiscoverModelsResponse, ApiClientError> {
        let path = format!("/api/v1/config/{}/models", section.as_path_segment());
        self.send(self.client.post(self.url(&path)).json(request))
            .await
    }

    pub async fn test_config(
        &self,
        section: ConfigSection,
        request: &TestConfigRequest,
    ) -> Result<TestConfigResponse, ApiClientError> {
        let path = format!("/api/v1/config/{}/test", section.as_path_segment());
        self.send(self.client.post(self.url(&path)).json(request))
            .await
    }

    // ========================================================================
    // Exclusions
    // ========================================================================

    pub async fn get_exclusions(&self) -> Result<ExclusionsResponse, ApiClientError> {
        self.send(self.client.get(self.url("/api/v1/exclusions")))
            .await
    }

    pub async fn add_exclusion(
        &self,
        request: &AddExclusionRequest,
    ) -> Result<UpdateExclusionsResponse, ApiClientError> {
        self.send(self.client.put(self.url("/api/v1/exclusions")).json(request))
            .await
    }

    pub async fn remove_exclusion(
        &self,
        request: &RemoveExclusionRequest,
    ) -> Result<UpdateExclusionsResponse, ApiClientError> {
        self.send(
            self.client
                .delete(self.url("/api/v1/exclusions"))
                .json(request),
        )
        .await
    }

    pub async fn reset_exclusions(&self) -> Result<UpdateExclusionsResponse, ApiClientError> {
        self.send(self.client.post(self.url("/api/v1/exclusions/reset")))
            .await
    }

    pub async fn restart_daemon(&self) -> Result<RestartDaemonResponse, ApiClientError> {
        self.send(self.client.post(self.url("/api/v1/daemon/restart")))
            .await
    }

    // ========================================================================
    // Agent runs
    // ========================================================================

    pub async fn list_runs(&self) -> Result<ListRunsResponse, ApiClientError> {
        self.send(self.client.get(self.url("/api/v1/runs"))).await
    }

    pub async fn start_run(&self, request: &StartRunRequest) -> Result<AgentRun, ApiClientError> {
        self.send(self.client.post(self.url("/api/v1/runs")).json(request))
            .await
    }

    pub async fn cancel_run(&self, run_id: &str) -> Result<MessageResponse, ApiClientError> {
        let path = format!("/api/v1/runs/{}/cancel", run_id);
        self.send(self.client.post(self.url(&path))).await
    }

    pub async fn list_agents(&self) -> Result<ListAgentsResponse, ApiClientError> {
        self.send(self.client.get(self.url("/api/v1/agents"))).await
    }

    // ========================================================================
    // Saved tasks
    // ========================================================================

    pub async fn list_saved_tasks(&self) -> Result<ListSavedTasksResponse, ApiClientError> {
        self.send(self.client.get(self.url("/api/v1/tasks"))).await
    }

    pub async fn create_saved_task(
        &self,
        request: &CreateSavedTaskRequest,
    ) -> Result<SavedTask, ApiClientError> {
        self.send(self.client.post(self.url("/api/v1/tasks")).json(request))
            .await
    }

    pub async fn update_saved_task(
        &self,
        task_id: &str,
        request: &UpdateSavedTaskRequest,
    ) -> Result<SavedTask, ApiClientError> {
        let path = format!("/api/v1/tasks/{}", task_id);
        self.send(self.client.put(self.url(&path)).json(request))
            .await
    }

    pub async fn delete_saved_task(&self, task_id: &str) -> Result<MessageResponse, ApiClientError> {
        let path = format!("/api/v1/tasks/{}", task_id);
        self.send(self.client.delete(self.url(&path))).await
    }

    pub async fn run_saved_task(&self, task_id: &str) -> Result<AgentRun, ApiClientError> {
        let path = format!("/api/v1/tasks/{}/run", task_id);
        self.send(self.client.post(self.url(&path))).await
    }

    // ========================================================================
    // Plumbing
    // ========================================================================

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ApiClientError> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        if status.is_success() {
            return Ok(serde_json::from_slice(&body)?);
        }

        // Prefer the daemon's structured envelope; fall back to raw text.
        match serde_json::from_slice::<ApiError>(&body) {
            Ok(err) => Err(ApiClientError::Api(err)),
            Err(_) => Err(ApiClientError::InvalidResponse(format!(
                "HTTP {}: {}",
                status.as_u16(),
                String::from_utf8_lossy(&body)
            ))),
        }
    }
}
