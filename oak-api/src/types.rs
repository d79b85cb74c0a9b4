//! API Request and Response Types
//!
//! This module defines all request and response types for the daemon API.
//! Wire field names follow the daemon's persisted configuration
//! (`context_tokens`, `max_chunk_chars`); the console-facing names live in
//! `oak_core` and the translation happens in the conversions here.

use oak_core::{
    AgentRun, EmbeddingConfig, ExclusionSet, Provider, SavedTask, SummarizationConfig, TestOutcome,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which configuration block an endpoint addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum ConfigSection {
    Embedding,
    Summarization,
}

impl ConfigSection {
    /// Path segment used by discovery and test endpoints.
    pub fn as_path_segment(&self) -> &'static str {
        match self {
            ConfigSection::Embedding => "embedding",
            ConfigSection::Summarization => "summarization",
        }
    }
}

impl fmt::Display for ConfigSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_path_segment())
    }
}

// ============================================================================
// CONFIG TYPES
// ============================================================================

/// Embedding configuration block as stored by the daemon.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct EmbeddingSettingsWire {
    pub provider: Option<Provider>,
    pub base_url: Option<String>,
    pub model: Option<String>,
    pub dimensions: Option<u32>,
    /// Maximum token count the model accepts (console: context window).
    pub context_tokens: Option<u32>,
    /// Character length of an embedded text segment (console: chunk size).
    pub max_chunk_chars: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_test: Option<TestOutcome>,
}

impl EmbeddingSettingsWire {
    pub fn from_domain(config: &EmbeddingConfig) -> Self {
        Self {
            provider: config.provider,
            base_url: Some(config.base_url.clone()),
            model: Some(config.model.clone()),
            dimensions: config.dimensions,
            context_tokens: config.context_window,
            max_chunk_chars: config.chunk_size,
            last_test: config.last_test.clone(),
        }
    }

    pub fn into_domain(self) -> EmbeddingConfig {
        EmbeddingConfig {
            provider: self.provider,
            base_url: self.base_url.unwrap_or_default(),
            model: self.model.unwrap_or_default(),
            dimensions: self.dimensions,
            context_window: self.context_tokens,
            chunk_size: self.max_chunk_chars,
            last_test: self.last_test,
        }
    }
}

/// Summarization configuration block as stored by the daemon.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct SummarizationSettingsWire {
    #[serde(default)]
    pub enabled: bool,
    pub provider: Option<Provider>,
    pub base_url: Option<String>,
    pub model: Option<String>,
    pub context_tokens: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_test: Option<TestOutcome>,
}

impl SummarizationSettingsWire {
    pub fn from_domain(config: &SummarizationConfig) -> Self {
        Self {
            enabled: config.enabled,
            provider: config.provider,
            base_url: Some(config.base_url.clone()),
            model: Some(config.model.clone()),
            context_tokens: config.context_window,
            last_test: config.last_test.clone(),
        }
    }

    pub fn into_domain(self) -> SummarizationConfig {
        SummarizationConfig {
            enabled: self.enabled,
            provider: self.provider,
            base_url: self.base_url.unwrap_or_default(),
            model: self.model.unwrap_or_default(),
            context_window: self.context_tokens,
            last_test: self.last_test,
        }
    }
}

/// Full daemon configuration.
///
/// Sections the console displays but never edits (`origins`,
/// `log_rotation`, `session_quality`) pass through untyped so a newer
/// daemon never breaks deserialization.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ConfigResponse {
    #[serde(default)]
    pub embedding: EmbeddingSettingsWire,
    #[serde(default)]
    pub summarization: SummarizationSettingsWire,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "openapi", schema(value_type = Option<Object>))]
    pub origins: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "openapi", schema(value_type = Option<Object>))]
    pub log_rotation: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "openapi", schema(value_type = Option<Object>))]
    pub session_quality: Option<serde_json::Value>,
}

/// Request to save the two editable configuration blocks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UpdateConfigRequest {
    pub embedding: EmbeddingSettingsWire,
    pub summarization: SummarizationSettingsWire,
}

/// Generic acknowledgement carrying a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct MessageResponse {
    pub message: String,
}

// ============================================================================
// DISCOVERY AND TEST TYPES
// ============================================================================

/// Request to list the models a provider currently serves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct DiscoverModelsRequest {
    pub provider: Provider,
    pub base_url: String,
}

/// A model reported by provider discovery.
///
/// Providers disagree on the identifier key, so `id` is accepted as an
/// alias for `name`. Dimensions and context window are only present when
/// the provider reports them; absent values are never guessed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct DiscoveredModel {
    #[serde(alias = "id")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context_window: Option<u32>,
}

/// Response from provider model discovery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct DiscoverModelsResponse {
    pub success: bool,
    #[serde(default)]
    pub models: Vec<DiscoveredModel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Request to test a provider configuration end to end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct TestConfigRequest {
    pub provider: Provider,
    pub base_url: String,
    pub model: String,
}

/// Response from a configuration test.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct TestConfigResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context_window: Option<u32>,
    /// Set when the provider accepted the request but is still loading the
    /// model into memory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pending_load: Option<bool>,
}

impl TestConfigResponse {
    /// Collapse into the domain-level test outcome the validators consume.
    pub fn into_outcome(self) -> TestOutcome {
        TestOutcome {
            success: self.success,
            error: self.error,
            dimensions: self.dimensions,
            context_window: self.context_window,
        }
    }
}

// ============================================================================
// EXCLUSION TYPES
// ============================================================================

/// Current exclusion pattern lists.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ExclusionsResponse {
    #[serde(default)]
    pub user_patterns: Vec<String>,
    #[serde(default)]
    pub default_patterns: Vec<String>,
}

impl ExclusionsResponse {
    pub fn into_domain(self) -> ExclusionSet {
        ExclusionSet {
            user_patterns: self.user_patterns,
            default_patterns: self.default_patterns,
        }
    }
}

/// Request to add an exclusion pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct AddExclusionRequest {
    pub pattern: String,
}

/// Request to remove a user exclusion pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct RemoveExclusionRequest {
    pub pattern: String,
}

/// Outcome of an exclusion mutation.
///
/// The daemon reports which patterns it actually added, which already
/// existed (in either list), and which it removed.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UpdateExclusionsResponse {
    #[serde(default)]
    pub added: Vec<String>,
    #[serde(default)]
    pub already_exists: Vec<String>,
    #[serde(default)]
    pub removed: Vec<String>,
}

/// Response from a daemon restart request.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct RestartDaemonResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default)]
    pub indexing_started: bool,
}

// ============================================================================
// AGENT RUN TYPES
// ============================================================================

/// Response containing a list of agent runs, newest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ListRunsResponse {
    #[serde(default)]
    pub runs: Vec<AgentRun>,
}

/// Request to start a new agent run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct StartRunRequest {
    pub agent_name: String,
    pub task: String,
}

/// An installed agent the daemon can run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct AgentInfo {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Response containing the installed agents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ListAgentsResponse {
    #[serde(default)]
    pub agents: Vec<AgentInfo>,
}

// ============================================================================
// SAVED TASK TYPES
// ============================================================================

/// Response containing the saved tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ListSavedTasksResponse {
    #[serde(default)]
    pub tasks: Vec<SavedTask>,
}

/// Request to create a saved task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CreateSavedTaskRequest {
    pub name: String,
    pub agent_name: String,
    pub task: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule_cron: Option<String>,
    #[serde(default)]
    pub schedule_enabled: bool,
}

/// Request to update a saved task.
///
/// Deliberately has no agent field: the agent a task is bound to is
/// immutable after creation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UpdateSavedTaskRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule_cron: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule_enabled: Option<bool>,
}
