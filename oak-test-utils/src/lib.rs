//! Test fixtures and proptest generators shared across the workspace.
//!
//! Builders return fully populated, valid entities; tests mutate the one
//! field under scrutiny.

use chrono::{TimeZone, Utc};
use oak_api::types::{
    ConfigResponse, DiscoveredModel, EmbeddingSettingsWire, SummarizationSettingsWire,
    TestConfigResponse,
};
use oak_core::{
    AgentRun, EmbeddingConfig, Provider, RunStatus, SavedTask, SummarizationConfig, TestOutcome,
};
use proptest::prelude::*;

// ============================================================================
// FIXTURE BUILDERS
// ============================================================================

/// A complete, valid embedding configuration with a passing test.
pub fn embedding_config() -> EmbeddingConfig {
    EmbeddingConfig {
        provider: Some(Provider::Ollama),
        base_url: "http://localhost:11434".to_string(),
        model: "nomic-embed-text".to_string(),
        dimensions: Some(768),
        context_window: Some(8192),
        chunk_size: Some(6553),
        last_test: Some(TestOutcome::passed()),
    }
}

/// An enabled, valid summarization configuration.
pub fn summarization_config() -> SummarizationConfig {
    SummarizationConfig {
        enabled: true,
        provider: Some(Provider::Ollama),
        base_url: "http://localhost:11434".to_string(),
        model: "qwen2.5:3b".to_string(),
        context_window: Some(32768),
        last_test: Some(TestOutcome::passed()),
    }
}

/// A finished run with no error.
pub fn run(status: RunStatus) -> AgentRun {
    AgentRun {
        id: "run-0001".to_string(),
        agent_name: "refactor".to_string(),
        task: "tidy the parser".to_string(),
        status,
        turns_used: 12,
        cost_usd: Some(0.34),
        created_at: Utc.with_ymd_and_hms(2026, 3, 14, 9, 26, 53).unwrap(),
        error: None,
        files_created: vec!["src/parser/mod.rs".to_string()],
        files_modified: vec!["src/lib.rs".to_string()],
        duration_seconds: Some(187.5),
    }
}

/// A saved task with an enabled nightly schedule.
pub fn saved_task() -> SavedTask {
    SavedTask {
        id: "task-0001".to_string(),
        name: "nightly sweep".to_string(),
        agent_name: "refactor".to_string(),
        task: "re-index and summarize new sessions".to_string(),
        description: Some("Runs while nobody is watching".to_string()),
        schedule_cron: Some("0 3 * * *".to_string()),
        schedule_enabled: true,
        total_runs: 42,
        last_run_at: Some(Utc.with_ymd_and_hms(2026, 3, 14, 3, 0, 0).unwrap()),
    }
}

/// Daemon config response with an unset embedding provider, matching a
/// fresh install.
pub fn fresh_install_config() -> ConfigResponse {
    ConfigResponse {
        embedding: EmbeddingSettingsWire::default(),
        summarization: SummarizationSettingsWire::default(),
        origins: None,
        log_rotation: None,
        session_quality: None,
    }
}

/// Daemon config response mirroring [`embedding_config`].
pub fn populated_config() -> ConfigResponse {
    ConfigResponse {
        embedding: EmbeddingSettingsWire::from_domain(&embedding_config()),
        summarization: SummarizationSettingsWire::from_domain(&SummarizationConfig::default()),
        origins: Some(serde_json::json!(["http://localhost:3000"])),
        log_rotation: None,
        session_quality: None,
    }
}

/// A discovery hit that reports its own dimensions and context window.
pub fn discovered_model_with_metadata() -> DiscoveredModel {
    DiscoveredModel {
        name: "nomic-embed-text".to_string(),
        dimensions: Some(768),
        context_window: Some(8192),
    }
}

/// A discovery hit that reports nothing beyond its name.
pub fn discovered_model_bare(name: &str) -> DiscoveredModel {
    DiscoveredModel {
        name: name.to_string(),
        dimensions: None,
        context_window: None,
    }
}

/// A successful Test & Detect response with detected values.
pub fn passing_test_response() -> TestConfigResponse {
    TestConfigResponse {
        success: true,
        message: Some("Embedded 1 probe chunk".to_string()),
        error: None,
        dimensions: Some(768),
        context_window: Some(8192),
        pending_load: None,
    }
}

// ============================================================================
// PROPTEST STRATEGIES
// ============================================================================

pub fn provider_strategy() -> impl Strategy<Value = Provider> {
    prop_oneof![
        Just(Provider::Ollama),
        Just(Provider::LmStudio),
        Just(Provider::OpenAiCompatible),
    ]
}

pub fn run_status_strategy() -> impl Strategy<Value = RunStatus> {
    prop_oneof![
        Just(RunStatus::Pending),
        Just(RunStatus::Running),
        Just(RunStatus::Completed),
        Just(RunStatus::Failed),
        Just(RunStatus::Cancelled),
        Just(RunStatus::Timeout),
    ]
}

/// Context windows large enough for every derivation rule to be exact.
pub fn context_window_strategy() -> impl Strategy<Value = u32> {
    100u32..1_000_000
}
