//! Embedding and summarization configuration entities.

use crate::provider::Provider;
use serde::{Deserialize, Serialize};

/// Result of the most recent connection test against a provider.
///
/// On success the daemon may report the dimensions and context window it
/// detected; those values are the only source of truth for the derived
/// numeric fields besides manual entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct TestOutcome {
    pub success: bool,
    pub error: Option<String>,
    pub dimensions: Option<u32>,
    pub context_window: Option<u32>,
}

impl TestOutcome {
    /// A passing test with no detected values.
    pub fn passed() -> Self {
        Self {
            success: true,
            error: None,
            dimensions: None,
            context_window: None,
        }
    }

    /// A failing test carrying the provider's error message.
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
            dimensions: None,
            context_window: None,
        }
    }
}

/// Embedding provider configuration.
///
/// `context_window` is the maximum token count the model accepts;
/// `chunk_size` is the character length of a text segment submitted for
/// embedding and must stay strictly below the context window.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct EmbeddingConfig {
    pub provider: Option<Provider>,
    pub base_url: String,
    pub model: String,
    pub dimensions: Option<u32>,
    pub context_window: Option<u32>,
    pub chunk_size: Option<u32>,
    pub last_test: Option<TestOutcome>,
}

/// Summarization provider configuration.
///
/// All field requirements are conditional on `enabled`; a disabled block
/// is vacuously valid no matter what the other fields hold.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct SummarizationConfig {
    pub enabled: bool,
    pub provider: Option<Provider>,
    pub base_url: String,
    pub model: String,
    pub context_window: Option<u32>,
    pub last_test: Option<TestOutcome>,
}
