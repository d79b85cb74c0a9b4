//! Configuration validators.
//!
//! Validation never fails as an error path: invalid states are always
//! representable and are returned as data. Callers use the result to block
//! saving, never to abort control flow.

use crate::config::{EmbeddingConfig, SummarizationConfig, TestOutcome};

/// How to treat a missing or failed connection test.
///
/// `Lenient` (the default) downgrades an untested configuration to a
/// warning; `Strict` refuses to validate until a test has passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationMode {
    #[default]
    Lenient,
    Strict,
}

/// Outcome of validating one configuration block.
///
/// Recomputed on every field change and on every test-result update;
/// never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationResult {
    /// Blocking issues, in rule order.
    pub errors: Vec<String>,
    /// Non-blocking issues. Warnings never affect validity.
    pub warnings: Vec<String>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    fn error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    fn warn(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }
}

/// Validation outcome for the summarization block, which also records
/// whether the block was enabled at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummarizationValidation {
    pub is_enabled: bool,
    pub result: ValidationResult,
}

impl SummarizationValidation {
    pub fn is_valid(&self) -> bool {
        self.result.is_valid()
    }
}

/// Validate an embedding configuration.
///
/// Rules are applied in a fixed order, each appending to the error list;
/// the chunk-size utilization warning is only emitted when no errors were
/// found, so a broken form never nags about headroom.
pub fn validate_embedding(config: &EmbeddingConfig, mode: ValidationMode) -> ValidationResult {
    let mut result = ValidationResult::default();

    if config.provider.is_none() {
        result.error("Select a provider");
    }
    if config.base_url.trim().is_empty() {
        result.error("Base URL is required");
    }
    if config.model.trim().is_empty() {
        result.error("Select or enter a model");
    }
    if config.dimensions.is_none() {
        result.error("Dimensions must be a positive number (click Test & Detect to fill it in)");
    }
    if config.context_window.is_none() {
        result.error("Context window must be a positive number");
    }
    if config.chunk_size.is_none() {
        result.error("Chunk size must be a positive number");
    }

    if let (Some(chunk), Some(window)) = (config.chunk_size, config.context_window) {
        if chunk >= window {
            result.error("Chunk size must be smaller than the context window");
        } else if result.errors.is_empty() && u64::from(chunk) * 10 > u64::from(window) * 9 {
            result.warn("Chunk size is over 90% of the context window");
        }
    }

    apply_test_policy(&mut result, config.last_test.as_ref(), mode);
    result
}

/// Validate a summarization configuration.
///
/// A disabled block short-circuits to valid without inspecting any field.
/// Dimensions and chunk size do not apply to summarization.
pub fn validate_summarization(
    config: &SummarizationConfig,
    mode: ValidationMode,
) -> SummarizationValidation {
    if !config.enabled {
        return SummarizationValidation {
            is_enabled: false,
            result: ValidationResult::default(),
        };
    }

    let mut result = ValidationResult::default();

    if config.provider.is_none() {
        result.error("Select a provider");
    }
    if config.base_url.trim().is_empty() {
        result.error("Base URL is required");
    }
    if config.model.trim().is_empty() {
        result.error("Select or enter a model");
    }
    if config.context_window.is_none() {
        result.error("Context window must be a positive number");
    }

    apply_test_policy(&mut result, config.last_test.as_ref(), mode);

    SummarizationValidation {
        is_enabled: true,
        result,
    }
}

fn apply_test_policy(
    result: &mut ValidationResult,
    last_test: Option<&TestOutcome>,
    mode: ValidationMode,
) {
    match last_test {
        Some(test) if test.success => {}
        Some(test) => {
            let detail = test.error.as_deref().unwrap_or("no details reported");
            match mode {
                ValidationMode::Strict => {
                    result.error(format!("Last connection test failed: {}", detail))
                }
                ValidationMode::Lenient => {
                    result.warn(format!("Last connection test failed: {}", detail))
                }
            }
        }
        None => match mode {
            ValidationMode::Strict => {
                result.error("Run Test & Detect before saving");
            }
            ValidationMode::Lenient => {
                result.warn("Connection test recommended before saving");
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::Provider;

    fn complete_embedding() -> EmbeddingConfig {
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

    #[test]
    fn complete_config_is_valid() {
        let result = validate_embedding(&complete_embedding(), ValidationMode::Lenient);
        assert!(result.is_valid(), "unexpected errors: {:?}", result.errors);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn empty_config_reports_every_missing_field_in_order() {
        let result = validate_embedding(&EmbeddingConfig::default(), ValidationMode::Lenient);
        assert!(!result.is_valid());
        assert_eq!(result.errors[0], "Select a provider");
        assert_eq!(result.errors[1], "Base URL is required");
        assert_eq!(result.errors[2], "Select or enter a model");
        assert_eq!(result.errors.len(), 6);
    }

    #[test]
    fn chunk_at_or_above_window_is_an_error() {
        let mut config = complete_embedding();
        config.chunk_size = Some(8192);
        let result = validate_embedding(&config, ValidationMode::Lenient);
        assert!(!result.is_valid());
        assert!(result
            .errors
            .iter()
            .any(|e| e.contains("smaller than the context window")));
    }

    #[test]
    fn chunk_in_warning_band_is_valid_with_warning() {
        let mut config = complete_embedding();
        // 91% of an 8192 window
        config.chunk_size = Some(7455);
        let result = validate_embedding(&config, ValidationMode::Lenient);
        assert!(result.is_valid());
        assert!(result.warnings.iter().any(|w| w.contains("90%")));
    }

    #[test]
    fn utilization_warning_suppressed_while_errors_present() {
        let mut config = complete_embedding();
        config.chunk_size = Some(7455);
        config.model.clear();
        let result = validate_embedding(&config, ValidationMode::Lenient);
        assert!(!result.is_valid());
        assert!(!result.warnings.iter().any(|w| w.contains("90%")));
    }

    #[test]
    fn missing_test_is_warning_in_lenient_and_error_in_strict() {
        let mut config = complete_embedding();
        config.last_test = None;

        let lenient = validate_embedding(&config, ValidationMode::Lenient);
        assert!(lenient.is_valid());
        assert!(lenient.warnings.iter().any(|w| w.contains("recommended")));

        let strict = validate_embedding(&config, ValidationMode::Strict);
        assert!(!strict.is_valid());
    }

    #[test]
    fn failed_test_surfaces_provider_error_text() {
        let mut config = complete_embedding();
        config.last_test = Some(TestOutcome::failed("connection refused"));
        let result = validate_embedding(&config, ValidationMode::Lenient);
        assert!(result.is_valid());
        assert!(result
            .warnings
            .iter()
            .any(|w| w.contains("connection refused")));
    }

    #[test]
    fn disabled_summarization_is_vacuously_valid() {
        let config = SummarizationConfig::default();
        let validation = validate_summarization(&config, ValidationMode::Strict);
        assert!(!validation.is_enabled);
        assert!(validation.is_valid());
        assert!(validation.result.errors.is_empty());
        assert!(validation.result.warnings.is_empty());
    }

    #[test]
    fn enabled_summarization_checks_fields() {
        let config = SummarizationConfig {
            enabled: true,
            ..SummarizationConfig::default()
        };
        let validation = validate_summarization(&config, ValidationMode::Lenient);
        assert!(validation.is_enabled);
        assert!(!validation.is_valid());
        assert_eq!(validation.result.errors.len(), 4);
    }
}
