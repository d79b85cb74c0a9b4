//! Property tests for the configuration validators.

use oak_core::{
    coerce_positive, derive_chunk_size, validate_embedding, validate_summarization,
    EmbeddingConfig, Provider, SummarizationConfig, TestOutcome, ValidationMode,
};
use proptest::prelude::*;

fn provider_strategy() -> impl Strategy<Value = Provider> {
    prop_oneof![
        Just(Provider::Ollama),
        Just(Provider::LmStudio),
        Just(Provider::OpenAiCompatible),
    ]
}

fn populated_embedding(provider: Provider, window: u32, chunk: u32) -> EmbeddingConfig {
    EmbeddingConfig {
        provider: Some(provider),
        base_url: provider.default_base_url().to_string(),
        model: "nomic-embed-text".to_string(),
        dimensions: Some(768),
        context_window: Some(window),
        chunk_size: Some(chunk),
        last_test: Some(TestOutcome::passed()),
    }
}

proptest! {
    // ========================================================================
    // Fully populated configs with chunk < window always validate.
    // ========================================================================
    #[test]
    fn populated_config_with_small_chunk_is_valid(
        provider in provider_strategy(),
        window in 2u32..1_000_000,
    ) {
        let chunk = window - 1;
        let config = populated_embedding(provider, window, chunk);
        let result = validate_embedding(&config, ValidationMode::Lenient);
        prop_assert!(result.is_valid(), "errors: {:?}", result.errors);
    }

    // ========================================================================
    // chunk >= window is always a blocking error with the specific message.
    // ========================================================================
    #[test]
    fn chunk_at_or_over_window_is_rejected(
        provider in provider_strategy(),
        window in 1u32..1_000_000,
        excess in 0u32..10_000,
    ) {
        let config = populated_embedding(provider, window, window.saturating_add(excess));
        let result = validate_embedding(&config, ValidationMode::Lenient);
        prop_assert!(!result.is_valid());
        prop_assert!(result
            .errors
            .iter()
            .any(|e| e.contains("smaller than the context window")));
    }

    // ========================================================================
    // Warnings never flip validity: the warning band (0.9w, w) stays valid.
    // ========================================================================
    #[test]
    fn warning_band_keeps_config_valid(window in 100u32..1_000_000) {
        // Strictly above 90% but strictly below the window.
        let chunk = window / 10 * 9 + window / 20;
        prop_assume!(chunk < window && u64::from(chunk) * 10 > u64::from(window) * 9);
        let config = populated_embedding(Provider::Ollama, window, chunk);
        let result = validate_embedding(&config, ValidationMode::Lenient);
        prop_assert!(result.is_valid());
        prop_assert!(!result.warnings.is_empty());
    }

    // ========================================================================
    // Disabled summarization is vacuously valid for any field contents.
    // ========================================================================
    #[test]
    fn disabled_summarization_ignores_fields(
        base_url in ".{0,40}",
        model in ".{0,40}",
        window in proptest::option::of(0u32..100_000),
    ) {
        let config = SummarizationConfig {
            enabled: false,
            provider: None,
            base_url,
            model,
            context_window: window,
            last_test: None,
        };
        let validation = validate_summarization(&config, ValidationMode::Strict);
        prop_assert!(validation.is_valid());
        prop_assert!(!validation.is_enabled);
    }

    // ========================================================================
    // Numeric coercion: positive integers round-trip, everything else is None.
    // ========================================================================
    #[test]
    fn coercion_round_trips_positive_integers(n in 1u32..u32::MAX) {
        prop_assert_eq!(coerce_positive(&n.to_string()), Some(n));
    }

    #[test]
    fn coercion_never_yields_zero(input in ".{0,12}") {
        prop_assert_ne!(coerce_positive(&input), Some(0));
    }

    // ========================================================================
    // Derived chunk size is always strictly below the window (for window > 0)
    // and equals floor(0.8 x window).
    // ========================================================================
    #[test]
    fn derived_chunk_stays_below_window(window in 1u32..u32::MAX) {
        let chunk = derive_chunk_size(window);
        prop_assert!(chunk < window);
        prop_assert_eq!(u64::from(chunk), u64::from(window) * 8 / 10);
    }
}

#[test]
fn strict_mode_requires_a_passing_test() {
    let mut config = populated_embedding(Provider::LmStudio, 8192, 6553);
    config.last_test = None;
    assert!(!validate_embedding(&config, ValidationMode::Strict).is_valid());

    config.last_test = Some(TestOutcome::failed("model not loaded"));
    assert!(!validate_embedding(&config, ValidationMode::Strict).is_valid());

    config.last_test = Some(TestOutcome::passed());
    assert!(validate_embedding(&config, ValidationMode::Strict).is_valid());
}
