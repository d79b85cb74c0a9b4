//! OAK Core - Entity Types and Validation Rules
//!
//! Data types shared by every crate in the console workspace, plus the
//! decision logic that operates on them: provider defaults, numeric
//! coercion, chunk-size derivation, and the embedding/summarization
//! configuration validators. Everything here is synchronous and free of
//! I/O - the network boundary lives in `oak-console`.

use chrono::{DateTime, Utc};

pub mod config;
pub mod exclusion;
pub mod provider;
pub mod run;
pub mod task;
pub mod validate;

pub use config::{EmbeddingConfig, SummarizationConfig, TestOutcome};
pub use exclusion::ExclusionSet;
pub use provider::{Provider, ProviderParseError};
pub use run::{AgentRun, RunAction, RunStatus, StatusTone, WATCHDOG_RECOVERY_MARKER};
pub use task::SavedTask;
pub use validate::{
    validate_embedding, validate_summarization, SummarizationValidation, ValidationMode,
    ValidationResult,
};

/// Timestamp type using UTC timezone.
pub type Timestamp = DateTime<Utc>;

/// Coerce a user-entered string into a positive integer.
///
/// Blank, non-numeric, and non-positive input all map to `None` - never to
/// zero or a sentinel value. This is the single conversion point between
/// form text and the wire format.
pub fn coerce_positive(input: &str) -> Option<u32> {
    match input.trim().parse::<i64>() {
        Ok(n) if n > 0 => u32::try_from(n).ok(),
        _ => None,
    }
}

/// Recommended chunk size for a given context window: floor(0.8 x window).
///
/// Integer arithmetic keeps the floor exact for every input.
pub fn derive_chunk_size(context_window: u32) -> u32 {
    (u64::from(context_window) * 8 / 10) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coerce_positive_accepts_plain_integers() {
        assert_eq!(coerce_positive("768"), Some(768));
        assert_eq!(coerce_positive("  8192 "), Some(8192));
    }

    #[test]
    fn coerce_positive_rejects_blank_and_invalid() {
        assert_eq!(coerce_positive(""), None);
        assert_eq!(coerce_positive("   "), None);
        assert_eq!(coerce_positive("abc"), None);
        assert_eq!(coerce_positive("0"), None);
        assert_eq!(coerce_positive("-5"), None);
        assert_eq!(coerce_positive("12.5"), None);
    }

    #[test]
    fn derived_chunk_size_is_floor_of_eighty_percent() {
        assert_eq!(derive_chunk_size(8192), 6553);
        assert_eq!(derive_chunk_size(10), 8);
        assert_eq!(derive_chunk_size(1), 0);
    }
}
