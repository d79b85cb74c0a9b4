//! Indexing exclusion pattern sets.

use serde::{Deserialize, Serialize};

/// Glob-style patterns the daemon skips while indexing.
///
/// User patterns are removable; default patterns are built in and
/// read-only. A pattern already present in either list may not be added
/// again.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ExclusionSet {
    pub user_patterns: Vec<String>,
    pub default_patterns: Vec<String>,
}

impl ExclusionSet {
    /// Whether the pattern is present in either list.
    pub fn contains(&self, pattern: &str) -> bool {
        self.user_patterns.iter().any(|p| p == pattern)
            || self.default_patterns.iter().any(|p| p == pattern)
    }

    /// Whether adding this (already trimmed) pattern would duplicate an
    /// existing entry.
    pub fn would_duplicate(&self, pattern: &str) -> bool {
        self.contains(pattern)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_checks_both_lists() {
        let set = ExclusionSet {
            user_patterns: vec!["vendor".to_string()],
            default_patterns: vec!["node_modules".to_string(), ".git".to_string()],
        };
        assert!(set.contains("vendor"));
        assert!(set.contains(".git"));
        assert!(!set.contains("target"));
    }
}
