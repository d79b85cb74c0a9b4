//! Console/wire field-name mapping.
//!
//! The daemon persists `context_tokens` and `max_chunk_chars`; the console
//! edits them as "context window" (max tokens) and "chunk size". The typed
//! conversions in `types` are the enforced boundary; this table is the
//! declared, bidirectional record of every renamed field, so nothing is
//! reshaped by ad-hoc string keys.

/// (console name, wire name) pairs for every field whose name differs
/// across the boundary.
pub const FIELD_MAP: &[(&str, &str)] = &[
    ("max_tokens", "context_tokens"),
    ("chunk_size", "max_chunk_chars"),
];

/// Wire name for a console field, if it is renamed.
pub fn wire_name(ui: &str) -> Option<&'static str> {
    FIELD_MAP
        .iter()
        .find(|(u, _)| *u == ui)
        .map(|(_, w)| *w)
}

/// Console name for a wire field, if it is renamed.
pub fn ui_name(wire: &str) -> Option<&'static str> {
    FIELD_MAP
        .iter()
        .find(|(_, w)| *w == wire)
        .map(|(u, _)| *u)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mapping_is_bidirectional() {
        for (ui, wire) in FIELD_MAP {
            assert_eq!(wire_name(ui), Some(*wire));
            assert_eq!(ui_name(wire), Some(*ui));
        }
    }

    #[test]
    fn unmapped_names_pass_through_as_none() {
        assert_eq!(wire_name("model"), None);
        assert_eq!(ui_name("dimensions"), None);
    }
}
