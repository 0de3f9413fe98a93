//! Fixed-taxonomy keyword matcher.
//!
//! Matching is whole-word and case-insensitive; the emitted keyword is
//! always the canonical taxonomy label, in taxonomy order. A term absent
//! from the taxonomy can never be produced.

use std::sync::LazyLock;

use regex::Regex;

use crate::constants::KEYWORD_TAXONOMY;
use crate::extraction::letter_bounded;

static TAXONOMY_PATTERNS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    KEYWORD_TAXONOMY
        .iter()
        .map(|(pattern, label)| (Regex::new(pattern).unwrap(), *label))
        .collect()
});

/// Find all taxonomy keywords present in `text`.
pub fn extract_keywords(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let mut keywords = Vec::new();

    for (pattern, label) in TAXONOMY_PATTERNS.iter() {
        let found = pattern
            .find_iter(&lowered)
            .any(|m| letter_bounded(&lowered, m.start(), m.end()));
        if found {
            keywords.push((*label).to_string());
        }
    }

    keywords
}
