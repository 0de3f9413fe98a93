//! Known-object matcher backed by the shared alias store.
//!
//! For each cached record, the alias string is tried first as a whole word;
//! if absent, the canonical object id itself is tried. Either match emits
//! the lowercase object id. Correctness therefore depends on the store
//! already holding the relevant records when this extractor runs — the
//! structural parser runs it after coordinate enrichment on purpose.

use regex::Regex;

use crate::extraction::alnum_bounded;
use crate::objects::AliasStore;

/// Find all known objects mentioned in `text`, as lowercase canonical ids,
/// deduplicated preserving first-seen order.
pub fn extract_aliases(text: &str, store: &AliasStore) -> Vec<String> {
    let lowered = text.to_lowercase();
    let mut objects: Vec<String> = Vec::new();

    for record in store.all_aliases() {
        let object_id = record.object_id.to_lowercase();
        let mentioned = word_in_text(&lowered, &record.alias.to_lowercase())
            || word_in_text(&lowered, &object_id);
        if mentioned && !objects.contains(&object_id) {
            objects.push(object_id);
        }
    }

    objects
}

/// Whole-word containment check; the term is matched literally.
fn word_in_text(lowered: &str, term: &str) -> bool {
    if term.is_empty() {
        return false;
    }
    let pattern = Regex::new(&regex::escape(term)).expect("escaped term is a valid pattern");
    let found = pattern
        .find_iter(lowered)
        .any(|m| alnum_bounded(lowered, m.start(), m.end()));
    found
}
