//! # Free-text extraction
//!
//! The four independent extractors that mine semantic data out of a report's
//! title and body:
//!
//! - [`dates`] — observation dates in calendar and Julian day-count forms
//! - [`coordinates`] — equatorial RA/Dec pairs in three syntaxes
//! - [`keywords`] — the fixed taxonomy matcher
//! - [`aliases`] — known-object aliases backed by the shared alias store
//!
//! All extractors are **lenient**: a candidate that fails to convert is
//! dropped and never surfaces as an error. They operate on borrowed text and
//! return deduplicated, insertion-ordered value results.

pub mod aliases;
pub mod coordinates;
pub mod dates;
pub mod keywords;

/// True when the characters adjacent to `[start, end)` are not ASCII digits,
/// i.e. the match is not embedded in a longer digit run.
pub(crate) fn digit_bounded(text: &str, start: usize, end: usize) -> bool {
    let before = text[..start].chars().next_back();
    let after = text[end..].chars().next();
    before.is_none_or(|c| !c.is_ascii_digit()) && after.is_none_or(|c| !c.is_ascii_digit())
}

/// True when the characters adjacent to `[start, end)` are not ASCII letters,
/// i.e. the match stands as a whole word.
pub(crate) fn letter_bounded(text: &str, start: usize, end: usize) -> bool {
    let before = text[..start].chars().next_back();
    let after = text[end..].chars().next();
    before.is_none_or(|c| !c.is_ascii_alphabetic()) && after.is_none_or(|c| !c.is_ascii_alphabetic())
}

/// True when the characters adjacent to `[start, end)` are neither ASCII
/// letters nor digits. Used for identifiers that mix letters and digits.
pub(crate) fn alnum_bounded(text: &str, start: usize, end: usize) -> bool {
    let before = text[..start].chars().next_back();
    let after = text[end..].chars().next();
    before.is_none_or(|c| !c.is_ascii_alphanumeric())
        && after.is_none_or(|c| !c.is_ascii_alphanumeric())
}

#[cfg(test)]
mod boundary_test {
    use super::*;

    #[test]
    fn test_digit_bounded() {
        let text = "on 2021-09-09 and 52021-09-09";
        assert!(digit_bounded(text, 3, 13));
        assert!(!digit_bounded(text, 19, 29));
        assert!(digit_bounded("2021", 0, 4));
    }

    #[test]
    fn test_letter_bounded() {
        let text = "an exoplanet transit";
        let inner = text.find("planet").unwrap();
        assert!(!letter_bounded(text, inner, inner + 6));
        assert!(letter_bounded(text, 3, 12));
    }

    #[test]
    fn test_alnum_bounded() {
        let text = "sources m31 and m314";
        assert!(alnum_bounded(text, 8, 11));
        assert!(!alnum_bounded(text, 16, 19));
    }
}
