//! # Coordinate extraction and normalization
//!
//! Recognizes `ra … dec …` pairs in three syntaxes:
//!
//! 1. unit-suffixed sexagesimal — `RA 05h34m31.94s Dec +22d00m52.2s`
//! 2. colon-delimited sexagesimal — `RA: 05:34:31.94 Dec: +22:00:52.2`
//! 3. decimal degrees — `RA: 83.633 Dec: 22.0145`
//!
//! The sexagesimal syntaxes read RA as an hour angle; the decimal syntax
//! reads degrees directly. Candidates with unparsable or out-of-range values
//! (RA outside `[0, 360)`, Dec outside `[-90, 90]`) are silently discarded,
//! consistent with the date extractor's lenient policy.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::constants::EquatorialCoord;
use crate::conversion::{dms_to_deg, hms_to_deg, valid_dec, valid_ra};

#[derive(Debug, Clone, Copy)]
enum CoordSyntax {
    SexagesimalUnits,
    SexagesimalColons,
    DecimalDegrees,
}

static COORD_FORMATS: LazyLock<Vec<(CoordSyntax, Regex)>> = LazyLock::new(|| {
    vec![
        (
            CoordSyntax::SexagesimalUnits,
            Regex::new(
                r"ra\s*[:=]?\s*(?P<rh>[0-2]?\d)h\s?(?P<rm>[0-5]?\d)m\s?(?P<rs>[0-5]?\d(?:\.\d+)?)s?[\s,;]+dec\s*[:=]?\s*(?P<dd>[+-]?\d{1,2})d\s?(?P<dm>[0-5]?\d)m\s?(?P<ds>[0-5]?\d(?:\.\d+)?)s?",
            )
            .unwrap(),
        ),
        (
            CoordSyntax::SexagesimalColons,
            Regex::new(
                r"ra\s*:?\s*(?P<rh>[0-2]?\d):(?P<rm>[0-5]?\d):(?P<rs>[0-5]?\d(?:\.\d+)?)[\s,;]+dec\s*:?\s*(?P<dd>[+-]?\d{1,2}):(?P<dm>[0-5]?\d):(?P<ds>[0-5]?\d(?:\.\d+)?)",
            )
            .unwrap(),
        ),
        (
            CoordSyntax::DecimalDegrees,
            Regex::new(
                r"ra\s*:?\s*(?P<r>[+-]?\d+(?:\.\d+)?)(?:\s*deg)?[\s,;]+dec\s*:?\s*(?P<d>[+-]?\d+(?:\.\d+)?)",
            )
            .unwrap(),
        ),
    ]
});

/// Find all coordinate pairs in `text` and convert them to equatorial
/// degrees, deduplicated preserving first occurrence.
pub fn extract_coordinates(text: &str) -> Vec<EquatorialCoord> {
    let lowered = text.to_lowercase();
    let mut coords: Vec<EquatorialCoord> = Vec::new();

    for (syntax, pattern) in COORD_FORMATS.iter() {
        for caps in pattern.captures_iter(&lowered) {
            let whole = caps.get(0).unwrap();
            // The `ra` token must stand as a word ("extra 12, dec 4" is not
            // a coordinate).
            let before = lowered[..whole.start()].chars().next_back();
            if before.is_some_and(|c| c.is_ascii_alphabetic()) {
                continue;
            }
            if let Some(coord) = resolve(*syntax, &caps) {
                if !coords.contains(&coord) {
                    coords.push(coord);
                }
            }
        }
    }

    coords
}

fn resolve(syntax: CoordSyntax, caps: &Captures<'_>) -> Option<EquatorialCoord> {
    let (ra, dec) = match syntax {
        CoordSyntax::SexagesimalUnits | CoordSyntax::SexagesimalColons => (
            hms_to_deg(&caps["rh"], &caps["rm"], &caps["rs"])?,
            dms_to_deg(&caps["dd"], &caps["dm"], &caps["ds"])?,
        ),
        CoordSyntax::DecimalDegrees => (
            caps["r"].parse().ok()?,
            caps["d"].parse().ok()?,
        ),
    };

    (valid_ra(ra) && valid_dec(dec)).then_some(EquatorialCoord { ra, dec })
}
