//! # Constants and type definitions for Astel
//!
//! This module centralizes the **site constants**, **static vocabularies**, and **common type
//! definitions** used throughout the `astel` library.
//!
//! ## Overview
//!
//! - Source-site URLs and fixed template markers
//! - Core type aliases used across the crate
//! - The equatorial coordinate value type
//! - Month vocabulary for textual date parsing
//! - The fixed keyword taxonomy (priority-ordered patterns with index-aligned
//!   canonical labels)
//! - Plausibility windows for the numeric astronomical day-count date forms
//!
//! These definitions are used by all main modules, including the structural parser,
//! the extractors, and the import orchestrator.

// -------------------------------------------------------------------------------------------------
// Source site
// -------------------------------------------------------------------------------------------------

/// Base URL of the bulletin archive; report pages live at `?read=<id>`.
pub const ATEL_BASE_URL: &str = "https://www.astronomerstelegram.org/";

/// Boilerplate prefix of the back-citation paragraph in the report template.
pub const REFERRED_TO_BY_MARKER: &str = "Referred to by ATel #:";

/// Prefix of the optional subjects paragraph in the report template.
pub const SUBJECTS_PREFIX: &str = "Subjects:";

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in degrees
pub type Degree = f64;
/// Modified Julian Date (days)
pub type MJD = f64;
/// Identifier of one bulletin report; also its import sequence key
pub type ReportId = u32;

/// Conversion factor between Julian Date and Modified Julian Date
pub const JDTOMJD: f64 = 2400000.5;

/// Plausible MJD window for free-text day counts (≈ 1900 to 2132). Numeric
/// tokens outside this window are treated as non-dates and dropped.
pub const MJD_MIN: MJD = 15_020.0;
pub const MJD_MAX: MJD = 100_000.0;

/// Age in days after which a cached alias record is re-resolved.
pub const ALIAS_MAX_AGE_DAYS: f64 = 60.0;

// -------------------------------------------------------------------------------------------------
// Equatorial coordinates
// -------------------------------------------------------------------------------------------------

/// An equatorial sky position, normalized to decimal degrees.
///
/// RA is kept in `[0, 360)` and Dec in `[-90, 90]`; values are validated at
/// the extraction boundary, so a constructed instance is always in range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EquatorialCoord {
    /// Right ascension in degrees
    pub ra: Degree,
    /// Declination in degrees
    pub dec: Degree,
}

impl std::fmt::Display for EquatorialCoord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.5} {:+.5}", self.ra, self.dec)
    }
}

// -------------------------------------------------------------------------------------------------
// Month vocabulary
// -------------------------------------------------------------------------------------------------

/// Full month names, index-aligned with month number − 1.
pub const MONTH_NAMES: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

/// Three-letter month abbreviations, index-aligned with [`MONTH_NAMES`].
pub const MONTH_ABBREVS: [&str; 12] = [
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];

// -------------------------------------------------------------------------------------------------
// Keyword taxonomy
// -------------------------------------------------------------------------------------------------

/// The fixed keyword taxonomy: `(match pattern, canonical label)` pairs,
/// priority-ordered.
///
/// Patterns are matched whole-word and lowercase against the report text;
/// multi-word hyphenated terms tolerate hyphen/space variation and most
/// nouns a simple `s?` plural. Whatever the source text wrote, the emitted
/// keyword is always the canonical label.
pub const KEYWORD_TAXONOMY: &[(&str, &str)] = &[
    ("radio", "radio"),
    ("millimeter", "millimeter"),
    (r"sub[-\s]?millimeter", "sub-millimeter"),
    (r"far[-\s]?infra[-\s]?red", "far-infra-red"),
    (r"infra[-\s]?red", "infra-red"),
    ("optical", "optical"),
    (r"ultra[-\s]?violet", "ultra-violet"),
    (r"x[-\s]?rays?", "x-ray"),
    ("gamma rays?", "gamma ray"),
    (r">\s?gev", "> gev"),
    ("tev", "tev"),
    ("vhe", "vhe"),
    ("uhe", "uhe"),
    ("neutrinos?", "neutrinos"),
    ("a comment", "a comment"),
    ("agn", "agn"),
    (r"asteroids?\(binary\)", "asteroid(binary)"),
    ("asteroids?", "asteroid"),
    ("binary", "binary"),
    ("black holes?", "black hole"),
    ("blazars?", "blazar"),
    ("cataclysmic variables?", "cataclysmic variable"),
    ("comets?", "comet"),
    ("cosmic rays?", "cosmic rays"),
    ("direct collapse events?", "direct collapse event"),
    ("exoplanets?", "exoplanet"),
    ("fast radio bursts?", "fast radio burst"),
    (r"gamma[-\s]ray bursts?", "gamma-ray burst"),
    ("globular clusters?", "globular cluster"),
    ("gravitational lensing", "gravitational lensing"),
    ("gravitational waves", "gravitational waves"),
    ("magnetars?", "magnetar"),
    ("meteors?", "meteor"),
    ("microlensing events?", "microlensing event"),
    (r"near[-\s]?earth objects?", "near-earth object"),
    ("neutron stars?", "neutron star"),
    ("nova", "nova"),
    (r"planets?\(minor\)", "planet(minor)"),
    ("planets?", "planet"),
    ("potentially hazardous asteroids?", "potentially hazardous asteroid"),
    (r"pre[-\s]?main[-\s]?sequence stars?", "pre-main-sequence star"),
    ("pulsars?", "pulsar"),
    ("quasars?", "quasar"),
    ("request for observations", "request for observations"),
    (r"soft gamma[-\s]?ray repeaters?", "soft gamma-ray repeater"),
    ("solar system objects?", "solar system object"),
    ("stars?", "star"),
    ("supernova remnants?", "supernova remnant"),
    ("supernovae", "supernovae"),
    ("the sun", "the sun"),
    ("tidal disruption events?", "tidal disruption event"),
    ("transients?", "transient"),
    ("variables", "variables"),
    ("young stellar objects?", "young stellar object"),
];
