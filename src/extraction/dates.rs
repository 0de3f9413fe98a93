//! # Date extraction and normalization
//!
//! Observation dates appear in report text in many calendar spellings plus
//! the two astronomical day-count forms (`mjd=…`, `jd=…`). A fixed,
//! priority-ordered table of format families drives both phases:
//!
//! 1. **Extraction** scans the lowercased text with each family's pattern,
//!    keeping only matches that are not embedded in a longer digit run, and
//!    deduplicates the raw substrings preserving first-seen order.
//! 2. **Normalization** retries the same families with anchored matches and
//!    converts the captured components to a UTC [`Epoch`]. Any conversion
//!    failure silently drops that candidate; extraction is best-effort.

use std::sync::LazyLock;

use hifitime::Epoch;
use regex::{Captures, Regex};

use crate::constants::{JDTOMJD, MJD_MAX, MJD_MIN};
use crate::extraction::digit_bounded;
use crate::time::{expand_year, gregorian_to_epoch, jd_to_epoch, mjd_to_epoch, month_number};

/// One recognized date syntax family.
#[derive(Debug, Clone, Copy, PartialEq)]
enum DateFamily {
    /// `1 February 1999`, `1 Feb 1999`
    DayMonthNameYear,
    /// `01-Feb-99`, `01-Feb-1999`
    DayMonthAbbrevYear,
    /// `February 1, 1999`, `Feb 1, 1999`
    MonthNameDayYear,
    /// `02/01/99`, `02/01/1999`
    MonthDayYear,
    /// `01.02.99`, `01.02.1999`
    DayMonthYearDotted,
    /// `1999/02/01`, `99/02/01`
    YearMonthDaySlash,
    /// `1999-02-01`, `99-02-01`
    YearMonthDayDash,
    /// `mjd=51210`
    ModifiedJulianDay,
    /// `jd=2451210.5`
    JulianDay,
}

struct DateFormat {
    family: DateFamily,
    finder: Regex,
    exact: Regex,
}

const DAY: &str = r"[0-3]\d|[1-9]";
const MONTH_NUM: &str = r"[0-1]\d|[1-9]";
const YEAR: &str = r"[1-2]\d\d\d|\d\d";
const MONTH_WORD: &str = "january|february|march|april|may|june|july|august|september|october|\
                          november|december|jan|feb|mar|apr|jun|jul|aug|sep|oct|nov|dec";
const TIME: &str = r"(?:\s(?P<hh>[0-2]\d|[1-9]):(?P<mi>[0-5]\d)(?::(?P<ss>[0-5]\d))?)?";

/// The priority-ordered family table. Calendar families accept an optional
/// `HH:MM[:SS]` suffix and two- or four-digit years.
static DATE_FORMATS: LazyLock<Vec<DateFormat>> = LazyLock::new(|| {
    let patterns = [
        (
            DateFamily::DayMonthNameYear,
            format!(r"(?P<d>{DAY})\s(?P<m>{MONTH_WORD})\s(?P<y>{YEAR}){TIME}"),
        ),
        (
            DateFamily::DayMonthAbbrevYear,
            format!(r"(?P<d>{DAY})-(?P<m>{MONTH_WORD})-(?P<y>{YEAR}){TIME}"),
        ),
        (
            DateFamily::MonthNameDayYear,
            format!(r"(?P<m>{MONTH_WORD})\s(?P<d>{DAY}),\s(?P<y>{YEAR}){TIME}"),
        ),
        (
            DateFamily::MonthDayYear,
            format!(r"(?P<m>{MONTH_NUM})/(?P<d>{DAY})/(?P<y>{YEAR}){TIME}"),
        ),
        (
            DateFamily::DayMonthYearDotted,
            format!(r"(?P<d>{DAY})\.(?P<m>{MONTH_NUM})\.(?P<y>{YEAR}){TIME}"),
        ),
        (
            DateFamily::YearMonthDaySlash,
            format!(r"(?P<y>{YEAR})/(?P<m>{MONTH_NUM})/(?P<d>{DAY}){TIME}"),
        ),
        (
            DateFamily::YearMonthDayDash,
            format!(r"(?P<y>{YEAR})-(?P<m>{MONTH_NUM})-(?P<d>{DAY}){TIME}"),
        ),
        (
            DateFamily::ModifiedJulianDay,
            r"mjd\s?=?\s?(?P<value>\d+(?:\.\d+)?)".to_string(),
        ),
        (
            DateFamily::JulianDay,
            r"jd\s?=?\s?(?P<value>\d+(?:\.\d+)?)".to_string(),
        ),
    ];

    patterns
        .into_iter()
        .map(|(family, pattern)| DateFormat {
            family,
            finder: Regex::new(&pattern).unwrap(),
            exact: Regex::new(&format!("^(?:{pattern})$")).unwrap(),
        })
        .collect()
});

impl DateFamily {
    /// The day-count forms start with a word, so their leading guard also has
    /// to reject letters (`jd=` must not match inside `mjd=`). The calendar
    /// forms only guard against longer digit runs.
    fn boundary_ok(self, text: &str, start: usize, end: usize) -> bool {
        match self {
            DateFamily::ModifiedJulianDay | DateFamily::JulianDay => {
                let before = text[..start].chars().next_back();
                before.is_none_or(|c| !c.is_ascii_alphanumeric())
                    && digit_bounded(text, start, end)
            }
            _ => digit_bounded(text, start, end),
        }
    }
}

/// Find all date-like substrings in `text`, in family priority order,
/// deduplicated preserving first occurrence.
pub fn extract_dates(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let mut raw_dates: Vec<String> = Vec::new();

    for format in DATE_FORMATS.iter() {
        for found in format.finder.find_iter(&lowered) {
            if !format.family.boundary_ok(&lowered, found.start(), found.end()) {
                continue;
            }
            let candidate = found.as_str().to_string();
            if !raw_dates.contains(&candidate) {
                raw_dates.push(candidate);
            }
        }
    }

    raw_dates
}

/// Convert raw date substrings to UTC timestamps, deduplicated.
///
/// Candidates that fail conversion (impossible calendar dates, day counts
/// outside the plausibility window) are silently dropped.
pub fn normalize_dates(raw_dates: &[String]) -> Vec<Epoch> {
    let mut epochs: Vec<Epoch> = Vec::new();

    for raw in raw_dates {
        if let Some(epoch) = normalize_date(raw) {
            if !epochs.contains(&epoch) {
                epochs.push(epoch);
            }
        }
    }

    epochs
}

fn normalize_date(raw: &str) -> Option<Epoch> {
    for format in DATE_FORMATS.iter() {
        if let Some(caps) = format.exact.captures(raw) {
            if let Some(epoch) = convert(format.family, &caps) {
                return Some(epoch);
            }
        }
    }
    None
}

fn convert(family: DateFamily, caps: &Captures<'_>) -> Option<Epoch> {
    match family {
        DateFamily::ModifiedJulianDay => {
            let mjd: f64 = caps.name("value")?.as_str().parse().ok()?;
            (MJD_MIN..MJD_MAX).contains(&mjd).then(|| mjd_to_epoch(mjd))
        }
        DateFamily::JulianDay => {
            let jd: f64 = caps.name("value")?.as_str().parse().ok()?;
            let plausible = (MJD_MIN + JDTOMJD)..(MJD_MAX + JDTOMJD);
            plausible.contains(&jd).then(|| jd_to_epoch(jd))
        }
        _ => {
            let day: u8 = caps.name("d")?.as_str().parse().ok()?;
            let month_token = caps.name("m")?.as_str();
            let month: u8 = match month_number(month_token) {
                Some(number) => number,
                None => month_token.parse().ok()?,
            };
            let year = expand_year(caps.name("y")?.as_str())?;
            let hour = match caps.name("hh") {
                Some(token) => token.as_str().parse().ok()?,
                None => 0,
            };
            let minute = match caps.name("mi") {
                Some(token) => token.as_str().parse().ok()?,
                None => 0,
            };
            let second = match caps.name("ss") {
                Some(token) => token.as_str().parse().ok()?,
                None => 0,
            };
            gregorian_to_epoch(year, month, day, hour, minute, second)
        }
    }
}
