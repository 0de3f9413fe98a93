use hifitime::{Duration, Epoch};

use crate::constants::{MONTH_ABBREVS, MONTH_NAMES, MJD};

/// Transformation from modified julian date (MJD) to a calendar timestamp.
///
/// Argument
/// --------
/// * `mjd`: a day count in modified julian date (MJD), UTC scale
///
/// Return
/// ------
/// * the corresponding [`Epoch`], rounded to the nearest second
pub fn mjd_to_epoch(mjd: MJD) -> Epoch {
    Epoch::from_mjd_utc(mjd).round(Duration::from_seconds(1.0))
}

/// Transformation from julian date (JD) to a calendar timestamp.
///
/// Argument
/// --------
/// * `jd`: a day count in julian date (JD), UTC scale
///
/// Return
/// ------
/// * the corresponding [`Epoch`], rounded to the nearest second
pub fn jd_to_epoch(jd: f64) -> Epoch {
    Epoch::from_jde_utc(jd).round(Duration::from_seconds(1.0))
}

/// Build a UTC timestamp from calendar components.
///
/// Returns `None` for impossible dates (month 13, 31 February, hour 24, …)
/// so that per-candidate failures stay silent at the extraction boundary.
pub(crate) fn gregorian_to_epoch(
    year: i32,
    month: u8,
    day: u8,
    hour: u8,
    minute: u8,
    second: u8,
) -> Option<Epoch> {
    Epoch::maybe_from_gregorian_utc(year, month, day, hour, minute, second, 0).ok()
}

/// Expand a textual year into a full calendar year.
///
/// Two-digit years pivot at 70: `99` → 1999, `07` → 2007. Four-digit years
/// pass through.
pub(crate) fn expand_year(token: &str) -> Option<i32> {
    let value: i32 = token.parse().ok()?;
    match token.len() {
        4 => Some(value),
        2 => Some(if value < 70 { 2000 + value } else { 1900 + value }),
        _ => None,
    }
}

/// Resolve a month token (full name or 3-letter abbreviation, any case) to
/// its month number.
pub(crate) fn month_number(token: &str) -> Option<u8> {
    let token = token.to_lowercase();
    MONTH_NAMES
        .iter()
        .position(|name| *name == token)
        .or_else(|| MONTH_ABBREVS.iter().position(|abbrev| *abbrev == token))
        .map(|index| index as u8 + 1)
}
