use crate::constants::Degree;

/// Convert sexagesimal right ascension components to degrees.
///
/// Arguments
/// ---------
/// * `h`, `m`, `s`: hour, minute and second tokens of an `HH MM SS.SS`-style
///   right ascension
///
/// Returns
/// -------
/// * `Option<Degree>`: the right ascension in degrees, or `None` if a token
///   does not parse
pub(crate) fn hms_to_deg(h: &str, m: &str, s: &str) -> Option<Degree> {
    let h: f64 = h.parse().ok()?;
    let m: f64 = m.parse().ok()?;
    let s: f64 = s.parse().ok()?;

    Some((h + m / 60.0 + s / 3600.0) * 15.0)
}

/// Convert sexagesimal declination components to degrees.
///
/// Arguments
/// ---------
/// * `d`, `m`, `s`: degree (optionally signed), arcminute and arcsecond
///   tokens of a `±DD MM SS.SS`-style declination
///
/// Returns
/// -------
/// * `Option<Degree>`: the declination in degrees, or `None` if a token does
///   not parse
pub(crate) fn dms_to_deg(d: &str, m: &str, s: &str) -> Option<Degree> {
    let sign = if d.starts_with('-') { -1.0 } else { 1.0 };
    let d: f64 = d.trim_start_matches(['-', '+']).parse().ok()?;
    let m: f64 = m.parse().ok()?;
    let s: f64 = s.parse().ok()?;

    Some(sign * (d + m / 60.0 + s / 3600.0))
}

/// A right ascension is valid in `[0, 360)` degrees.
pub(crate) fn valid_ra(ra: Degree) -> bool {
    (0.0..360.0).contains(&ra)
}

/// A declination is valid in `[-90, 90]` degrees.
pub(crate) fn valid_dec(dec: Degree) -> bool {
    (-90.0..=90.0).contains(&dec)
}
