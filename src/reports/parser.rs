//! # Structural report parsing
//!
//! The report pages follow one fixed template; this parser locates the
//! required fields with a small set of selectors and composes the free-text
//! extractors into one [`ImportedReport`].
//!
//! Required fields (title, authors, body, submission date) fail the parse
//! with [`AstelError::MissingReportElement`] when absent — unlike the
//! extracted dates/coordinates/keywords/objects, which are best-effort.
//!
//! Extraction order within one parse is load-bearing: dates and keywords
//! first, then coordinates (whose enrichment writes the alias store), then
//! aliases (which read it), so that aliases registered moments earlier are
//! already matchable.

use std::sync::LazyLock;

use hifitime::Epoch;
use itertools::Itertools;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use crate::astel_errors::AstelError;
use crate::constants::{ReportId, REFERRED_TO_BY_MARKER, SUBJECTS_PREFIX};
use crate::extraction::aliases::extract_aliases;
use crate::extraction::coordinates::extract_coordinates;
use crate::extraction::dates::{extract_dates, normalize_dates};
use crate::extraction::keywords::extract_keywords;
use crate::objects::enrichment::enrich_from_coordinate;
use crate::objects::resolver::NameResolver;
use crate::objects::AliasStore;
use crate::reports::ImportedReport;
use crate::time::{gregorian_to_epoch, month_number};

/// Permalinks of the archive: `…astronomerstelegram.org/?read=<id>`. The
/// bare base URL carries no id and never matches.
static PERMALINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https?://(?:www\.)?astronomerstelegram\.org/\?read=(\d+)$").unwrap()
});

/// Fixed submission date format: `11 Feb 2007; 09:48 UT`.
static SUBMISSION_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{1,2})\s+([A-Za-z]{3})\s+(\d{4});\s+(\d{2}):(\d{2})\s+UT$").unwrap()
});

static NUMBER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").unwrap());

/// Parse one raw report page into an [`ImportedReport`].
///
/// Arguments
/// ---------
/// * `report_id`: the report identifier the page was fetched under
/// * `html`: the raw page markup
/// * `aliases`: the shared alias store (written by enrichment, read by the
///   alias extractor)
/// * `resolver`: the external name-resolution service
///
/// Return
/// ------
/// * The parsed report, or [`AstelError::MissingReportElement`] when a
///   required structural field cannot be located or parsed.
pub fn parse_report(
    report_id: ReportId,
    html: &str,
    aliases: &AliasStore,
    resolver: &dyn NameResolver,
) -> Result<ImportedReport, AstelError> {
    let document = Html::parse_document(html);

    let title_selector = Selector::parse("h1.title").unwrap();
    let title = document
        .select(&title_selector)
        .next()
        .map(element_text_trimmed)
        .filter(|text| !text.is_empty())
        .ok_or_else(|| missing("title"))?;

    let strong_selector = Selector::parse("strong").unwrap();
    let mut strongs = document.select(&strong_selector);
    let authors = strongs
        .next()
        .map(element_text_trimmed)
        .filter(|text| !text.is_empty())
        .ok_or_else(|| missing("authors"))?;
    let submission_date = strongs
        .next()
        .map(element_text_trimmed)
        .and_then(|text| parse_submission_date(&text))
        .ok_or_else(|| missing("submission date"))?;

    let body = extract_body(&document)?;
    let referenced_by = extract_referenced_by(&document);
    let referenced_reports = extract_referenced_reports(&document, &referenced_by);
    let subjects = extract_subjects(&document);

    // Title and body feed every extractor; the optional subjects line only
    // widens the keyword input.
    let text = format!("{title}\n{body}");
    let keyword_text = match &subjects {
        Some(subjects) => format!("{title}\n{subjects}\n{body}"),
        None => text.clone(),
    };

    let observation_dates = normalize_dates(&extract_dates(&text));
    let keywords = extract_keywords(&keyword_text);

    let coordinates = extract_coordinates(&text);
    for coord in &coordinates {
        enrich_from_coordinate(aliases, resolver, coord);
    }
    let objects = extract_aliases(&text, aliases);

    Ok(ImportedReport {
        report_id,
        title,
        authors,
        body,
        submission_date,
        referenced_reports,
        referenced_by,
        observation_dates,
        keywords,
        objects,
        coordinates,
    })
}

fn missing(element: &str) -> AstelError {
    AstelError::MissingReportElement(element.to_string())
}

fn element_text_trimmed(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

fn parse_submission_date(text: &str) -> Option<Epoch> {
    let caps = SUBMISSION_DATE.captures(text.trim())?;
    let day: u8 = caps[1].parse().ok()?;
    let month = month_number(&caps[2])?;
    let year: i32 = caps[3].parse().ok()?;
    let hour: u8 = caps[4].parse().ok()?;
    let minute: u8 = caps[5].parse().ok()?;
    gregorian_to_epoch(year, month, day, hour, minute, 0)
}

/// Assemble the body from the plain paragraphs of the template.
///
/// A paragraph contributes when it has no `class`/`align` attribute, embeds
/// no frame, has non-empty text, and is not the back-citation boilerplate.
/// Paragraphs that already contain internal line breaks are appended
/// verbatim, others get one trailing newline.
fn extract_body(document: &Html) -> Result<String, AstelError> {
    let paragraph_selector = Selector::parse("p").unwrap();
    let iframe_selector = Selector::parse("iframe").unwrap();

    let mut body = String::new();
    for paragraph in document.select(&paragraph_selector) {
        let element = paragraph.value();
        if element.attr("class").is_some() || element.attr("align").is_some() {
            continue;
        }
        if paragraph.select(&iframe_selector).next().is_some() {
            continue;
        }

        let text: String = paragraph.text().collect();
        let trimmed = text.trim();
        if trimmed.is_empty() || trimmed.contains(REFERRED_TO_BY_MARKER) {
            continue;
        }

        body.push_str(&text);
        if !text.contains('\n') {
            body.push('\n');
        }
    }

    let body = body.trim().to_string();
    if body.is_empty() {
        return Err(missing("body"));
    }
    Ok(body)
}

/// Numeric tokens of the back-citation boilerplate paragraph, if present.
fn extract_referenced_by(document: &Html) -> Vec<ReportId> {
    let paragraph_selector = Selector::parse("p").unwrap();

    for paragraph in document.select(&paragraph_selector) {
        let text: String = paragraph.text().collect();
        if !text.contains(REFERRED_TO_BY_MARKER) {
            continue;
        }
        return NUMBER
            .find_iter(&text)
            .filter_map(|m| m.as_str().parse().ok())
            .unique()
            .collect();
    }

    Vec::new()
}

/// Report ids cited by this report: permalink anchors of the main content
/// container, minus navigation links, minus any id that already appears in
/// the back-citation set.
fn extract_referenced_reports(document: &Html, referenced_by: &[ReportId]) -> Vec<ReportId> {
    let container_selector = Selector::parse("div#telegram").unwrap();
    let anchor_selector = Selector::parse("a[href]").unwrap();

    let anchors: Vec<ElementRef<'_>> = match document.select(&container_selector).next() {
        Some(container) => container.select(&anchor_selector).collect(),
        None => document.select(&anchor_selector).collect(),
    };

    let mut ids: Vec<ReportId> = Vec::new();
    for anchor in anchors {
        let label = element_text_trimmed(anchor);
        if label.eq_ignore_ascii_case("previous") || label.eq_ignore_ascii_case("next") {
            continue;
        }
        let Some(href) = anchor.value().attr("href") else {
            continue;
        };
        let Some(caps) = PERMALINK.captures(href.trim()) else {
            continue;
        };
        let Ok(id) = caps[1].parse::<ReportId>() else {
            continue;
        };
        if !ids.contains(&id) {
            ids.push(id);
        }
    }

    ids.retain(|id| !referenced_by.contains(id));
    ids
}

/// The optional subjects line, with its template prefix stripped.
fn extract_subjects(document: &Html) -> Option<String> {
    let subjects_selector = Selector::parse("p.subjects").unwrap();
    let text = document
        .select(&subjects_selector)
        .next()
        .map(element_text_trimmed)?;
    let subjects = text
        .strip_prefix(SUBJECTS_PREFIX)
        .unwrap_or(&text)
        .trim()
        .to_string();
    (!subjects.is_empty()).then_some(subjects)
}
