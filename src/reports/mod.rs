//! # Report data model and structural parsing
//!
//! [`ImportedReport`] is the immutable result of one successful parse;
//! [`parser`] turns a raw report page into it.

pub mod parser;

use hifitime::Epoch;

use crate::constants::{EquatorialCoord, ReportId};

/// All structured data extracted from one bulletin report.
///
/// The `Vec` fields are insertion-ordered, first-occurrence-deduplicated
/// sets, so identical raw input always yields a structurally equal value.
/// `referenced_reports` and `referenced_by` are disjoint: an id appearing in
/// the back-citation section is removed from the forward set before
/// finalization.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportedReport {
    /// Report identifier; also the import sequence key
    pub report_id: ReportId,
    pub title: String,
    pub authors: String,
    /// Normalized plain text body, paragraphs joined with newlines
    pub body: String,
    /// Submission timestamp parsed from the fixed template format (UTC)
    pub submission_date: Epoch,
    /// Forward citations (this report citing earlier ones)
    pub referenced_reports: Vec<ReportId>,
    /// Back-citations (later reports citing this one)
    pub referenced_by: Vec<ReportId>,
    /// Observation timestamps recovered from free text; may be empty
    pub observation_dates: Vec<Epoch>,
    /// Canonical taxonomy labels found in title, subjects and body
    pub keywords: Vec<String>,
    /// Lowercase canonical ids of known objects mentioned in the text
    pub objects: Vec<String>,
    /// Equatorial positions resolved from the text
    pub coordinates: Vec<EquatorialCoord>,
}
