//! # Astel: environment, alias registry, and import orchestration
//!
//! This module defines the [`Astel`] struct, the central façade that wires
//! together:
//!
//! 1. **Environment state** ([`AstelEnv`]) — the shared HTTP client.
//! 2. **Alias registry** ([`AliasStore`]) — cross-report object knowledge,
//!    written by coordinate enrichment and read by the alias extractor.
//! 3. **Collaborator handles** — the report fetcher and the external name
//!    resolver, replaceable behind their trait seams.
//!
//! On top of those it drives the per-report import sequence
//! (`existence check → fetch → parse → persist`) and the contiguous
//! auto-import loop.
//!
//! ## Failure classification
//!
//! Each import stage has distinct, caller-actionable failures:
//!
//! | stage | failure |
//! |---|---|
//! | entry check | [`AstelError::ReportAlreadyExists`] — caller treats as no-op |
//! | fetch | [`AstelError::NetworkError`] / [`AstelError::DownloadFailError`] — retryable |
//! | fetch (empty page) | [`AstelError::ReportNotFound`] — terminal for this id |
//! | parse | [`AstelError::MissingReportElement`] — non-conforming template |
//! | persist | storage failures, propagated unchanged |
//!
//! Per-candidate extraction noise never reaches this level.

use tracing::{debug, info};

use crate::astel_errors::AstelError;
use crate::constants::ReportId;
use crate::env_state::AstelEnv;
use crate::fetch::{HttpFetcher, ReportFetcher};
use crate::objects::resolver::{NameResolver, SimbadResolver};
use crate::objects::AliasStore;
use crate::reports::parser::parse_report;
use crate::reports::ImportedReport;
use crate::storage::ReportStore;

/// Central façade of the import pipeline.
pub struct Astel {
    env: AstelEnv,
    aliases: AliasStore,
    fetcher: Box<dyn ReportFetcher>,
    resolver: Box<dyn NameResolver>,
}

impl Default for Astel {
    fn default() -> Self {
        Self::new()
    }
}

impl Astel {
    /// Construct a new [`Astel`] context with the production collaborators:
    /// an HTTP fetcher for the bulletin archive and the SIMBAD name
    /// resolver, both sharing one HTTP client.
    pub fn new() -> Self {
        let env = AstelEnv::new();
        Astel {
            fetcher: Box::new(HttpFetcher::new(&env)),
            resolver: Box::new(SimbadResolver::new(&env)),
            aliases: AliasStore::new(),
            env,
        }
    }

    /// Construct a context with custom collaborators (test doubles, caching
    /// proxies, alternative archives).
    pub fn with_collaborators(
        fetcher: Box<dyn ReportFetcher>,
        resolver: Box<dyn NameResolver>,
    ) -> Self {
        Astel {
            fetcher,
            resolver,
            aliases: AliasStore::new(),
            env: AstelEnv::new(),
        }
    }

    pub fn env(&self) -> &AstelEnv {
        &self.env
    }

    /// The process-wide alias registry backing the alias extractor.
    pub fn alias_store(&self) -> &AliasStore {
        &self.aliases
    }

    /// Parse a raw report page against this context's alias store and
    /// resolver.
    pub fn parse_report(
        &self,
        report_id: ReportId,
        html: &str,
    ) -> Result<ImportedReport, AstelError> {
        parse_report(report_id, html, &self.aliases, self.resolver.as_ref())
    }

    /// Import one report: existence check, fetch, parse, persist.
    ///
    /// The existence check runs before any fetch, so an already-stored id
    /// costs no network traffic. A fetched-but-empty page means the report
    /// has not been published yet.
    pub fn import_report(
        &self,
        store: &dyn ReportStore,
        report_id: ReportId,
    ) -> Result<(), AstelError> {
        if store.report_exists(report_id)? {
            return Err(AstelError::ReportAlreadyExists(report_id));
        }

        debug!(report_id, "fetching report");
        let document = self.fetcher.fetch(report_id)?;
        if document.trim().is_empty() {
            return Err(AstelError::ReportNotFound(report_id));
        }

        let report = self.parse_report(report_id, &document)?;
        store.add_report(&report)?;
        info!(report_id, "report imported");
        Ok(())
    }

    /// Import every report published since the last import.
    ///
    /// Report ids are assigned contiguously by the archive, so the loop
    /// starts one past the highest persisted id and stops at the first id
    /// that is not published yet. Any other failure is surfaced to the
    /// caller immediately — skipping an id would leave a permanent hole.
    ///
    /// Return
    /// ------
    /// * The number of newly imported reports.
    pub fn import_all_reports(&self, store: &dyn ReportStore) -> Result<u32, AstelError> {
        let mut imported = 0;
        let mut next_id = match store.highest_report_id()? {
            Some(id) => id + 1,
            None => 1,
        };

        loop {
            match self.import_report(store, next_id) {
                Ok(()) => {
                    imported += 1;
                    next_id += 1;
                }
                Err(AstelError::ReportNotFound(_)) => {
                    info!(imported, "auto-import reached the end of published reports");
                    return Ok(imported);
                }
                Err(error) => return Err(error),
            }
        }
    }
}
