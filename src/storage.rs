//! # Report persistence seam
//!
//! The storage engine lives outside this crate; the orchestrator only needs
//! the narrow [`ReportStore`] contract. [`MemoryReportStore`] is a reference
//! implementation for tests and embedding.

use std::collections::BTreeMap;
use std::sync::RwLock;

use crate::astel_errors::AstelError;
use crate::constants::ReportId;
use crate::reports::ImportedReport;

/// Narrow read/write contract of the external report storage.
pub trait ReportStore {
    fn report_exists(&self, report_id: ReportId) -> Result<bool, AstelError>;

    /// Highest persisted report id, if any report is stored at all.
    fn highest_report_id(&self) -> Result<Option<ReportId>, AstelError>;

    fn add_report(&self, report: &ImportedReport) -> Result<(), AstelError>;
}

/// In-memory [`ReportStore`] keyed by report id.
#[derive(Debug, Default)]
pub struct MemoryReportStore {
    reports: RwLock<BTreeMap<ReportId, ImportedReport>>,
}

impl MemoryReportStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, report_id: ReportId) -> Option<ImportedReport> {
        let reports = self.reports.read().expect("report store lock poisoned");
        reports.get(&report_id).cloned()
    }

    pub fn len(&self) -> usize {
        let reports = self.reports.read().expect("report store lock poisoned");
        reports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ReportStore for MemoryReportStore {
    fn report_exists(&self, report_id: ReportId) -> Result<bool, AstelError> {
        let reports = self.reports.read().expect("report store lock poisoned");
        Ok(reports.contains_key(&report_id))
    }

    fn highest_report_id(&self) -> Result<Option<ReportId>, AstelError> {
        let reports = self.reports.read().expect("report store lock poisoned");
        Ok(reports.keys().next_back().copied())
    }

    fn add_report(&self, report: &ImportedReport) -> Result<(), AstelError> {
        let mut reports = self.reports.write().expect("report store lock poisoned");
        if reports.contains_key(&report.report_id) {
            return Err(AstelError::StorageError(format!(
                "report {} already stored",
                report.report_id
            )));
        }
        reports.insert(report.report_id, report.clone());
        Ok(())
    }
}

#[cfg(test)]
mod storage_test {
    use hifitime::Epoch;

    use super::*;

    fn report(report_id: ReportId) -> ImportedReport {
        ImportedReport {
            report_id,
            title: "A title".to_string(),
            authors: "A. Author".to_string(),
            body: "A body.".to_string(),
            submission_date: Epoch::from_gregorian_utc(2021, 1, 1, 0, 0, 0, 0),
            referenced_reports: Vec::new(),
            referenced_by: Vec::new(),
            observation_dates: Vec::new(),
            keywords: Vec::new(),
            objects: Vec::new(),
            coordinates: Vec::new(),
        }
    }

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemoryReportStore::new();
        assert_eq!(store.highest_report_id().unwrap(), None);
        assert!(!store.report_exists(12).unwrap());

        store.add_report(&report(12)).unwrap();
        assert!(store.report_exists(12).unwrap());
        assert_eq!(store.get(12), Some(report(12)));
        assert_eq!(store.highest_report_id().unwrap(), Some(12));

        store.add_report(&report(7)).unwrap();
        assert_eq!(store.highest_report_id().unwrap(), Some(12));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_duplicate_insert_rejected() {
        let store = MemoryReportStore::new();
        store.add_report(&report(12)).unwrap();
        assert!(matches!(
            store.add_report(&report(12)),
            Err(AstelError::StorageError(_))
        ));
    }
}
