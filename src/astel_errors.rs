use thiserror::Error;

use crate::constants::ReportId;

/// Crate-wide error taxonomy.
///
/// Structural and identity failures are caller-actionable and kept
/// distinguishable; per-candidate extraction failures are never represented
/// here because they are dropped inside the extractors.
#[derive(Error, Debug)]
pub enum AstelError {
    #[error("Missing report element: {0}")]
    MissingReportElement(String),

    #[error("Report {0} is already stored")]
    ReportAlreadyExists(ReportId),

    #[error("Report {0} has not been published yet")]
    ReportNotFound(ReportId),

    #[error("Network failure while fetching report: {0}")]
    NetworkError(String),

    #[error("Report download failed: {0}")]
    DownloadFailError(String),

    #[error("Name resolution failure: {0}")]
    ResolverError(String),

    #[error("Storage failure: {0}")]
    StorageError(String),

    #[error("HTTP ureq error: {0}")]
    UreqHttpError(#[from] ureq::Error),

    #[error("Unable to perform file operation: {0}")]
    IoError(#[from] std::io::Error),
}

impl PartialEq for AstelError {
    fn eq(&self, other: &Self) -> bool {
        use AstelError::*;
        match (self, other) {
            (MissingReportElement(a), MissingReportElement(b)) => a == b,
            (ReportAlreadyExists(a), ReportAlreadyExists(b)) => a == b,
            (ReportNotFound(a), ReportNotFound(b)) => a == b,
            (NetworkError(a), NetworkError(b)) => a == b,
            (DownloadFailError(a), DownloadFailError(b)) => a == b,
            (ResolverError(a), ResolverError(b)) => a == b,
            (StorageError(a), StorageError(b)) => a == b,

            // Wrapped foreign errors are not comparable: equal if same variant.
            (UreqHttpError(_), UreqHttpError(_)) => true,
            (IoError(_), IoError(_)) => true,

            _ => false,
        }
    }
}
