//! # Report page fetching
//!
//! [`ReportFetcher`] is the seam to the download transport; [`HttpFetcher`]
//! is the production implementation, classifying transport failures for the
//! orchestrator: timeouts become [`AstelError::DownloadFailError`]
//! (retryable render/latency trouble), everything else becomes
//! [`AstelError::NetworkError`]. An empty page body is **not** an error
//! here — the orchestrator interprets it as "not published yet".

use tracing::debug;

use crate::astel_errors::AstelError;
use crate::constants::{ReportId, ATEL_BASE_URL};
use crate::env_state::AstelEnv;

/// Seam to the raw document transport.
pub trait ReportFetcher {
    /// Download the raw page of one report. An empty string is a valid
    /// "no such report yet" signal, distinct from an error.
    fn fetch(&self, report_id: ReportId) -> Result<String, AstelError>;
}

/// Production fetcher for the bulletin archive.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    env: AstelEnv,
    base_url: String,
}

impl HttpFetcher {
    pub fn new(env: &AstelEnv) -> Self {
        HttpFetcher {
            env: env.clone(),
            base_url: ATEL_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(env: &AstelEnv, base_url: &str) -> Self {
        HttpFetcher {
            env: env.clone(),
            base_url: base_url.to_string(),
        }
    }
}

impl ReportFetcher for HttpFetcher {
    fn fetch(&self, report_id: ReportId) -> Result<String, AstelError> {
        let url = format!("{}?read={report_id}", self.base_url);
        debug!(report_id, %url, "downloading report page");

        self.env
            .get_from_url(&url)
            .map_err(classify_transport_error)
    }
}

fn classify_transport_error(error: ureq::Error) -> AstelError {
    match &error {
        ureq::Error::Timeout(_) => AstelError::DownloadFailError(error.to_string()),
        _ => AstelError::NetworkError(error.to_string()),
    }
}
