#![allow(dead_code)]

use std::collections::HashMap;

use astel::astel_errors::AstelError;
use astel::constants::{EquatorialCoord, ReportId};
use astel::fetch::ReportFetcher;
use astel::objects::resolver::{NameResolver, ResolvedObject};

/// Fetcher serving a fixed set of pages; unknown ids yield an empty page,
/// the archive's "not published yet" signal.
pub struct StaticFetcher {
    pages: HashMap<ReportId, String>,
}

impl StaticFetcher {
    pub fn new(pages: Vec<(ReportId, String)>) -> Self {
        StaticFetcher {
            pages: pages.into_iter().collect(),
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }
}

impl ReportFetcher for StaticFetcher {
    fn fetch(&self, report_id: ReportId) -> Result<String, AstelError> {
        Ok(self.pages.get(&report_id).cloned().unwrap_or_default())
    }
}

/// Fetcher that must never be reached.
pub struct PanickingFetcher;

impl ReportFetcher for PanickingFetcher {
    fn fetch(&self, report_id: ReportId) -> Result<String, AstelError> {
        panic!("fetch({report_id}) must not be called");
    }
}

/// Fetcher with a dead network.
pub struct NetworkDownFetcher;

impl ReportFetcher for NetworkDownFetcher {
    fn fetch(&self, _report_id: ReportId) -> Result<String, AstelError> {
        Err(AstelError::NetworkError("connection refused".to_string()))
    }
}

/// Fetcher whose downloads time out.
pub struct TimeoutFetcher;

impl ReportFetcher for TimeoutFetcher {
    fn fetch(&self, _report_id: ReportId) -> Result<String, AstelError> {
        Err(AstelError::DownloadFailError("global timeout".to_string()))
    }
}

/// Fetcher serving fixed pages except one id that fails transiently.
pub struct FlakyFetcher {
    pages: HashMap<ReportId, String>,
    fail_on: ReportId,
}

impl FlakyFetcher {
    pub fn new(pages: Vec<(ReportId, String)>, fail_on: ReportId) -> Self {
        FlakyFetcher {
            pages: pages.into_iter().collect(),
            fail_on,
        }
    }
}

impl ReportFetcher for FlakyFetcher {
    fn fetch(&self, report_id: ReportId) -> Result<String, AstelError> {
        if report_id == self.fail_on {
            return Err(AstelError::NetworkError("connection reset".to_string()));
        }
        Ok(self.pages.get(&report_id).cloned().unwrap_or_default())
    }
}

/// Resolver that knows nothing.
pub struct NullResolver;

impl NameResolver for NullResolver {
    fn by_coordinate(
        &self,
        _coord: &EquatorialCoord,
    ) -> Result<Vec<(String, String)>, AstelError> {
        Ok(Vec::new())
    }

    fn by_name(
        &self,
        _object_id: &str,
        _strict: bool,
    ) -> Result<Option<ResolvedObject>, AstelError> {
        Ok(None)
    }
}

/// Resolver answering every query with an error.
pub struct FailingResolver;

impl NameResolver for FailingResolver {
    fn by_coordinate(
        &self,
        _coord: &EquatorialCoord,
    ) -> Result<Vec<(String, String)>, AstelError> {
        Err(AstelError::ResolverError("service unavailable".to_string()))
    }

    fn by_name(
        &self,
        _object_id: &str,
        _strict: bool,
    ) -> Result<Option<ResolvedObject>, AstelError> {
        Err(AstelError::ResolverError("service unavailable".to_string()))
    }
}

/// Resolver with a fixed cone answer and a name table.
pub struct TableResolver {
    cone: Vec<(String, String)>,
    names: HashMap<String, ResolvedObject>,
}

impl TableResolver {
    pub fn new(cone: Vec<(&str, &str)>, names: Vec<(&str, ResolvedObject)>) -> Self {
        TableResolver {
            cone: cone
                .into_iter()
                .map(|(id, alias)| (id.to_string(), alias.to_string()))
                .collect(),
            names: names
                .into_iter()
                .map(|(id, object)| (id.to_string(), object))
                .collect(),
        }
    }
}

impl NameResolver for TableResolver {
    fn by_coordinate(
        &self,
        _coord: &EquatorialCoord,
    ) -> Result<Vec<(String, String)>, AstelError> {
        Ok(self.cone.clone())
    }

    fn by_name(
        &self,
        object_id: &str,
        _strict: bool,
    ) -> Result<Option<ResolvedObject>, AstelError> {
        Ok(self.names.get(object_id).cloned())
    }
}

pub fn resolved(name: &str, ra: f64, dec: f64) -> ResolvedObject {
    ResolvedObject {
        name: name.to_string(),
        coord: EquatorialCoord { ra, dec },
        object_type: None,
    }
}

/// A minimal, well-formed report page for orchestration tests.
pub fn minimal_report_html(report_id: ReportId) -> String {
    format!(
        "<html>\n<body>\n<div id=\"telegram\">\n\
         <h1 class=\"title\">Photometric monitoring of field {report_id}</h1>\n\
         <strong>A. Observer (Test Facility)</strong>\n\
         <strong>1 Jan 2021; 00:00 UT</strong>\n\
         <p>Monitoring of field number {report_id} continued without notable change.\n</p>\n\
         </div>\n</body>\n</html>\n"
    )
}
