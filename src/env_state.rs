//! # Astel environment state
//!
//! This module defines [`AstelEnv`], the **shared environment object** used across
//! the `astel` library. It provides a persistent **HTTP client** for downloading
//! report pages and querying the external name-resolution service.
//!
//! The object is designed to be **cheaply cloneable** and passed to the
//! collaborators that perform network access, so the whole import pipeline
//! shares one connection pool and one timeout policy.

use std::time::Duration;

use ureq::Agent;

/// Shared environment holding the HTTP client used by the fetcher and the
/// name resolver.
#[derive(Debug, Clone)]
pub struct AstelEnv {
    pub http_client: Agent,
}

impl Default for AstelEnv {
    fn default() -> Self {
        Self::new()
    }
}

impl AstelEnv {
    /// Create a new environment with an HTTP client using default settings
    /// and a global request timeout.
    pub fn new() -> Self {
        let config = Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(10)))
            .build();
        let agent: Agent = config.into();

        AstelEnv { http_client: agent }
    }

    /// Perform a GET request and return the response body as text.
    ///
    /// Callers decide how to classify the transport error; the fetch path
    /// distinguishes timeouts from other failures.
    pub(crate) fn get_from_url(&self, url: &str) -> Result<String, ureq::Error> {
        self.http_client
            .get(url)
            .call()?
            .body_mut()
            .read_to_string()
    }

    /// Perform a form-encoded POST request and return the response body as text.
    pub(crate) fn post_form(
        &self,
        url: &str,
        params: &[(&str, &str)],
    ) -> Result<String, ureq::Error> {
        self.http_client
            .post(url)
            .send_form(params.iter().copied())?
            .body_mut()
            .read_to_string()
    }
}
