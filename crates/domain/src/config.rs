//! Transport configuration
//!
//! Built once by the application context and handed to the transport. There
//! are no setters: every `with_*` call consumes the value and returns a new
//! one, so a constructed configuration never changes underneath a client.

use std::collections::BTreeMap;
use std::time::Duration;

use crate::constants::{CONTENT_TYPE_HEADER, CONTENT_TYPE_JSON, DEFAULT_API_URL, DEFAULT_TIMEOUT};

/// Base address, timeout and default headers for the control-plane transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportConfig {
    base_url: String,
    timeout: Duration,
    default_headers: BTreeMap<String, String>,
}

impl Default for TransportConfig {
    fn default() -> Self {
        let mut default_headers = BTreeMap::new();
        default_headers.insert(CONTENT_TYPE_HEADER.to_string(), CONTENT_TYPE_JSON.to_string());

        Self { base_url: DEFAULT_API_URL.to_string(), timeout: DEFAULT_TIMEOUT, default_headers }
    }
}

impl TransportConfig {
    /// Default configuration pointed at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::default().with_base_url(base_url)
    }

    /// Replace the base address. A trailing `/` is dropped so that paths
    /// (which always start with `/`) can be appended directly.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Replace the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Add or replace a default header. Names compare case-insensitively.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        self.default_headers.retain(|existing, _| !existing.eq_ignore_ascii_case(&name));
        self.default_headers.insert(name, value.into());
        self
    }

    /// Base address without a trailing `/`.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Timeout applied to every request.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Headers sent with every request.
    pub fn default_headers(&self) -> &BTreeMap<String, String> {
        &self.default_headers
    }

    /// Full URL for an API path such as `/routes/abc`.
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_service_contract() {
        let config = TransportConfig::default();

        assert_eq!(config.base_url(), "http://localhost:5002/api");
        assert_eq!(config.timeout(), Duration::from_millis(30_000));
        assert_eq!(
            config.default_headers().get("Content-Type").map(String::as_str),
            Some("application/json")
        );
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let config = TransportConfig::new("https://cdn.example.com/api/");
        assert_eq!(config.url_for("/routes/abc"), "https://cdn.example.com/api/routes/abc");
    }

    #[test]
    fn test_with_header_replaces_case_insensitively() {
        let config = TransportConfig::default()
            .with_header("content-type", "application/json; charset=utf-8");

        assert_eq!(config.default_headers().len(), 1);
        assert_eq!(
            config.default_headers().get("content-type").map(String::as_str),
            Some("application/json; charset=utf-8")
        );
    }

    #[test]
    fn test_builders_leave_original_untouched() {
        let original = TransportConfig::default();
        let tuned = original.clone().with_timeout(Duration::from_secs(5));

        assert_eq!(original.timeout(), Duration::from_secs(30));
        assert_eq!(tuned.timeout(), Duration::from_secs(5));
        assert_eq!(tuned.base_url(), original.base_url());
    }
}
