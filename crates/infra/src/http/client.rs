use std::collections::BTreeMap;
use std::time::Duration;

use async_trait::async_trait;
use edgeshield_core::{HttpMethod, HttpSender, OutgoingRequest, ResponseEnvelope};
use edgeshield_domain::constants::{DEFAULT_API_URL, DEFAULT_TIMEOUT};
use edgeshield_domain::{ApiError, Result, ShieldError, TransportConfig};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client as ReqwestClient, Method};
use serde_json::Value;
use tracing::debug;

use crate::errors::IntoApiError;

/// reqwest-backed [`HttpSender`].
///
/// Sends each request exactly once. Timeout and default headers are fixed
/// when the sender is built.
#[derive(Clone, Debug)]
pub struct ReqwestSender {
    client: ReqwestClient,
    base_url: String,
}

impl ReqwestSender {
    /// Start building a new sender.
    pub fn builder() -> ReqwestSenderBuilder {
        ReqwestSenderBuilder::default()
    }

    /// Sender for the given transport configuration.
    ///
    /// # Errors
    /// `ShieldError::Config` when a default header is not a valid HTTP header
    /// or the underlying client cannot be created.
    pub fn from_config(config: &TransportConfig) -> Result<Self> {
        config
            .default_headers()
            .iter()
            .fold(Self::builder(), |builder, (name, value)| builder.header(name, value))
            .base_url(config.base_url())
            .timeout(config.timeout())
            .build()
    }

    /// Base address with any trailing `/` removed.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl HttpSender for ReqwestSender {
    async fn send(
        &self,
        request: OutgoingRequest,
    ) -> std::result::Result<ResponseEnvelope, ApiError> {
        let method = to_reqwest_method(request.method());
        let url = self.url_for(request.path());

        let mut builder = self.client.request(method.clone(), &url);
        if !request.query().is_empty() {
            builder = builder.query(request.query());
        }
        for (name, value) in request.headers() {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body() {
            builder = builder.json(body);
        }
        let prepared = builder.build().map_err(IntoApiError::into_api_error)?;

        debug!(%method, %url, "sending HTTP request");

        let response = match self.client.execute(prepared).await {
            Ok(response) => response,
            Err(err) => {
                debug!(%method, %url, error = %err, "HTTP request failed");
                return Err(err.into_api_error());
            }
        };

        let status = response.status();
        debug!(%method, %url, %status, "received HTTP response");

        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value.to_str().ok().map(|value| (name.as_str().to_string(), value.to_string()))
            })
            .collect::<BTreeMap<_, _>>();
        let bytes = response.bytes().await.map_err(IntoApiError::into_api_error)?;

        Ok(ResponseEnvelope { status: status.as_u16(), headers, body: decode_body(&bytes) })
    }
}

/// Response body as JSON. Empty bodies become `null`; anything that is not
/// JSON is kept as a string so it can still be reported to the caller.
fn decode_body(bytes: &[u8]) -> Value {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Value::Null;
    }
    serde_json::from_slice(bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(bytes).into_owned()))
}

fn to_reqwest_method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
        HttpMethod::Delete => Method::DELETE,
    }
}

/// Builder for [`ReqwestSender`].
#[derive(Debug)]
pub struct ReqwestSenderBuilder {
    base_url: String,
    timeout: Duration,
    default_headers: Vec<(String, String)>,
}

impl Default for ReqwestSenderBuilder {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            default_headers: Vec::new(),
        }
    }
}

impl ReqwestSenderBuilder {
    /// Base address every request path is appended to. A trailing `/` is
    /// dropped.
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Whole-request timeout, connect included.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Header sent with every request unless the request sets its own.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.push((name.into(), value.into()));
        self
    }

    /// Create the sender.
    ///
    /// # Errors
    /// `ShieldError::Config` for an invalid default header or when the
    /// underlying client cannot be created.
    pub fn build(self) -> Result<ReqwestSender> {
        let mut headers = HeaderMap::new();
        for (name, value) in &self.default_headers {
            let name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| {
                ShieldError::Config(format!("invalid default header name '{name}': {e}"))
            })?;
            let value = HeaderValue::from_str(value).map_err(|e| {
                ShieldError::Config(format!("invalid value for default header '{name}': {e}"))
            })?;
            headers.insert(name, value);
        }

        let client = ReqwestClient::builder()
            .timeout(self.timeout)
            .default_headers(headers)
            .no_proxy()
            .build()
            .map_err(|e| ShieldError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(ReqwestSender { client, base_url: self.base_url })
    }
}
