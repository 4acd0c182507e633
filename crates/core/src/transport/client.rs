//! The request pipeline
//!
//! `ApiClient` owns the sender and the ordered stage lists. It is cheap to
//! clone and every resource group holds its own clone; there is no global
//! instance.

use std::sync::Arc;

use edgeshield_domain::ApiError;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, field, instrument, warn, Span};

use super::outcome::Outcome;
use super::ports::HttpSender;
use super::request::OutgoingRequest;
use super::stages::{NormalizeResponseStage, RequestStage, ResponseStage, TenantHeaderStage};
use crate::tenant::ports::KeyValueStore;

/// Shared transport: sender plus request/response stages
#[derive(Clone)]
pub struct ApiClient {
    sender: Arc<dyn HttpSender>,
    request_stages: Arc<[Arc<dyn RequestStage>]>,
    response_stages: Arc<[Arc<dyn ResponseStage>]>,
}

impl ApiClient {
    /// Client with the standard pipeline: tenant tagging on the way out,
    /// unwrap-or-reject on the way back.
    pub fn new(sender: Arc<dyn HttpSender>, store: Arc<dyn KeyValueStore>) -> Self {
        Self::builder(sender)
            .request_stage(Arc::new(TenantHeaderStage::new(store)))
            .response_stage(Arc::new(NormalizeResponseStage))
            .build()
    }

    /// Start from an empty pipeline
    pub fn builder(sender: Arc<dyn HttpSender>) -> ApiClientBuilder {
        ApiClientBuilder { sender, request_stages: Vec::new(), response_stages: Vec::new() }
    }

    /// Names of the registered stages, request side first
    pub fn stage_names(&self) -> Vec<&'static str> {
        self.request_stages
            .iter()
            .map(|stage| stage.name())
            .chain(self.response_stages.iter().map(|stage| stage.name()))
            .collect()
    }

    /// Run one request through the pipeline and return the unwrapped payload
    ///
    /// `request` is a `Result` so a body that failed to serialize still goes
    /// through the stages (and gets logged) like any other failure.
    ///
    /// # Errors
    /// The normalized error produced by the response stages.
    #[instrument(skip_all, fields(method = field::Empty, path = field::Empty))]
    pub async fn execute(
        &self,
        request: Result<OutgoingRequest, ApiError>,
    ) -> Result<Value, ApiError> {
        if let Ok(request) = &request {
            let span = Span::current();
            span.record("method", request.method().as_str());
            span.record("path", request.path());
        }

        let prepared =
            self.request_stages.iter().fold(request, |request, stage| stage.on_request(request));

        let raw = match prepared {
            Ok(request) => {
                debug!("dispatching request");
                match self.sender.send(request).await {
                    Ok(envelope) => Outcome::Received(envelope),
                    Err(ApiError::Transport(failure)) => Outcome::Failed(failure),
                    Err(other) => Outcome::Rejected(other),
                }
            }
            Err(err) => Outcome::Rejected(err),
        };

        self.response_stages
            .iter()
            .fold(raw, |outcome, stage| stage.on_outcome(outcome))
            .into_result()
    }

    /// [`ApiClient::execute`] followed by decoding the payload into `T`
    ///
    /// Use `serde_json::Value` for `T` to receive the payload exactly as the
    /// server sent it.
    ///
    /// # Errors
    /// Pipeline errors as for `execute`, plus `ApiError::Decode` when the
    /// payload does not fit `T`.
    pub async fn call<T: DeserializeOwned>(
        &self,
        request: Result<OutgoingRequest, ApiError>,
    ) -> Result<T, ApiError> {
        let payload = self.execute(request).await?;
        serde_json::from_value(payload).map_err(|e| {
            let err = ApiError::Decode(e.to_string());
            warn!(error = %err, "API payload did not match the expected type");
            err
        })
    }
}

/// Builder for [`ApiClient`]
pub struct ApiClientBuilder {
    sender: Arc<dyn HttpSender>,
    request_stages: Vec<Arc<dyn RequestStage>>,
    response_stages: Vec<Arc<dyn ResponseStage>>,
}

impl ApiClientBuilder {
    /// Append a request stage; stages run in registration order
    #[must_use]
    pub fn request_stage(mut self, stage: Arc<dyn RequestStage>) -> Self {
        self.request_stages.push(stage);
        self
    }

    /// Append a response stage; stages run in registration order
    #[must_use]
    pub fn response_stage(mut self, stage: Arc<dyn ResponseStage>) -> Self {
        self.response_stages.push(stage);
        self
    }

    pub fn build(self) -> ApiClient {
        ApiClient {
            sender: self.sender,
            request_stages: Arc::from(self.request_stages),
            response_stages: Arc::from(self.response_stages),
        }
    }
}

#[cfg(test)]
mod tests {
    use edgeshield_domain::{TransportFailure, TransportFailureKind};
    use serde::Deserialize;
    use serde_json::json;

    use super::*;
    use crate::test_support::{LogCapture, MapStore, RecordingSender};
    use crate::transport::outcome::ResponseEnvelope;

    fn client_with(sender: Arc<RecordingSender>, tenant: Option<&str>) -> ApiClient {
        let store = tenant.map_or_else(MapStore::default, MapStore::with_tenant);
        ApiClient::new(sender, Arc::new(store))
    }

    #[tokio::test]
    async fn test_payload_is_returned_exactly() {
        let payload = json!({"routes": [{"id": "r1"}], "total": 1});
        let sender = RecordingSender::ok(payload.clone());
        let client = client_with(sender.clone(), Some("acme"));

        let result = client.execute(Ok(OutgoingRequest::get("/routes"))).await;

        assert_eq!(result, Ok(payload));
        let request = sender.single_request();
        assert_eq!(request.header("X-Tenant-ID"), Some("acme"));
    }

    #[tokio::test]
    async fn test_build_error_never_reaches_sender() {
        let (logs, _guard) = LogCapture::install();
        let sender = RecordingSender::ok(json!({}));
        let client = client_with(sender.clone(), None);

        let result = client.execute(Err(ApiError::Build("unserializable".into()))).await;

        assert_eq!(result, Err(ApiError::Build("unserializable".into())));
        assert!(sender.requests().is_empty());
        assert!(logs.contents().contains("API error"));
    }

    #[tokio::test]
    async fn test_transport_failure_is_returned_raw() {
        let failure = TransportFailure::new(TransportFailureKind::Connect, "connection refused");
        let sender = RecordingSender::replying(Err(ApiError::Transport(failure.clone())));
        let client = client_with(sender, None);

        let result = client.execute(Ok(OutgoingRequest::get("/health"))).await;

        assert_eq!(result, Err(ApiError::Transport(failure)));
    }

    #[tokio::test]
    async fn test_server_error_body_is_returned_exactly() {
        let body = json!({"error": "route exists", "field": "name"});
        let sender = RecordingSender::replying(Ok(ResponseEnvelope::new(409, body.clone())));
        let client = client_with(sender, None);

        let result = client.execute(Ok(OutgoingRequest::post("/routes"))).await;

        assert_eq!(result, Err(ApiError::Server(body)));
    }

    #[tokio::test]
    async fn test_empty_pipeline_reports_unnormalized_response() {
        let sender = RecordingSender::ok(json!({}));
        let client = ApiClient::builder(sender).build();

        let result = client.execute(Ok(OutgoingRequest::get("/info"))).await;
        assert!(matches!(result, Err(ApiError::Internal(_))));
    }

    #[tokio::test]
    async fn test_stages_run_in_registration_order() {
        struct Stamp(&'static str);

        impl RequestStage for Stamp {
            fn name(&self) -> &'static str {
                self.0
            }

            fn on_request(
                &self,
                request: Result<OutgoingRequest, ApiError>,
            ) -> Result<OutgoingRequest, ApiError> {
                let request = request?;
                let trail = request.header("X-Trail").unwrap_or_default().to_string();
                Ok(request.with_header("X-Trail", format!("{trail}{}", self.0)))
            }
        }

        let sender = RecordingSender::ok(json!(null));
        let client = ApiClient::builder(sender.clone())
            .request_stage(Arc::new(Stamp("a")))
            .request_stage(Arc::new(Stamp("b")))
            .response_stage(Arc::new(NormalizeResponseStage))
            .build();

        client.execute(Ok(OutgoingRequest::get("/monitor"))).await.unwrap();

        assert_eq!(sender.single_request().header("X-Trail"), Some("ab"));
        assert_eq!(client.stage_names(), vec!["a", "b", "normalize_response"]);
    }

    #[tokio::test]
    async fn test_call_decodes_typed_payload() {
        #[derive(Debug, Deserialize, PartialEq)]
        struct Health {
            status: String,
        }

        let sender = RecordingSender::ok(json!({"status": "healthy"}));
        let client = client_with(sender, None);

        let health: Health = client.call(Ok(OutgoingRequest::get("/health"))).await.unwrap();
        assert_eq!(health, Health { status: "healthy".into() });
    }

    #[tokio::test]
    async fn test_call_reports_decode_error() {
        let sender = RecordingSender::ok(json!({"status": 1}));
        let client = client_with(sender, None);

        let result: Result<Vec<String>, ApiError> =
            client.call(Ok(OutgoingRequest::get("/health"))).await;
        assert!(matches!(result, Err(ApiError::Decode(_))));
    }
}
