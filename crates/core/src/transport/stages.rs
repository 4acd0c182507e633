//! Request and response stages
//!
//! Stages run in the order they were registered on the `ApiClient`. Each is a
//! plain function of its input, so they can be exercised without a network.

use std::sync::Arc;

use edgeshield_domain::constants::TENANT_HEADER;
use edgeshield_domain::{ApiError, TransportFailure, TransportFailureKind};
use tracing::error;

use super::outcome::{Outcome, ResponseEnvelope};
use super::request::OutgoingRequest;
use crate::tenant::current_tenant;
use crate::tenant::ports::KeyValueStore;

/// Transforms a request before it is sent
///
/// The input is a `Result` so a construction error raised upstream keeps
/// flowing through the chain; stages should hand it on untouched.
pub trait RequestStage: Send + Sync {
    fn name(&self) -> &'static str;

    fn on_request(
        &self,
        request: Result<OutgoingRequest, ApiError>,
    ) -> Result<OutgoingRequest, ApiError>;
}

/// Transforms the outcome of a request before the caller sees it
pub trait ResponseStage: Send + Sync {
    fn name(&self) -> &'static str;

    fn on_outcome(&self, outcome: Outcome) -> Outcome;
}

/// Tags every request with the current tenant
pub struct TenantHeaderStage {
    store: Arc<dyn KeyValueStore>,
}

impl TenantHeaderStage {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }
}

impl RequestStage for TenantHeaderStage {
    fn name(&self) -> &'static str {
        "tenant_header"
    }

    fn on_request(
        &self,
        request: Result<OutgoingRequest, ApiError>,
    ) -> Result<OutgoingRequest, ApiError> {
        let mut request = request?;
        let tenant = current_tenant(self.store.as_ref());
        request.set_header(TENANT_HEADER, tenant.as_str());
        Ok(request)
    }
}

/// Unwraps successful responses and normalizes every failure
///
/// - 2xx: the body alone
/// - non-2xx with a body: `ApiError::Server(body)`
/// - non-2xx without a body, or no response at all: the raw transport failure
///
/// Every rejection is logged once before it is handed on.
#[derive(Debug, Default, Clone, Copy)]
pub struct NormalizeResponseStage;

impl ResponseStage for NormalizeResponseStage {
    fn name(&self) -> &'static str {
        "normalize_response"
    }

    fn on_outcome(&self, outcome: Outcome) -> Outcome {
        match outcome {
            Outcome::Received(envelope) if envelope.is_success() => {
                Outcome::Resolved(envelope.body)
            }
            Outcome::Received(envelope) => reject(rejection_for(envelope)),
            Outcome::Failed(failure) => reject(ApiError::Transport(failure)),
            Outcome::Rejected(err) => reject(err),
            resolved @ Outcome::Resolved(_) => resolved,
        }
    }
}

fn rejection_for(envelope: ResponseEnvelope) -> ApiError {
    if envelope.has_body() {
        return ApiError::Server(envelope.body);
    }
    ApiError::Transport(TransportFailure::new(
        TransportFailureKind::Status(envelope.status),
        format!("request failed with status code {}", envelope.status),
    ))
}

fn reject(err: ApiError) -> Outcome {
    error!(error = %err, kind = err.label(), "API error");
    Outcome::Rejected(err)
}
