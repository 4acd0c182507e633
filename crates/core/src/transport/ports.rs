//! Port interface for the network round-trip

use async_trait::async_trait;
use edgeshield_domain::ApiError;

use super::outcome::ResponseEnvelope;
use super::request::OutgoingRequest;

/// Sends one request and returns whatever the server answered
///
/// Implementations must not interpret status codes: a 4xx/5xx is still an
/// `Ok(ResponseEnvelope)`. Errors are reserved for `ApiError::Build` (the
/// request could not be assembled) and `ApiError::Transport` (no response).
/// Exactly one attempt is made per call.
#[async_trait]
pub trait HttpSender: Send + Sync {
    async fn send(&self, request: OutgoingRequest) -> Result<ResponseEnvelope, ApiError>;
}
