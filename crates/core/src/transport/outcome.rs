//! Response-side values flowing through the pipeline

use std::collections::BTreeMap;

use edgeshield_domain::{ApiError, TransportFailure};
use serde_json::Value;

/// Raw transport response: the wrapper callers must never see
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseEnvelope {
    /// HTTP status code.
    pub status: u16,
    /// Response headers, names lower-cased.
    pub headers: BTreeMap<String, String>,
    /// Decoded body: JSON when it parses, a JSON string otherwise, `Null`
    /// when empty.
    pub body: Value,
}

impl ResponseEnvelope {
    /// Response with no headers.
    pub fn new(status: u16, body: Value) -> Self {
        Self { status, headers: BTreeMap::new(), body }
    }

    /// Whether the status is 2xx.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Whether the server sent anything worth handing to the caller
    pub fn has_body(&self) -> bool {
        match &self.body {
            Value::Null => false,
            Value::String(text) => !text.is_empty(),
            _ => true,
        }
    }
}

/// State of a call as it passes through the response stages
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The server answered (any status)
    Received(ResponseEnvelope),
    /// No response arrived
    Failed(TransportFailure),
    /// Unwrapped payload, ready for the caller
    Resolved(Value),
    /// Normalized error, ready for the caller
    Rejected(ApiError),
}

impl Outcome {
    /// Whether a stage has already produced the caller-facing value
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Resolved(_) | Self::Rejected(_))
    }

    /// Hand the outcome to the caller.
    ///
    /// # Errors
    /// The rejected error, or `ApiError::Internal` when no stage normalized a
    /// raw response.
    pub fn into_result(self) -> Result<Value, ApiError> {
        match self {
            Self::Resolved(payload) => Ok(payload),
            Self::Rejected(err) => Err(err),
            Self::Received(envelope) => Err(ApiError::Internal(format!(
                "response with status {} was not normalized",
                envelope.status
            ))),
            Self::Failed(failure) => {
                Err(ApiError::Internal(format!("transport failure was not normalized: {failure}")))
            }
        }
    }
}
