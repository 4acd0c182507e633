//! Conversions from external infrastructure errors into domain errors.

use std::error::Error as StdError;
use std::io::Error as IoError;

use edgeshield_domain::{ApiError, ShieldError, TransportFailure, TransportFailureKind};
use reqwest::Error as HttpError;
use serde_json::Error as JsonError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub ShieldError);

impl From<InfraError> for ShieldError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<ShieldError> for InfraError {
    fn from(value: ShieldError) -> Self {
        InfraError(value)
    }
}

/* -------------------------------------------------------------------------- */
/* std::io::Error / serde_json::Error → ShieldError */
/* -------------------------------------------------------------------------- */

impl From<IoError> for InfraError {
    fn from(value: IoError) -> Self {
        InfraError(ShieldError::Storage(format!("I/O failure ({:?}): {value}", value.kind())))
    }
}

impl From<JsonError> for InfraError {
    fn from(value: JsonError) -> Self {
        InfraError(ShieldError::Storage(format!("invalid JSON state: {value}")))
    }
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → ApiError */
/* -------------------------------------------------------------------------- */

/// Map a transport error onto the normalized call error.
///
/// Implemented as a trait because neither `reqwest::Error` nor `ApiError`
/// belongs to this crate.
pub trait IntoApiError {
    fn into_api_error(self) -> ApiError;
}

impl IntoApiError for HttpError {
    fn into_api_error(self) -> ApiError {
        let message = describe(&self);

        if self.is_builder() {
            return ApiError::Build(message);
        }

        let kind = if self.is_timeout() {
            TransportFailureKind::Timeout
        } else if self.is_connect() {
            TransportFailureKind::Connect
        } else if self.is_body() || self.is_decode() {
            TransportFailureKind::Body
        } else {
            TransportFailureKind::Request
        };

        ApiError::Transport(TransportFailure::new(kind, message))
    }
}

/// The error and its sources joined into one line. reqwest keeps the useful
/// part ("connection refused", "operation timed out") in the source chain.
fn describe(err: &HttpError) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let cause_text = cause.to_string();
        if !message.contains(&cause_text) {
            message.push_str(": ");
            message.push_str(&cause_text);
        }
        source = cause.source();
    }
    message
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
