//! Error types used throughout the client

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Main error type for configuration, storage and helper operations
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum ShieldError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for EdgeShield operations
pub type Result<T> = std::result::Result<T, ShieldError>;

/// What went wrong below the application layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "status", rename_all = "snake_case")]
pub enum TransportFailureKind {
    /// The per-request timeout elapsed.
    Timeout,
    /// Connection refused, DNS failure, TLS handshake failure.
    Connect,
    /// The request was rejected while being sent.
    Request,
    /// The response body could not be read.
    Body,
    /// Non-2xx response that carried no body.
    Status(u16),
}

impl fmt::Display for TransportFailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Timeout => write!(f, "timeout"),
            Self::Connect => write!(f, "connect"),
            Self::Request => write!(f, "request"),
            Self::Body => write!(f, "body"),
            Self::Status(status) => write!(f, "status {status}"),
        }
    }
}

/// Raw transport failure, surfaced unchanged when the server sent no body.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("{kind}: {message}")]
pub struct TransportFailure {
    /// What went wrong.
    pub kind: TransportFailureKind,
    /// Underlying error text.
    pub message: String,
}

impl TransportFailure {
    /// Failure of the given kind.
    pub fn new(kind: TransportFailureKind, message: impl Into<String>) -> Self {
        Self { kind, message: message.into() }
    }

    /// Whether the request ran out of time.
    pub fn is_timeout(&self) -> bool {
        self.kind == TransportFailureKind::Timeout
    }
}

/// Normalized outcome of a failed control-plane call.
///
/// Callers only ever see one of these or the unwrapped payload. Status codes
/// and headers of a server rejection are deliberately not carried: the body
/// the server sent is the whole error.
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "detail")]
pub enum ApiError {
    /// The request could not be assembled (body serialization, bad URL or
    /// header value). Nothing was sent.
    #[error("Request could not be built: {0}")]
    Build(String),

    /// Network-level failure, or a non-2xx response without a body.
    #[error("Transport failure: {0}")]
    Transport(#[from] TransportFailure),

    /// Structured error body returned by the server.
    #[error("Server rejected request: {0}")]
    Server(Value),

    /// The payload arrived but does not match the type the caller asked for.
    #[error("Failed to decode response payload: {0}")]
    Decode(String),

    /// The response pipeline finished without producing a terminal outcome.
    #[error("Internal pipeline error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Server error body, if the failure carried one.
    pub fn server_body(&self) -> Option<&Value> {
        match self {
            Self::Server(body) => Some(body),
            _ => None,
        }
    }

    /// Raw transport failure, if there was no server body.
    pub fn transport_failure(&self) -> Option<&TransportFailure> {
        match self {
            Self::Transport(failure) => Some(failure),
            _ => None,
        }
    }

    /// Whether this is a transport timeout.
    pub fn is_timeout(&self) -> bool {
        self.transport_failure().is_some_and(TransportFailure::is_timeout)
    }

    /// Stable label suitable for structured logging.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Build(_) => "build",
            Self::Transport(_) => "transport",
            Self::Server(_) => "server",
            Self::Decode(_) => "decode",
            Self::Internal(_) => "internal",
        }
    }
}
