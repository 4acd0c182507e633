//! Error conversions for infrastructure failures

pub mod conversions;

pub use conversions::{InfraError, IntoApiError};
