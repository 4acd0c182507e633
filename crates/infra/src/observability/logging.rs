//! Installs the global `tracing` subscriber
//!
//! Library code only emits events; binaries and demos call [`init_tracing`]
//! once at startup. The filter comes from `RUST_LOG` and defaults to `info`.

use edgeshield_domain::{impl_label_conversions, Result, ShieldError};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info";

/// Output format of the log sink
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable multi-line output
    #[default]
    Pretty,
    /// One JSON object per event
    Json,
}

impl_label_conversions!(LogFormat {
    Pretty => "pretty",
    Json => "json",
});

/// Install the global subscriber.
///
/// # Errors
/// `ShieldError::Config` when `RUST_LOG` holds an invalid directive, or
/// `ShieldError::Internal` when a global subscriber is already installed.
pub fn init_tracing(format: LogFormat) -> Result<()> {
    let filter = build_filter(std::env::var(EnvFilter::DEFAULT_ENV).ok().as_deref())?;
    let registry = tracing_subscriber::registry().with(filter);

    let installed = match format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).try_init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer().pretty()).try_init(),
    };

    installed
        .map_err(|e| ShieldError::Internal(format!("failed to install tracing subscriber: {e}")))
}

fn build_filter(directives: Option<&str>) -> Result<EnvFilter> {
    match directives.filter(|value| !value.trim().is_empty()) {
        Some(directives) => EnvFilter::try_new(directives)
            .map_err(|e| ShieldError::Config(format!("invalid RUST_LOG directive: {e}"))),
        None => Ok(EnvFilter::new(DEFAULT_FILTER)),
    }
}
