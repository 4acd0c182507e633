//! # EdgeShield Domain
//!
//! Data shapes shared by every layer of the EdgeShield control-plane client.
//!
//! This crate contains:
//! - Error types (`ShieldError`, `ApiError`) and the `Result` alias
//! - Transport configuration
//! - Tenant identity, request body envelopes and log queries
//! - Wire constants and the date display helpers
//!
//! ## Architecture
//! - No dependencies on other EdgeShield crates
//! - No I/O: pure data and pure functions only

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;
pub mod utils;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
pub use utils::date_format::{format_date, format_date_str, format_timestamp_millis};
