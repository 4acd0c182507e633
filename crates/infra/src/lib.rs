//! # EdgeShield Infrastructure
//!
//! Infrastructure implementations of the core ports.
//!
//! This crate contains:
//! - The reqwest-backed HTTP sender
//! - Tenant key-value stores (in-memory and JSON file)
//! - Configuration loading from files and environment variables
//! - Tracing subscriber setup
//! - `ControlPlaneClient`, which wires all of the above together
//!
//! ## Architecture
//! - Implements traits defined in `edgeshield-core`
//! - Contains all "impure" code (network, filesystem, environment)

pub mod client;
pub mod config;
pub mod errors;
pub mod http;
pub mod observability;
pub mod storage;

// Re-export commonly used items
pub use client::ControlPlaneClient;
pub use http::{ReqwestSender, ReqwestSenderBuilder};
pub use observability::{init_tracing, LogFormat};
pub use storage::{FileStore, MemoryStore};
