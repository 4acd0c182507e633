//! Wire and configuration constants
//!
//! Centralized location for the values shared between the transport, the
//! tenant helpers and the configuration loader.

use std::time::Duration;

// Remote service defaults
pub const DEFAULT_API_URL: &str = "http://localhost:5002/api";
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(DEFAULT_TIMEOUT_MS);
pub const CONTENT_TYPE_HEADER: &str = "Content-Type";
pub const CONTENT_TYPE_JSON: &str = "application/json";

// Multi-tenant tagging
pub const TENANT_HEADER: &str = "X-Tenant-ID";
pub const TENANT_STORAGE_KEY: &str = "tenantId";
pub const DEFAULT_TENANT_ID: &str = "default-tenant";

// Environment variables
pub const ENV_API_URL: &str = "EDGESHIELD_API_URL";
pub const ENV_CONFIG_PATH: &str = "EDGESHIELD_CONFIG";
pub const ENV_STATE_PATH: &str = "EDGESHIELD_STATE_PATH";
