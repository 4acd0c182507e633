//! Tenant identity attached to every outgoing request

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_TENANT_ID;
use crate::errors::{Result, ShieldError};

/// Non-empty tenant identifier
///
/// Values are kept exactly as supplied. Rejected values are the empty string
/// and anything holding a control character other than tab, since neither
/// can be sent as an `X-Tenant-ID` header.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TenantId(String);

impl TenantId {
    /// Validate a caller-supplied identifier.
    ///
    /// # Errors
    /// Returns `ShieldError::InvalidInput` for an empty string or one that
    /// contains a control character other than tab.
    pub fn parse(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(ShieldError::InvalidInput("tenant id must not be empty".into()));
        }
        if let Some(bad) = value.chars().find(|c| c.is_control() && *c != '\t') {
            return Err(ShieldError::InvalidInput(format!(
                "tenant id must not contain control character {bad:?}"
            )));
        }
        Ok(Self(value))
    }

    /// Resolve a value read from storage, falling back to the sentinel tenant
    /// when nothing (or an invalid value) is stored.
    pub fn from_stored(value: Option<String>) -> Self {
        value.and_then(|stored| Self::parse(stored).ok()).unwrap_or_default()
    }

    /// The identifier as sent in the tenant header.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is the `default-tenant` sentinel.
    pub fn is_default(&self) -> bool {
        self.0 == DEFAULT_TENANT_ID
    }
}

impl Default for TenantId {
    fn default() -> Self {
        Self(DEFAULT_TENANT_ID.to_string())
    }
}

impl fmt::Display for TenantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for TenantId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for TenantId {
    type Error = ShieldError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(value)
    }
}

impl From<TenantId> for String {
    fn from(value: TenantId) -> Self {
        value.0
    }
}
