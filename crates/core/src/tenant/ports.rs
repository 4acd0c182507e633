//! Port interface for persistent key-value storage

use edgeshield_domain::Result;

/// Key-value storage the tenant identity lives in
///
/// Reads happen on every outgoing request, so implementations must be safe
/// under concurrent `get` calls.
pub trait KeyValueStore: Send + Sync {
    /// Read a value, `Ok(None)` when the key was never set
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write a value, replacing any previous one
    fn set(&self, key: &str, value: &str) -> Result<()>;
}
