//! Tenant identity helpers
//!
//! The tenant is never cached: every call goes back to the store, so a
//! `set_tenant_id` is visible to the very next request.

pub mod ports;

use edgeshield_domain::constants::TENANT_STORAGE_KEY;
use edgeshield_domain::{Result, TenantId};
use tracing::{debug, warn};

use self::ports::KeyValueStore;

/// Tenant the next request will be tagged with.
///
/// Never fails: a storage error is logged and the sentinel tenant is used, so
/// tagging can never block a request.
pub fn current_tenant(store: &dyn KeyValueStore) -> TenantId {
    match store.get(TENANT_STORAGE_KEY) {
        Ok(stored) => TenantId::from_stored(stored),
        Err(err) => {
            warn!(error = %err, "failed to read tenant id, using default tenant");
            TenantId::default()
        }
    }
}

/// Read the stored tenant identifier, `default-tenant` when unset.
pub fn get_tenant_id(store: &dyn KeyValueStore) -> TenantId {
    current_tenant(store)
}

/// Persist the tenant identifier used for subsequent requests.
///
/// # Errors
/// `ShieldError::InvalidInput` for an empty identifier or one holding
/// control characters, or whatever the store
/// reports when the write fails.
pub fn set_tenant_id(store: &dyn KeyValueStore, tenant_id: &str) -> Result<TenantId> {
    let tenant = TenantId::parse(tenant_id)?;
    store.set(TENANT_STORAGE_KEY, tenant.as_str())?;
    debug!(tenant = %tenant, "tenant id stored");
    Ok(tenant)
}
