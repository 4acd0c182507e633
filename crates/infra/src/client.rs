//! Application-level entry point
//!
//! `ControlPlaneClient` is built once per application context. It owns one
//! `ApiClient` and hands clones of it to each resource group, so all groups
//! share the same sender, configuration and tenant store.

use std::sync::Arc;

use edgeshield_core::{
    get_tenant_id, set_tenant_id, ApiClient, ConfigApi, DefenseApi, KeyValueStore, MonitorApi,
    RoutesApi, SslApi,
};
use edgeshield_domain::{Result, TenantId, TransportConfig};
use tracing::info;

use crate::config;
use crate::http::ReqwestSender;
use crate::storage::{FileStore, MemoryStore};

/// Typed client for the control-plane API
#[derive(Clone)]
pub struct ControlPlaneClient {
    transport: TransportConfig,
    store: Arc<dyn KeyValueStore>,
    api: ApiClient,
    config: ConfigApi,
    routes: RoutesApi,
    ssl: SslApi,
    defense: DefenseApi,
    monitor: MonitorApi,
}

impl ControlPlaneClient {
    /// Client over a reqwest sender built from `transport`.
    ///
    /// # Errors
    /// `ShieldError::Config` when the sender cannot be built from the
    /// configuration.
    pub fn new(transport: TransportConfig, store: Arc<dyn KeyValueStore>) -> Result<Self> {
        let sender = ReqwestSender::from_config(&transport)?;
        let api = ApiClient::new(Arc::new(sender), store.clone());

        info!(
            base_url = transport.base_url(),
            stages = ?api.stage_names(),
            "control-plane client ready"
        );

        Ok(Self {
            config: ConfigApi::new(api.clone()),
            routes: RoutesApi::new(api.clone()),
            ssl: SslApi::new(api.clone()),
            defense: DefenseApi::new(api.clone()),
            monitor: MonitorApi::new(api.clone()),
            transport,
            store,
            api,
        })
    }

    /// Client configured from the environment: see [`config::load`] for the
    /// transport settings. The tenant is kept in the file named by
    /// `EDGESHIELD_STATE_PATH`, or in memory when that is unset.
    ///
    /// # Errors
    /// Configuration errors from [`config::load`] or [`ControlPlaneClient::new`].
    pub fn from_env() -> Result<Self> {
        let transport = config::load()?;
        let store: Arc<dyn KeyValueStore> = match FileStore::from_env() {
            Some(store) => {
                info!(path = %store.path().display(), "tenant state file in use");
                Arc::new(store)
            }
            None => Arc::new(MemoryStore::new()),
        };
        Self::new(transport, store)
    }

    /// Configuration endpoints.
    pub fn config(&self) -> &ConfigApi {
        &self.config
    }

    /// Route endpoints.
    pub fn routes(&self) -> &RoutesApi {
        &self.routes
    }

    /// Certificate endpoints.
    pub fn ssl(&self) -> &SslApi {
        &self.ssl
    }

    /// Defense and statistics endpoints.
    pub fn defense(&self) -> &DefenseApi {
        &self.defense
    }

    /// Sync, monitoring and health endpoints.
    pub fn monitor(&self) -> &MonitorApi {
        &self.monitor
    }

    /// Shared pipeline, for requests the resource groups do not cover
    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    /// Transport settings the client was built with.
    pub fn transport_config(&self) -> &TransportConfig {
        &self.transport
    }

    /// Tenant the next request will carry
    pub fn tenant_id(&self) -> TenantId {
        get_tenant_id(self.store.as_ref())
    }

    /// Switch tenant for every subsequent request, from every clone.
    ///
    /// # Errors
    /// `ShieldError::InvalidInput` for an empty identifier, or the store's
    /// write error.
    pub fn set_tenant_id(&self, tenant_id: &str) -> Result<TenantId> {
        set_tenant_id(self.store.as_ref(), tenant_id)
    }
}

#[cfg(test)]
mod tests {
    use edgeshield_domain::ShieldError;

    use super::*;

    fn client() -> ControlPlaneClient {
        ControlPlaneClient::new(TransportConfig::default(), Arc::new(MemoryStore::new())).unwrap()
    }

    #[test]
    fn tenant_defaults_and_switches() {
        let client = client();
        assert!(client.tenant_id().is_default());

        client.set_tenant_id("acme").unwrap();
        assert_eq!(client.tenant_id().as_str(), "acme");
    }

    #[test]
    fn clones_share_the_tenant_store() {
        let client = client();
        let clone = client.clone();

        clone.set_tenant_id("t-9").unwrap();
        assert_eq!(client.tenant_id().as_str(), "t-9");
    }

    #[test]
    fn empty_tenant_is_rejected() {
        let result = client().set_tenant_id("");
        assert!(matches!(result, Err(ShieldError::InvalidInput(_))));
    }

    #[test]
    fn uses_standard_pipeline() {
        let client = client();
        assert_eq!(client.api().stage_names(), vec!["tenant_header", "normalize_response"]);
        assert_eq!(client.transport_config().base_url(), "http://localhost:5002/api");
    }

    #[test]
    fn invalid_default_header_fails_construction() {
        let transport = TransportConfig::default().with_header("X-Bad", "line\nbreak");
        let result = ControlPlaneClient::new(transport, Arc::new(MemoryStore::new()));
        assert!(matches!(result, Err(ShieldError::Config(_))));
    }
}
