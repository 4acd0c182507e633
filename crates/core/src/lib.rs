//! # EdgeShield Core
//!
//! The request pipeline and the resource groups built on it - no network or
//! storage code.
//!
//! This crate contains:
//! - Port interfaces for the HTTP sender and the tenant key-value store
//! - The request pipeline (`ApiClient`) with its request/response stages
//! - Resource groups: configuration, routes, certificates, defense, monitor
//! - Tenant, notification helpers
//!
//! ## Architecture Principles
//! - Only depends on `edgeshield-domain`
//! - All I/O goes through the ports, implemented in `edgeshield-infra`
//! - Every stage is a plain function of its input and can be tested alone

pub mod groups;
pub mod notify;
pub mod tenant;
pub mod transport;

#[cfg(test)]
mod test_support;

// Re-export specific items to avoid ambiguity
pub use groups::{ConfigApi, DefenseApi, MonitorApi, RoutesApi, SslApi};
pub use notify::{notify, notify_info};
pub use tenant::ports::KeyValueStore;
pub use tenant::{current_tenant, get_tenant_id, set_tenant_id};
pub use transport::ports::HttpSender;
pub use transport::{
    ApiClient, ApiClientBuilder, HttpMethod, NormalizeResponseStage, Outcome, OutgoingRequest,
    RequestStage, ResponseEnvelope, ResponseStage, TenantHeaderStage,
};
