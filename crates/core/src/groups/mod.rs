//! Resource groups
//!
//! One struct per area of the control plane. Every method maps to exactly one
//! verb, path and body shape and returns whatever the pipeline returns; none
//! of them handle errors of their own.
//!
//! Response types are generic: ask for `serde_json::Value` to get the payload
//! as sent, or for your own `Deserialize` type.

pub mod config;
pub mod defense;
pub mod monitor;
pub mod routes;
pub mod ssl;

pub use config::ConfigApi;
pub use defense::DefenseApi;
pub use monitor::MonitorApi;
pub use routes::RoutesApi;
pub use ssl::SslApi;
