//! Domain types for data in flight between callers and the control plane

pub mod notify;
pub mod payloads;
pub mod query;
pub mod tenant;

pub use notify::NotifyLevel;
pub use payloads::{
    AnalyzeBody, ConfigBody, DefenseConfigBody, DefenseEnableBody, RouteBody, RouteUpdateBody,
};
pub use query::LogQuery;
pub use tenant::TenantId;
