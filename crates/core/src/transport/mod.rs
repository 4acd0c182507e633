//! Transport core: request description, stages and the pipeline that runs
//! them

pub mod client;
pub mod outcome;
pub mod ports;
pub mod request;
pub mod stages;

pub use client::{ApiClient, ApiClientBuilder};
pub use outcome::{Outcome, ResponseEnvelope};
pub use request::{HttpMethod, OutgoingRequest};
pub use stages::{NormalizeResponseStage, RequestStage, ResponseStage, TenantHeaderStage};
