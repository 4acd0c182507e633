//! Example: Querying a control-plane gateway
//!
//! Builds a client from the environment, switches tenant and reads a few
//! read-only endpoints.
//!
//! # Setup
//!
//! 1. Point the client at a gateway: ```bash export
//!    EDGESHIELD_API_URL=http://localhost:5002/api ```
//!
//! 2. Optionally persist the tenant between runs: ```bash export
//!    EDGESHIELD_STATE_PATH=/tmp/edgeshield-state.json ```
//!
//! 3. Run this example: ```bash cargo run -p edgeshield-infra --example
//!    control_plane_demo -- acme-corp ```

use edgeshield_core::{notify, notify_info};
use edgeshield_domain::{format_date_str, LogQuery, NotifyLevel};
use edgeshield_infra::{init_tracing, ControlPlaneClient, LogFormat};
use serde_json::Value;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing(LogFormat::Pretty)?;

    let client = ControlPlaneClient::from_env()?;
    if let Some(tenant) = std::env::args().nth(1) {
        client.set_tenant_id(&tenant)?;
    }
    notify_info(&format!(
        "tenant {} on {}",
        client.tenant_id(),
        client.transport_config().base_url()
    ));

    match client.monitor().get_health::<Value>().await {
        Ok(health) => notify(&format!("gateway health: {health}"), NotifyLevel::Success),
        Err(err) => {
            notify(&format!("gateway unreachable: {err}"), NotifyLevel::Error);
            return Ok(());
        }
    }

    let stats: Value = client.defense().get_statistics().await?;
    notify_info(&format!("statistics: {stats}"));

    let logs: Vec<Value> = client.defense().get_logs(&LogQuery::new().limit(5)).await?;
    for entry in &logs {
        let when = entry
            .get("timestamp")
            .and_then(Value::as_str)
            .and_then(|ts| format_date_str(ts).ok())
            .unwrap_or_else(|| "-".to_string());
        notify_info(&format!("[{when}] {entry}"));
    }

    Ok(())
}
