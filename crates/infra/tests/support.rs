#![allow(dead_code)]

use std::io;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use edgeshield_domain::TransportConfig;
use edgeshield_infra::{ControlPlaneClient, MemoryStore};
use tracing::subscriber::DefaultGuard;
use tracing::Level;
use tracing_subscriber::fmt::MakeWriter;
use wiremock::MockServer;

/// Client pointed at a mock server, optionally with a stored tenant.
pub fn client_for(server: &MockServer, tenant: Option<&str>) -> ControlPlaneClient {
    client_with_config(TransportConfig::new(format!("{}/api", server.uri())), tenant)
}

/// Same as [`client_for`] with a custom timeout.
pub fn client_with_timeout(
    server: &MockServer,
    timeout: Duration,
    tenant: Option<&str>,
) -> ControlPlaneClient {
    let config = TransportConfig::new(format!("{}/api", server.uri())).with_timeout(timeout);
    client_with_config(config, tenant)
}

fn client_with_config(config: TransportConfig, tenant: Option<&str>) -> ControlPlaneClient {
    let store = tenant.map_or_else(MemoryStore::new, |tenant| {
        MemoryStore::new().with_entry("tenantId", tenant)
    });
    ControlPlaneClient::new(config, Arc::new(store)).expect("client should build")
}

/// Handle for inspecting captured log output during tests.
#[derive(Clone, Default)]
pub struct LogHandle {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl LogHandle {
    /// All captured output.
    pub fn contents(&self) -> String {
        let guard = self.buffer.lock().expect("log mutex poisoned");
        String::from_utf8_lossy(&guard).into_owned()
    }

    /// Check whether a line at `level` containing `needle` was logged.
    pub fn contains(&self, level: Level, needle: &str) -> bool {
        let level = level.to_string();
        self.contents().lines().any(|line| line.contains(&level) && line.contains(needle))
    }
}

impl io::Write for LogHandle {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.lock().expect("log mutex poisoned").extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogHandle {
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Capture tracing output on the current thread until the guard drops.
pub fn capture_logs() -> (LogHandle, DefaultGuard) {
    let handle = LogHandle::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(handle.clone())
        .with_ansi(false)
        .with_max_level(Level::DEBUG)
        .finish();
    let guard = tracing::subscriber::set_default(subscriber);
    (handle, guard)
}
