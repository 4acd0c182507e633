//! Fakes shared by the unit tests in this crate

use std::collections::HashMap;
use std::io;
use std::sync::Arc;

use async_trait::async_trait;
use edgeshield_domain::{ApiError, Result};
use parking_lot::Mutex;
use serde_json::Value;
use tracing::subscriber::DefaultGuard;
use tracing_subscriber::fmt::MakeWriter;

use crate::tenant::ports::KeyValueStore;
use crate::transport::outcome::ResponseEnvelope;
use crate::transport::ports::HttpSender;
use crate::transport::request::OutgoingRequest;

/// In-memory key-value store
#[derive(Default)]
pub struct MapStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MapStore {
    pub fn with_tenant(tenant: &str) -> Self {
        let store = Self::default();
        store.put("tenantId", tenant);
        store
    }

    pub fn put(&self, key: &str, value: &str) {
        self.entries.lock().insert(key.to_string(), value.to_string());
    }
}

impl KeyValueStore for MapStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.put(key, value);
        Ok(())
    }
}

/// Sender that records every request and answers with a canned reply
pub struct RecordingSender {
    requests: Mutex<Vec<OutgoingRequest>>,
    reply: std::result::Result<ResponseEnvelope, ApiError>,
}

impl RecordingSender {
    pub fn replying(reply: std::result::Result<ResponseEnvelope, ApiError>) -> Arc<Self> {
        Arc::new(Self { requests: Mutex::new(Vec::new()), reply })
    }

    pub fn ok(body: Value) -> Arc<Self> {
        Self::replying(Ok(ResponseEnvelope::new(200, body)))
    }

    pub fn requests(&self) -> Vec<OutgoingRequest> {
        self.requests.lock().clone()
    }

    /// The only request sent so far; panics unless exactly one was sent
    pub fn single_request(&self) -> OutgoingRequest {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request, got {requests:?}");
        requests.into_iter().next().unwrap()
    }
}

#[async_trait]
impl HttpSender for RecordingSender {
    async fn send(
        &self,
        request: OutgoingRequest,
    ) -> std::result::Result<ResponseEnvelope, ApiError> {
        self.requests.lock().push(request);
        self.reply.clone()
    }
}

/// Captures formatted tracing output for the current thread
#[derive(Clone, Default)]
pub struct LogCapture {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl LogCapture {
    /// Install as the thread's default subscriber until the guard drops
    pub fn install() -> (Self, DefaultGuard) {
        let capture = Self::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(capture.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::TRACE)
            .finish();
        let guard = tracing::subscriber::set_default(subscriber);
        (capture, guard)
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buffer.lock()).into_owned()
    }
}

impl io::Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogCapture {
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}
