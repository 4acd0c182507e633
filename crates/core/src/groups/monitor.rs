//! Synchronization and service health

use edgeshield_domain::ApiError;
use serde::de::DeserializeOwned;

use crate::transport::{ApiClient, OutgoingRequest};

/// Sync, monitoring and health endpoints
#[derive(Clone)]
pub struct MonitorApi {
    client: ApiClient,
}

impl MonitorApi {
    /// Group issuing its calls through `client`.
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// `GET /sync/status`
    ///
    /// # Errors
    /// The normalized pipeline error.
    pub async fn get_sync_status<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        self.client.call(Ok(OutgoingRequest::get("/sync/status"))).await
    }

    /// `POST /sync/refresh`, sent without a body
    ///
    /// # Errors
    /// The normalized pipeline error.
    pub async fn refresh_sync<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        self.client.call(Ok(OutgoingRequest::post("/sync/refresh"))).await
    }

    /// `GET /monitor`
    ///
    /// # Errors
    /// The normalized pipeline error.
    pub async fn get_monitor_info<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        self.client.call(Ok(OutgoingRequest::get("/monitor"))).await
    }

    /// `GET /health`
    ///
    /// # Errors
    /// The normalized pipeline error.
    pub async fn get_health<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        self.client.call(Ok(OutgoingRequest::get("/health"))).await
    }

    /// `GET /info`
    ///
    /// # Errors
    /// The normalized pipeline error.
    pub async fn get_info<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        self.client.call(Ok(OutgoingRequest::get("/info"))).await
    }
}
