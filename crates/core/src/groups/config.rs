//! Gateway configuration

use edgeshield_domain::{ApiError, ConfigBody};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::transport::{ApiClient, OutgoingRequest};

/// `/config` endpoints
#[derive(Clone)]
pub struct ConfigApi {
    client: ApiClient,
}

impl ConfigApi {
    /// Group issuing its calls through `client`.
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// `GET /config`: configuration of the current tenant
    ///
    /// # Errors
    /// The normalized pipeline error.
    pub async fn get_config<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        self.client.call(Ok(OutgoingRequest::get("/config"))).await
    }

    /// `POST /config` with `{"config": config}`
    ///
    /// # Errors
    /// The normalized pipeline error.
    pub async fn update_config<T, B>(&self, config: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let request = OutgoingRequest::post("/config").with_json(&ConfigBody { config });
        self.client.call(request).await
    }

    /// `GET /config/all`: configurations of every tenant
    ///
    /// # Errors
    /// The normalized pipeline error.
    pub async fn get_all_configs<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        self.client.call(Ok(OutgoingRequest::get("/config/all"))).await
    }
}
