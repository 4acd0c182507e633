//! Defense policies, request analysis and the attack log

use edgeshield_domain::{AnalyzeBody, ApiError, DefenseConfigBody, DefenseEnableBody, LogQuery};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::transport::{ApiClient, OutgoingRequest};

/// Defense endpoints
#[derive(Clone)]
pub struct DefenseApi {
    client: ApiClient,
}

impl DefenseApi {
    /// Group issuing its calls through `client`.
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// `POST /defense/enable` with `{"route_id": .., "defense_config": ..}`
    ///
    /// # Errors
    /// The normalized pipeline error.
    pub async fn enable<T, B>(&self, route_id: &str, defense_config: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let body = DefenseEnableBody { route_id, defense_config };
        self.client.call(OutgoingRequest::post("/defense/enable").with_json(&body)).await
    }

    /// `POST /defense/update-all` with `{"defense_config": ..}`
    ///
    /// # Errors
    /// The normalized pipeline error.
    pub async fn update_all<T, B>(&self, defense_config: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let body = DefenseConfigBody { defense_config };
        self.client.call(OutgoingRequest::post("/defense/update-all").with_json(&body)).await
    }

    /// `POST /analyze` with `{"request": ..}`
    ///
    /// # Errors
    /// The normalized pipeline error.
    pub async fn analyze<T, B>(&self, request: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let body = AnalyzeBody { request };
        self.client.call(OutgoingRequest::post("/analyze").with_json(&body)).await
    }

    /// `GET /statistics`
    ///
    /// # Errors
    /// The normalized pipeline error.
    pub async fn get_statistics<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        self.client.call(Ok(OutgoingRequest::get("/statistics"))).await
    }

    /// `GET /logs`, filters sent as query parameters
    ///
    /// # Errors
    /// The normalized pipeline error.
    pub async fn get_logs<T: DeserializeOwned>(&self, query: &LogQuery) -> Result<T, ApiError> {
        let request = OutgoingRequest::get("/logs").with_query(query.pairs());
        self.client.call(Ok(request)).await
    }
}
