//! Protected routes

use edgeshield_domain::{ApiError, RouteBody, RouteUpdateBody};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::transport::{ApiClient, OutgoingRequest};

/// `/routes` endpoints
///
/// Route ids are placed into the path exactly as given.
#[derive(Clone)]
pub struct RoutesApi {
    client: ApiClient,
}

impl RoutesApi {
    /// Group issuing its calls through `client`.
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// `GET /routes`
    ///
    /// # Errors
    /// The normalized pipeline error.
    pub async fn list<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        self.client.call(Ok(OutgoingRequest::get("/routes"))).await
    }

    /// `POST /routes` with `{"route": route}`
    ///
    /// # Errors
    /// The normalized pipeline error.
    pub async fn create<T, B>(&self, route: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let request = OutgoingRequest::post("/routes").with_json(&RouteBody { route });
        self.client.call(request).await
    }

    /// `GET /routes/{id}`
    ///
    /// # Errors
    /// The normalized pipeline error.
    pub async fn get<T: DeserializeOwned>(&self, id: &str) -> Result<T, ApiError> {
        self.client.call(Ok(OutgoingRequest::get(format!("/routes/{id}")))).await
    }

    /// `PUT /routes/{id}` with `{"updates": updates}`
    ///
    /// # Errors
    /// The normalized pipeline error.
    pub async fn update<T, B>(&self, id: &str, updates: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let request =
            OutgoingRequest::put(format!("/routes/{id}")).with_json(&RouteUpdateBody { updates });
        self.client.call(request).await
    }

    /// `DELETE /routes/{id}`
    ///
    /// # Errors
    /// The normalized pipeline error.
    pub async fn delete<T: DeserializeOwned>(&self, id: &str) -> Result<T, ApiError> {
        self.client.call(Ok(OutgoingRequest::delete(format!("/routes/{id}")))).await
    }
}
