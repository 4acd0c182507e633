//! Certificates

use edgeshield_domain::ApiError;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::transport::{ApiClient, OutgoingRequest};

/// `/ssl` endpoints
#[derive(Clone)]
pub struct SslApi {
    client: ApiClient,
}

impl SslApi {
    /// Group issuing its calls through `client`.
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// `GET /ssl`
    ///
    /// # Errors
    /// The normalized pipeline error.
    pub async fn list<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        self.client.call(Ok(OutgoingRequest::get("/ssl"))).await
    }

    /// `POST /ssl`
    ///
    /// Unlike every other write, the certificate object is the body itself,
    /// with no wrapping key.
    ///
    /// # Errors
    /// The normalized pipeline error.
    pub async fn upload<T, B>(&self, certificate: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.client.call(OutgoingRequest::post("/ssl").with_json(certificate)).await
    }

    /// `DELETE /ssl/{id}`
    ///
    /// # Errors
    /// The normalized pipeline error.
    pub async fn delete<T: DeserializeOwned>(&self, id: &str) -> Result<T, ApiError> {
        self.client.call(Ok(OutgoingRequest::delete(format!("/ssl/{id}")))).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde::Serialize;
    use serde_json::{json, Value};

    use super::*;
    use crate::test_support::{MapStore, RecordingSender};
    use crate::transport::HttpMethod;

    fn api(sender: &Arc<RecordingSender>) -> SslApi {
        SslApi::new(ApiClient::new(sender.clone(), Arc::new(MapStore::default())))
    }

    #[tokio::test]
    async fn test_list() {
        let sender = RecordingSender::ok(json!([]));

        let _: Value = api(&sender).list().await.unwrap();

        let request = sender.single_request();
        assert_eq!(request.method(), HttpMethod::Get);
        assert_eq!(request.path(), "/ssl");
    }

    #[tokio::test]
    async fn test_upload_sends_certificate_unwrapped() {
        #[derive(Serialize)]
        struct Certificate<'a> {
            domain: &'a str,
            cert: &'a str,
            key: &'a str,
        }

        let sender = RecordingSender::ok(json!({"id": "c1"}));
        let certificate = Certificate { domain: "example.com", cert: "PEM", key: "KEY" };

        let _: Value = api(&sender).upload(&certificate).await.unwrap();

        let request = sender.single_request();
        assert_eq!(request.method(), HttpMethod::Post);
        assert_eq!(request.path(), "/ssl");
        assert_eq!(
            request.body(),
            Some(&json!({"domain": "example.com", "cert": "PEM", "key": "KEY"}))
        );
    }

    #[tokio::test]
    async fn test_delete() {
        let sender = RecordingSender::ok(json!({"success": true}));

        let _: Value = api(&sender).delete("c1").await.unwrap();

        let request = sender.single_request();
        assert_eq!(request.method(), HttpMethod::Delete);
        assert_eq!(request.path(), "/ssl/c1");
    }
}
