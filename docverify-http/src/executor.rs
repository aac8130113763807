use docverify_api::{ApiError, ApiResult, ClientConfig};
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::{debug, warn, Instrument};
use uuid::Uuid;

use crate::utils::{decode_json, extract_error_message, map_transport_error};

pub const REQUEST_ID_HEADER: &str = "X-Request-Id";

/// Shared HTTP session used by every repository.
///
/// Holds one connection-pooled client and the configuration it was built
/// from. Cloning is cheap.
#[derive(Clone)]
pub struct HttpExecutor {
    client: Client,
    config: Arc<ClientConfig>,
}

impl HttpExecutor {
    pub fn new(config: &ClientConfig) -> ApiResult<Self> {
        config.check()?;
        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| ApiError::Transport(format!("Failed to create HTTP client: {e}")))?;
        Ok(Self {
            client,
            config: Arc::new(config.clone()),
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn get(&self, path: &str) -> RequestBuilder {
        self.client.get(self.config.endpoint(path))
    }

    pub fn post(&self, path: &str) -> RequestBuilder {
        self.client.post(self.config.endpoint(path))
    }

    /// Send `request` and decode a 2xx JSON body into `T`.
    ///
    /// Non-2xx answers become `ApiError::Remote` carrying the server's message.
    pub async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> ApiResult<T> {
        let request_id = Uuid::new_v4();
        let span = tracing::debug_span!("http_request", %request_id);
        async move {
            let response = self.send(request, request_id).await?;
            let body = response
                .bytes()
                .await
                .map_err(|e| map_transport_error(e, self.config.request_timeout()))?;
            decode_json(&body)
        }
        .instrument(span)
        .await
    }

    async fn send(&self, request: RequestBuilder, request_id: Uuid) -> ApiResult<Response> {
        let mut request = request.header(REQUEST_ID_HEADER, request_id.to_string());
        if let Some(token) = &self.config.auth_token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| map_transport_error(e, self.config.request_timeout()))?;

        let status = response.status();
        debug!(status = status.as_u16(), url = %response.url(), "response received");
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = extract_error_message(&body);
        warn!(status = status.as_u16(), message = ?message, "request rejected");
        Err(ApiError::Remote {
            status: status.as_u16(),
            message,
        })
    }
}
