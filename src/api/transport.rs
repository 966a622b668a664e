use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::{Client as HttpClient, StatusCode};
use serde_json::Value;
use tracing::{debug, warn};

use super::models::{ApiRequest, RawOutcome};

/// Performs HTTP requests for [`FinanceClient`](super::FinanceClient)
///
/// Implementations never fail: every problem is reported through the
/// returned [`RawOutcome`].
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: ApiRequest) -> RawOutcome;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn send(&self, request: ApiRequest) -> RawOutcome {
        (**self).send(request).await
    }
}

/// Transport backed by a shared reqwest client
pub struct ReqwestTransport {
    http_client: HttpClient,
    base_url: String,
}

impl ReqwestTransport {
    /// Create a transport talking to `base_url` with no request timeout
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http_client: HttpClient::new(),
            base_url: base_url.into(),
        }
    }

    /// Create a transport whose requests give up after `timeout`
    pub fn with_timeout(
        base_url: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, reqwest::Error> {
        let mut builder = HttpClient::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http_client: builder.build()?,
            base_url: base_url.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url_for(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Turn a non-2xx response into a failure outcome
    fn handle_error_response(status: StatusCode, body_text: String) -> RawOutcome {
        let status_code = status.as_u16();
        let body = serde_json::from_str::<Value>(&body_text).ok();

        let message = match &body {
            Some(json) => json
                .get("message")
                .or_else(|| json.get("error"))
                .and_then(|v| v.as_str())
                .map(str::to_string),
            None if !body_text.trim().is_empty() => Some(body_text.trim().to_string()),
            None => None,
        };

        if status.is_server_error() {
            warn!("Server error {}: {}", status_code, body_text);
        } else {
            debug!("Request rejected with status {}", status_code);
        }

        RawOutcome::HttpFailure {
            status: Some(status_code),
            message,
        }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: ApiRequest) -> RawOutcome {
        let url = self.url_for(&request.path);
        debug!("{} {}", request.method, url);

        let mut builder = self
            .http_client
            .request(request.method, &url)
            .header(ACCEPT, "application/json");
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = match builder.send().await {
            Ok(response) => response,
            Err(e) => {
                warn!("Request to {} failed: {}", url, e);
                return RawOutcome::transport_failure(format!("Request failed: {}", e));
            }
        };

        let status = response.status();
        let body_text = match response.text().await {
            Ok(text) => text,
            Err(e) => {
                warn!("Failed to read response from {}: {}", url, e);
                return RawOutcome::transport_failure(format!("Failed to read response: {}", e));
            }
        };

        if !status.is_success() {
            return Self::handle_error_response(status, body_text);
        }

        if body_text.trim().is_empty() {
            return RawOutcome::HttpSuccess {
                status: status.as_u16(),
                data: None,
            };
        }

        match serde_json::from_str::<Value>(&body_text) {
            Ok(data) => RawOutcome::HttpSuccess {
                status: status.as_u16(),
                data: Some(data),
            },
            Err(e) => {
                warn!("Malformed response from {}: {}", url, e);
                RawOutcome::transport_failure(format!("Failed to parse response: {}", e))
            }
        }
    }
}
