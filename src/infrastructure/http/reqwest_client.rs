//! reqwest HTTP client adapter

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::application::ports::{HttpClient, HttpMethod, HttpRequest, HttpResponse, TransportError};

/// HTTP client backed by reqwest
#[derive(Debug, Clone, Default)]
pub struct ReqwestHttpClient {
    client: reqwest::Client,
}

impl ReqwestHttpClient {
    /// Create a client without a request timeout
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a client that aborts requests after `timeout`
    pub fn with_timeout(timeout: Duration) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TransportError::Other(e.to_string()))?;
        Ok(Self { client })
    }

    fn method(method: HttpMethod) -> reqwest::Method {
        match method {
            HttpMethod::Patch => reqwest::Method::PATCH,
        }
    }
}

fn transport_error(err: reqwest::Error) -> TransportError {
    if err.is_timeout() {
        TransportError::Timeout(err.to_string())
    } else if err.is_connect() {
        TransportError::Connect(err.to_string())
    } else {
        TransportError::Other(err.to_string())
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        // Headers carry the bearer token and are never logged
        debug!(method = %request.method, url = %request.url, "Sending request");
        let mut builder = self
            .client
            .request(Self::method(request.method), &request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(transport_error)?;

        let status = response.status();
        debug!(status = status.as_u16(), "Received response");
        let body = response.text().await.map_err(transport_error)?;

        Ok(HttpResponse {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_string(),
            body,
        })
    }
}
