//! HTTP transport port interface

use std::fmt;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Transport-level failures (DNS, connection, timeout)
#[derive(Debug, Clone, Error)]
pub enum TransportError {
    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("Connection failed: {0}")]
    Connect(String),

    #[error("{0}")]
    Other(String),
}

/// HTTP methods used by the exporter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Patch,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Patch => "PATCH",
        };
        f.write_str(name)
    }
}

/// An outgoing request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Look up a header value by case-insensitive name
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// A received response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    /// Canonical reason phrase, e.g. "Internal Server Error"
    pub status_text: String,
    pub body: String,
}

impl HttpResponse {
    /// Whether the status is 2xx
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decode the body as JSON
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_str(&self.body)
    }
}

/// Port for sending HTTP requests
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Send a request and return the response, whatever its status.
    ///
    /// Only transport failures are errors; non-2xx statuses are returned
    /// as responses.
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_covers_2xx_only() {
        let response = |status| HttpResponse {
            status,
            status_text: String::new(),
            body: String::new(),
        };
        assert!(response(200).ok());
        assert!(response(204).ok());
        assert!(!response(199).ok());
        assert!(!response(301).ok());
        assert!(!response(500).ok());
    }

    #[test]
    fn header_lookup_ignores_case() {
        let request = HttpRequest::new(HttpMethod::Patch, "https://example.com")
            .header("Notion-Version", "2022-06-28");
        assert_eq!(request.header_value("notion-version"), Some("2022-06-28"));
        assert_eq!(request.header_value("Authorization"), None);
    }
}
