//! Notion page writer adapter

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::application::ports::{HttpClient, HttpMethod, HttpRequest, HttpResponse, PageWriteError, PageWriter};
use crate::domain::config::DEFAULT_API_BASE_URL;
use crate::domain::meeting::RemoteTargetConfig;
use crate::domain::notion::Block;

/// Notion API version header value
pub const NOTION_VERSION: &str = "2022-06-28";

/// Prefix of public page URLs
pub const PAGE_URL_BASE: &str = "https://notion.so/";

// Request types for Notion API

#[derive(Debug, Serialize)]
struct AppendChildrenRequest<'a> {
    children: &'a [Block],
}

// Response types for Notion API

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: Option<String>,
}

/// Appends blocks to Notion pages through an injected HTTP client
pub struct NotionPageWriter<H: HttpClient> {
    http: H,
    api_base_url: String,
}

impl<H: HttpClient> NotionPageWriter<H> {
    /// Create a writer for the public Notion API
    pub fn new(http: H) -> Self {
        Self::with_base_url(http, DEFAULT_API_BASE_URL)
    }

    /// Create a writer against a custom API base URL
    pub fn with_base_url(http: H, api_base_url: impl Into<String>) -> Self {
        Self {
            http,
            api_base_url: api_base_url.into(),
        }
    }

    /// Build the "append block children" URL
    fn children_url(&self, page_id: &str) -> String {
        format!(
            "{}/blocks/{}/children",
            self.api_base_url.trim_end_matches('/'),
            page_id
        )
    }

    /// Serialize the request body for one batch
    pub fn request_body(blocks: &[Block]) -> Result<String, PageWriteError> {
        serde_json::to_string(&AppendChildrenRequest { children: blocks })
            .map_err(|e| PageWriteError::Encode(e.to_string()))
    }

    /// Build the PATCH request for one batch
    pub fn build_request(
        &self,
        target: &RemoteTargetConfig,
        blocks: &[Block],
    ) -> Result<HttpRequest, PageWriteError> {
        let body = Self::request_body(blocks)?;

        Ok(HttpRequest::new(HttpMethod::Patch, self.children_url(target.page_id()))
            .header("Authorization", format!("Bearer {}", target.api_key()))
            .header("Content-Type", "application/json")
            .header("Notion-Version", NOTION_VERSION)
            .body(body))
    }

    /// Extract the error message from a failed response.
    ///
    /// Falls back to the status text when the body is not JSON or has no
    /// `message` field.
    fn error_message(response: &HttpResponse) -> String {
        response
            .json::<ApiErrorBody>()
            .ok()
            .and_then(|body| body.message)
            .filter(|message| !message.trim().is_empty())
            .unwrap_or_else(|| {
                if response.status_text.is_empty() {
                    format!("HTTP {}", response.status)
                } else {
                    response.status_text.clone()
                }
            })
    }
}

#[async_trait]
impl<H: HttpClient> PageWriter for NotionPageWriter<H> {
    async fn append_blocks(
        &self,
        target: &RemoteTargetConfig,
        blocks: &[Block],
    ) -> Result<(), PageWriteError> {
        let request = self.build_request(target, blocks)?;
        let response = self.http.send(request).await?;

        if !response.ok() {
            return Err(PageWriteError::Api {
                status: response.status,
                message: Self::error_message(&response),
            });
        }

        Ok(())
    }

    fn page_url(&self, target: &RemoteTargetConfig) -> String {
        format!("{}{}", PAGE_URL_BASE, target.page_id())
    }
}
