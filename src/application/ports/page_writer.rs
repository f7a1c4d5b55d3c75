//! Remote page writer port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::meeting::RemoteTargetConfig;
use crate::domain::notion::Block;

use super::http::TransportError;

/// Errors while appending blocks to a page
#[derive(Debug, Clone, Error)]
pub enum PageWriteError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("Notion API error: {message}")]
    Api { status: u16, message: String },

    #[error("Failed to encode request body: {0}")]
    Encode(String),
}

/// Port for appending content to an existing remote page
#[async_trait]
pub trait PageWriter: Send + Sync {
    /// Append `blocks` as children of the target page in one request.
    async fn append_blocks(
        &self,
        target: &RemoteTargetConfig,
        blocks: &[Block],
    ) -> Result<(), PageWriteError>;

    /// Public URL of the target page
    fn page_url(&self, target: &RemoteTargetConfig) -> String;
}
