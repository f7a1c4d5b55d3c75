//! Markdown to block conversion port interface

use thiserror::Error;

use crate::domain::notion::Block;

/// Conversion errors
#[derive(Debug, Clone, Error)]
pub enum ConversionError {
    #[error("Failed to parse Markdown: {0}")]
    Parse(String),
}

/// Port for turning Markdown into Notion blocks
pub trait BlockConverter: Send + Sync {
    /// Convert a Markdown document into an ordered list of blocks.
    ///
    /// # Arguments
    /// * `markdown` - The Markdown source
    ///
    /// # Returns
    /// Blocks in document order, or an error
    fn convert(&self, markdown: &str) -> Result<Vec<Block>, ConversionError>;
}
