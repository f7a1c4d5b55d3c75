//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with external systems like the Notion API and the
//! config file on disk.

pub mod config;
pub mod http;
pub mod markdown;
pub mod notion;

// Re-export adapters
pub use config::XdgConfigStore;
pub use http::ReqwestHttpClient;
pub use markdown::MarkdownBlockConverter;
pub use notion::NotionPageWriter;
