//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod block_converter;
pub mod config;
pub mod http;
pub mod page_writer;

// Re-export common types
pub use block_converter::{BlockConverter, ConversionError};
pub use config::ConfigStore;
pub use http::{HttpClient, HttpMethod, HttpRequest, HttpResponse, TransportError};
pub use page_writer::{PageWriteError, PageWriter};
