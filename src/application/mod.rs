//! Application layer - Use cases and port interfaces
//!
//! Contains the export operation and trait definitions
//! for external system interactions.

pub mod export;
pub mod ports;

// Re-export use cases
pub use export::{ExportError, ExportMeetingUseCase, ExportOptions, ExportOutput};
