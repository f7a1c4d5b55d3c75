//! Domain layer - Core business logic
//!
//! Contains the meeting record, the Markdown formatter, the Notion block
//! model, and domain errors. This layer has no dependencies on external
//! systems.

pub mod config;
pub mod error;
pub mod meeting;
pub mod notion;

// Re-export common types
pub use config::AppConfig;
pub use error::*;
pub use meeting::{format_meeting, DateDisplay, DisplayZone, MeetingRecord, RemoteTargetConfig};
pub use notion::{BatchPlan, Block, OverflowPolicy, RichText};
