//! meeting-export - Push meeting notes to Notion
//!
//! This crate renders a meeting record (title, date, transcript, optional
//! structured summary) as Markdown, converts the Markdown into Notion blocks,
//! and appends the blocks to an existing Notion page.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Meeting record, Markdown formatter, Notion block model, errors
//! - **Application**: The export use case and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (reqwest, Notion API, comrak, config file)
//! - **CLI**: Command-line interface, argument parsing, and logging setup

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
