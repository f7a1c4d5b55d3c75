//! CLI layer - Command-line interface
//!
//! Contains argument parsing, output formatting, logging setup,
//! and the command runners.

pub mod app;
pub mod args;
pub mod config_cmd;
pub mod logging;
pub mod meeting_file;
pub mod presenter;

// Re-export commonly used types
pub use app::{run_blocks, run_export, run_markdown, EXIT_ERROR, EXIT_SUCCESS, EXIT_USAGE_ERROR};
pub use args::{Cli, Commands, ConfigAction, ExportArgs, OverflowArg, RenderArgs};
pub use presenter::Presenter;
