//! CLI argument definitions using Clap

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::domain::config::CONFIG_KEYS;
use crate::domain::notion::OverflowPolicy;

/// meeting-export - push meeting notes and transcripts to Notion
#[derive(Parser, Debug)]
#[command(name = "meeting-export")]
#[command(version)]
#[command(about = "Export meeting summaries and transcripts to an existing Notion page")]
#[command(long_about = None)]
pub struct Cli {
    /// Show debug logging on stderr
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Append a meeting to a Notion page
    Export(ExportArgs),
    /// Print the meeting as Markdown
    Markdown(RenderArgs),
    /// Print the Notion blocks the meeting converts to
    Blocks(RenderArgs),
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Arguments shared by every command that reads a meeting
#[derive(Args, Debug, Clone)]
pub struct RenderArgs {
    /// Meeting record as JSON ('-' reads stdin)
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Time zone for dates and times (local, utc, or an offset like +02:00)
    #[arg(long = "tz", value_name = "ZONE")]
    pub timezone: Option<String>,
}

/// Arguments of the export command
#[derive(Args, Debug, Clone)]
pub struct ExportArgs {
    #[command(flatten)]
    pub input: RenderArgs,

    /// Target page id (overrides NOTION_PAGE_ID and the config file)
    #[arg(short = 'p', long, value_name = "ID")]
    pub page_id: Option<String>,

    /// What to do with content beyond 100 blocks
    #[arg(long, value_name = "POLICY")]
    pub overflow: Option<OverflowArg>,

    /// Print the request bodies instead of sending them
    #[arg(long)]
    pub dry_run: bool,
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Overflow policy argument for clap ValueEnum
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OverflowArg {
    Truncate,
    Paginate,
}

impl From<OverflowArg> for OverflowPolicy {
    fn from(arg: OverflowArg) -> Self {
        match arg {
            OverflowArg::Truncate => OverflowPolicy::Truncate,
            OverflowArg::Paginate => OverflowPolicy::Paginate,
        }
    }
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = CONFIG_KEYS;

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}
