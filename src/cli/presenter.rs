//! CLI presenter for output formatting

use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;

use crate::application::ExportOutput;

/// Presenter for CLI output formatting
#[derive(Default)]
pub struct Presenter {
    spinner: Option<ProgressBar>,
}

impl Presenter {
    /// Create a new presenter
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a spinner with message
    pub fn start_spinner(&mut self, message: &str) {
        let style = ProgressStyle::default_spinner()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
            .template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(style);
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(std::time::Duration::from_millis(80));
        self.spinner = Some(spinner);
    }

    /// Mark spinner as success and finish
    pub fn spinner_success(&mut self, message: &str) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_with_message(format!("{} {}", "✓".green(), message));
        }
    }

    /// Mark spinner as failed and finish
    pub fn spinner_fail(&mut self, message: &str) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_with_message(format!("{} {}", "✗".red(), message));
        }
    }

    /// Print info message to stderr
    pub fn info(&self, message: &str) {
        eprintln!("{} {}", "ℹ".cyan(), message);
    }

    /// Print success message to stderr
    pub fn success(&self, message: &str) {
        eprintln!("{} {}", "✓".green(), message);
    }

    /// Print warning message to stderr
    pub fn warn(&self, message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    /// Print error message to stderr
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Output text to stdout (URLs, Markdown)
    pub fn output(&self, text: &str) {
        println!("{}", text);
    }

    /// Pretty-print a value as JSON on stdout
    pub fn json<T: Serialize + ?Sized>(&self, value: &T) -> Result<(), serde_json::Error> {
        let text = serde_json::to_string_pretty(value)?;
        self.output(&text);
        Ok(())
    }

    /// Report a finished export: counts on stderr, page URL on stdout
    pub fn exported(&mut self, output: &ExportOutput) {
        self.spinner_success(&format!(
            "Appended {} blocks in {} request(s)",
            output.blocks_sent, output.requests
        ));
        if output.blocks_dropped > 0 {
            self.warn(&format!(
                "{} blocks beyond the 100-block limit were not exported (use --overflow paginate to send them)",
                output.blocks_dropped
            ));
        }
        self.output(&output.page_url);
    }

    /// Print a key-value pair (for config list)
    pub fn key_value(&self, key: &str, value: &str) {
        println!("{}: {}", key.cyan(), value);
    }
}
