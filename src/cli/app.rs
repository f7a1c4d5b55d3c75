//! Command runners

use std::env;
use std::process::ExitCode;

use tracing::warn;

use crate::application::ports::{BlockConverter, ConfigStore, TransportError};
use crate::application::{ExportMeetingUseCase, ExportOptions};
use crate::domain::config::AppConfig;
use crate::domain::meeting::{format_meeting, MeetingRecord, RemoteTargetConfig};
use crate::infrastructure::{
    MarkdownBlockConverter, NotionPageWriter, ReqwestHttpClient, XdgConfigStore,
};

use super::args::{ExportArgs, RenderArgs};
use super::meeting_file::load_meeting;
use super::presenter::Presenter;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Environment variable holding the Notion integration token
pub const API_KEY_ENV: &str = "NOTION_API_KEY";

/// Environment variable holding the target page id
pub const PAGE_ID_ENV: &str = "NOTION_PAGE_ID";

/// Export use case wired to the production adapters
pub type NotionExporter =
    ExportMeetingUseCase<MarkdownBlockConverter, NotionPageWriter<ReqwestHttpClient>>;

/// Run the export command
pub async fn run_export(args: ExportArgs, config: AppConfig) -> ExitCode {
    let mut presenter = Presenter::new();

    let meeting = match load_meeting(&args.input.file).await {
        Ok(meeting) => meeting,
        Err(e) => {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let exporter = match build_exporter(&config) {
        Ok(exporter) => exporter,
        Err(e) => {
            presenter.error(&format!("Failed to create HTTP client: {}", e));
            return ExitCode::from(EXIT_ERROR);
        }
    };

    if args.dry_run {
        return print_dry_run(&exporter, &meeting, &presenter);
    }

    let target = match remote_target(&config) {
        Ok(target) => target,
        Err(message) => {
            presenter.error(&message);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    presenter.start_spinner("Exporting to Notion...");

    match exporter.execute(&meeting, &target).await {
        Ok(output) => {
            presenter.exported(&output);
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            presenter.spinner_fail("Export failed");
            presenter.error(&e.to_string());
            ExitCode::from(EXIT_ERROR)
        }
    }
}

fn print_dry_run(exporter: &NotionExporter, meeting: &MeetingRecord, presenter: &Presenter) -> ExitCode {
    let plan = match exporter.plan(meeting) {
        Ok(plan) => plan,
        Err(e) => {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
    };

    for batch in plan.batches() {
        if let Err(e) = presenter.json(&serde_json::json!({ "children": batch })) {
            presenter.error(&format!("Failed to encode request body: {}", e));
            return ExitCode::from(EXIT_ERROR);
        }
    }

    presenter.info(&format!(
        "Dry run: {} request(s), {} blocks, {} dropped",
        plan.batches().len(),
        plan.total_blocks(),
        plan.dropped()
    ));
    ExitCode::from(EXIT_SUCCESS)
}

/// Run the markdown command
pub async fn run_markdown(args: RenderArgs, config: AppConfig) -> ExitCode {
    let presenter = Presenter::new();

    match load_meeting(&args.file).await {
        Ok(meeting) => {
            let markdown = format_meeting(&meeting, &config.date_display());
            presenter.output(markdown.trim_end());
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            presenter.error(&e.to_string());
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Run the blocks command
pub async fn run_blocks(args: RenderArgs, config: AppConfig) -> ExitCode {
    let presenter = Presenter::new();

    let meeting = match load_meeting(&args.file).await {
        Ok(meeting) => meeting,
        Err(e) => {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let markdown = format_meeting(&meeting, &config.date_display());
    let blocks = match MarkdownBlockConverter::new().convert(&markdown) {
        Ok(blocks) => blocks,
        Err(e) => {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
    };

    match presenter.json(&blocks) {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(e) => {
            presenter.error(&format!("Failed to encode blocks: {}", e));
            ExitCode::from(EXIT_ERROR)
        }
    }
}

fn export_options(config: &AppConfig) -> ExportOptions {
    ExportOptions {
        display: config.date_display(),
        overflow: config.overflow_or_default(),
    }
}

/// Wire the export use case to the production adapters
pub fn build_exporter(config: &AppConfig) -> Result<NotionExporter, TransportError> {
    let http = ReqwestHttpClient::with_timeout(config.timeout_or_default())?;
    let writer = NotionPageWriter::with_base_url(http, config.api_base_url_or_default());

    Ok(ExportMeetingUseCase::new(
        MarkdownBlockConverter::new(),
        writer,
        export_options(config),
    ))
}

/// Build the export target from merged configuration
pub fn remote_target(config: &AppConfig) -> Result<RemoteTargetConfig, String> {
    let api_key = config
        .api_key
        .as_deref()
        .filter(|s| !s.trim().is_empty())
        .ok_or_else(|| {
            format!(
                "Missing Notion API key. Set {} or run 'meeting-export config set api_key <key>'",
                API_KEY_ENV
            )
        })?;

    let page_id = config
        .page_id
        .as_deref()
        .filter(|s| !s.trim().is_empty())
        .ok_or_else(|| {
            format!(
                "Missing Notion page id. Pass --page-id, set {}, or run 'meeting-export config set page_id <id>'",
                PAGE_ID_ENV
            )
        })?;

    Ok(RemoteTargetConfig::new(api_key, page_id.trim()))
}

/// Load and merge configuration from file, env, and CLI
pub async fn load_merged_config(cli_config: AppConfig) -> AppConfig {
    let store = XdgConfigStore::new();
    let file_config = match store.load().await {
        Ok(config) => config,
        Err(e) => {
            warn!(path = %store.path().display(), error = %e, "Ignoring unreadable config file");
            AppConfig::empty()
        }
    };

    let env_config = AppConfig {
        api_key: env::var(API_KEY_ENV).ok().filter(|s| !s.is_empty()),
        page_id: env::var(PAGE_ID_ENV).ok().filter(|s| !s.is_empty()),
        ..Default::default()
    };

    // Merge: defaults < file < env < cli
    AppConfig::defaults()
        .merge(file_config)
        .merge(env_config)
        .merge(cli_config)
}
