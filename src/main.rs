//! meeting-export CLI entry point

use std::process::ExitCode;

use clap::Parser;

use meeting_export::cli::{
    app::{load_merged_config, run_blocks, run_export, run_markdown, EXIT_ERROR, EXIT_USAGE_ERROR},
    args::{Cli, Commands},
    config_cmd::handle_config_command,
    logging::init_logging,
    presenter::Presenter,
};
use meeting_export::domain::config::AppConfig;
use meeting_export::domain::meeting::DisplayZone;
use meeting_export::domain::notion::OverflowPolicy;
use meeting_export::infrastructure::XdgConfigStore;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let presenter = Presenter::new();

    init_logging(cli.verbose);

    match cli.command {
        Commands::Config { action } => {
            let store = XdgConfigStore::new();
            if let Err(e) = handle_config_command(action, &store, &presenter).await {
                presenter.error(&e.to_string());
                return ExitCode::from(EXIT_ERROR);
            }
            ExitCode::SUCCESS
        }
        Commands::Export(args) => {
            if let Some(code) = check_timezone(args.input.timezone.as_deref(), &presenter) {
                return code;
            }

            let cli_config = AppConfig {
                page_id: args.page_id.clone(),
                overflow: args
                    .overflow
                    .map(|o| OverflowPolicy::from(o).to_string()),
                timezone: args.input.timezone.clone(),
                ..Default::default()
            };
            let config = load_merged_config(cli_config).await;

            run_export(args, config).await
        }
        Commands::Markdown(args) => {
            if let Some(code) = check_timezone(args.timezone.as_deref(), &presenter) {
                return code;
            }

            let config = load_merged_config(render_config(args.timezone.clone())).await;
            run_markdown(args, config).await
        }
        Commands::Blocks(args) => {
            if let Some(code) = check_timezone(args.timezone.as_deref(), &presenter) {
                return code;
            }

            let config = load_merged_config(render_config(args.timezone.clone())).await;
            run_blocks(args, config).await
        }
    }
}

fn render_config(timezone: Option<String>) -> AppConfig {
    AppConfig {
        timezone,
        ..Default::default()
    }
}

/// Reject an unparseable --tz before doing any work
fn check_timezone(timezone: Option<&str>, presenter: &Presenter) -> Option<ExitCode> {
    let zone = timezone?;
    match zone.parse::<DisplayZone>() {
        Ok(_) => None,
        Err(e) => {
            presenter.error(&e.to_string());
            Some(ExitCode::from(EXIT_USAGE_ERROR))
        }
    }
}
