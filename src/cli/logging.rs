//! Diagnostic logging setup

use tracing_subscriber::EnvFilter;

/// Install the stderr log subscriber.
///
/// `RUST_LOG` wins when set; otherwise only warnings are shown, or debug
/// output for this crate with `--verbose`.
pub fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("warn,meeting_export=debug")
        } else {
            EnvFilter::new("warn")
        }
    });

    // A subscriber may already be installed by an embedding application
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
