//! Logging setup for the command line front end.
//!
//! Human output goes to stdout, logs go to stderr. `RUST_LOG` takes
//! precedence; otherwise `-v` or `DEBUG_LOGGING=1` enables debug output for
//! slipreel crates.

use std::path::Path;

use tracing_subscriber::{
    EnvFilter,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

const DEBUG_DIRECTIVE: &str = "warn,slipreel_core=debug,slipreel_cli=debug";
const DEFAULT_DIRECTIVE: &str = "warn";

/// Initialize logging to stderr, plus `log_file` when given.
///
/// Returns a `WorkerGuard` for the file writer that must be held until exit
/// so buffered lines get flushed.
pub fn init(verbose: bool, log_file: Option<&Path>) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let debug_logging = verbose || std::env::var("DEBUG_LOGGING").is_ok();
    let directive = if debug_logging {
        DEBUG_DIRECTIVE
    } else {
        DEFAULT_DIRECTIVE
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_span_events(FmtSpan::NONE);

    let (file_layer, guard) = match log_file.and_then(open_log_file) {
        Some(file) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(file);
            let layer = fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(file_layer)
        .with(filter)
        .init();

    tracing::debug!(debug_logging, log_file = ?log_file, "Logging initialized");
    guard
}

fn open_log_file(path: &Path) -> Option<std::fs::File> {
    match std::fs::OpenOptions::new().create(true).append(true).open(path) {
        Ok(file) => Some(file),
        Err(e) => {
            // Subscriber is not up yet
            eprintln!("Failed to open log file {}: {e}, logging to stderr only", path.display());
            None
        }
    }
}
