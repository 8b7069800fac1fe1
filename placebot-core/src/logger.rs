//! Tracing setup for the bot process: a console layer and a plain-text file layer over one env filter.

use std::fs::{File, OpenOptions};
use std::io::{self, IsTerminal};
use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{
    fmt::format::Writer, fmt::time::FormatTime, layer::SubscriberExt, util::SubscriberInitExt,
    EnvFilter, Registry,
};

/// Filter used when `RUST_LOG` is unset. HTTP client internals are only interesting when they fail.
pub const DEFAULT_LOG_FILTER: &str = "info,hyper_util=warn,reqwest=warn";

struct LocalTime;

impl FormatTime for LocalTime {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        write!(w, "{} ", chrono::Local::now().format("%Y-%m-%d %H:%M:%S"))
    }
}

/// Opens `path` for appending, creating it and any missing parent directories.
pub fn open_log_file(path: &Path) -> anyhow::Result<File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))
}

/// Installs the global subscriber.
///
/// Lines read `YYYY-MM-DD HH:MM:SS LEVEL target: message key=value ...`. The console gets colors only when
/// stdout is a terminal; the file never does. `RUST_LOG` overrides [`DEFAULT_LOG_FILTER`].
/// Fails if a global subscriber is already set.
pub fn init_tracing(log_file_path: &str) -> anyhow::Result<()> {
    let file = Arc::new(open_log_file(Path::new(log_file_path))?);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let console = tracing_subscriber::fmt::layer()
        .with_timer(LocalTime)
        .with_target(true)
        .with_ansi(io::stdout().is_terminal())
        .with_writer(io::stdout);

    let logfile = tracing_subscriber::fmt::layer()
        .with_timer(LocalTime)
        .with_target(true)
        .with_ansi(false)
        .with_writer(file);

    Registry::default()
        .with(filter)
        .with(console)
        .with(logfile)
        .try_init()
        .context("Failed to set global tracing subscriber")
}
