// src/logging.rs
//! File-backed tracing setup.
//!
//! The TUI owns the terminal, so diagnostics go to a log file under the
//! platform data directory instead of stdout. The filter is controlled
//! through the `BURROW_LOG` environment variable (default `info`).

use anyhow::Result;
use directories::ProjectDirs;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber. The returned guard must stay alive for
/// the process lifetime or buffered log lines are lost.
pub fn init() -> Result<WorkerGuard> {
    let log_dir = ProjectDirs::from("", "", "burrow")
        .map(|dirs| dirs.data_local_dir().to_path_buf())
        .unwrap_or_else(std::env::temp_dir);
    std::fs::create_dir_all(&log_dir)?;

    let appender = tracing_appender::rolling::never(&log_dir, "burrow.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_env("BURROW_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .init();

    Ok(guard)
}
