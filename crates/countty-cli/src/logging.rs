//! Opt-in file logging.
//!
//! stdout carries the clock and stderr shares the same terminal, so logs only
//! go to the file named by `COUNTTY_LOG_FILE`. `COUNTTY_LOG` takes an
//! `EnvFilter` directive and defaults to `info`.

use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;

pub const LOG_FILE_ENV: &str = "COUNTTY_LOG_FILE";
pub const LOG_FILTER_ENV: &str = "COUNTTY_LOG";

/// Installs the global subscriber if a log file is configured.
///
/// The returned guard flushes pending records when dropped; keep it alive for
/// the whole run.
///
/// # Errors
/// Returns an error if the log file cannot be created or a subscriber is
/// already installed.
pub fn init() -> Result<Option<WorkerGuard>> {
    let Some(path) = env::var_os(LOG_FILE_ENV).map(PathBuf::from) else {
        return Ok(None);
    };

    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let file_name = path
        .file_name()
        .with_context(|| format!("{LOG_FILE_ENV} has no file name: {}", path.display()))?;

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name.to_string_lossy())
        .build(dir)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!("Failed to install log subscriber: {e}"))?;

    Ok(Some(guard))
}
