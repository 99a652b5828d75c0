//! Log file setup
//!
//! The console owns stdout, so log records go to a daily file instead.
//! Libraries log through the `log` facade; `tracing-log` forwards those
//! records into the subscriber installed here.

use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub const LOG_FILE_PREFIX: &str = "people-manager.log";

/// `<local data dir>/people-manager/logs`, or the temp dir when there is none
pub fn default_log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("people-manager")
        .join("logs")
}

/// Install the global subscriber.
///
/// `RUST_LOG` wins over `default_level`. Keep the returned guard alive for
/// the whole session; dropping it flushes buffered records.
pub fn init_logging(log_dir: &Path, default_level: &str) -> Result<WorkerGuard> {
    std::fs::create_dir_all(log_dir)?;

    let appender = tracing_appender::rolling::daily(log_dir, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(default_level))?;

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(writer).with_ansi(false))
        .with(filter)
        .try_init()?;

    Ok(guard)
}
