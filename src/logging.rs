use std::{fs, path::Path};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{util::SubscriberInitExt, EnvFilter};

use crate::error::{Error, Result};

/// Environment variable holding the log filter, e.g. `KEYRACE_LOG=debug`.
pub const LOG_ENV: &str = "KEYRACE_LOG";

const DEFAULT_FILTER: &str = "warn";

/// Sends `tracing` output to `path`; stdout belongs to the TUI.
///
/// Keep the returned guard alive for the whole run or buffered lines are lost.
pub fn init(path: &Path) -> Result<WorkerGuard> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file_name = path
        .file_name()
        .ok_or_else(|| Error::LogPath {
            path: path.to_path_buf(),
        })?;
    fs::create_dir_all(dir)?;

    let file_appender = tracing_appender::rolling::never(dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter())
        .with_writer(writer)
        .with_ansi(false)
        .finish()
        .try_init()?;

    Ok(guard)
}

fn filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}
