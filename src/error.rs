use std::path::PathBuf;

use thiserror::Error;
use tracing_subscriber::util::TryInitError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Terminal reads/writes failed. Never recoverable.
    #[error("terminal i/o failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not parse config file {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("event source closed before the session ended")]
    EventSourceClosed,

    #[error("log path {path} has no file name")]
    LogPath { path: PathBuf },

    #[error("could not install the log subscriber")]
    Logging(#[from] TryInitError),
}
