use std::path::PathBuf;

use thiserror::Error;

/// Errors that stop the whole batch. Per-record failures are
/// [`DownloadError`](crate::downloader::DownloadError)s and never surface here.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid record file {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Ids for {count} records starting at {start_id} exceed u64::MAX")]
    IdOverflow { start_id: u64, count: usize },

    #[error("Failed to write status line: {0}")]
    Output(#[source] std::io::Error),
}

impl AppError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
