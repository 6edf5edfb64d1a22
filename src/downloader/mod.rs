mod batch;
mod fetcher;

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use url::Url;

use crate::error::AppError;

pub use batch::{BatchReport, Outcome};
pub use fetcher::UReqFetcher;

#[derive(Debug)]
pub enum Response {
    Ok(Vec<u8>),
    Status(u16),
    InvalidBody,
    NetworkError(String),
}

impl Response {
    pub fn ok(body: Vec<u8>) -> Self {
        Self::Ok(body)
    }

    pub fn status(code: u16) -> Self {
        Self::Status(code)
    }

    pub fn invalid_body() -> Self {
        Self::InvalidBody
    }

    pub fn network_error(message: impl Into<String>) -> Self {
        Self::NetworkError(message.into())
    }
}

pub trait FileDownloader {
    fn fetch(&self, url: &str) -> Response;
}

pub struct Downloader<T: FileDownloader> {
    fetcher: T,
    path: PathBuf,
}

/// Why a single record could not be saved. Never aborts the batch.
#[derive(Error, Debug)]
pub enum DownloadError {
    #[error("record is missing {0}")]
    MissingField(&'static str),

    #[error("invalid url {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("HTTP status {code} for url: {url}")]
    Status { code: u16, url: String },

    #[error("network error: {0}")]
    Network(String),

    #[error("failed to read response body")]
    InvalidBody,

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, PartialEq)]
pub struct Download {
    pub source: String,
    pub file: PathBuf,
    pub size: usize,
}

impl Download {
    pub fn new(source: String, file: PathBuf, size: usize) -> Self {
        Self { source, file, size }
    }
}

impl<T> Downloader<T>
where
    T: FileDownloader,
{
    pub fn with_fetcher(path: impl AsRef<Path>, fetcher: T) -> Result<Self, AppError> {
        let path = Self::create_path(path.as_ref())?;

        Ok(Downloader { path, fetcher })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Fetches `url` and writes the body verbatim to `file_name` inside the
    /// output directory. Nothing is written unless the fetch succeeded.
    pub fn download(&self, url: &str, file_name: &str) -> Result<Download, DownloadError> {
        let url = Url::parse(url).map_err(|source| DownloadError::InvalidUrl {
            url: url.to_string(),
            source,
        })?;

        let url = url.as_str();

        let response = self.fetcher.fetch(url);

        match response {
            Response::Status(code) => Err(DownloadError::Status {
                code,
                url: url.to_string(),
            }),
            Response::NetworkError(message) => Err(DownloadError::Network(message)),
            Response::InvalidBody => Err(DownloadError::InvalidBody),

            Response::Ok(body) => {
                let file_path = self.path.join(file_name);

                fs::write(&file_path, &body).map_err(|source| DownloadError::Write {
                    path: file_path.clone(),
                    source,
                })?;

                Ok(Download::new(String::from(url), file_path, body.len()))
            }
        }
    }

    fn create_path(path: &Path) -> Result<PathBuf, AppError> {
        let absolute_path = if path.is_absolute() {
            path.to_path_buf()
        } else {
            env::current_dir()
                .map_err(|e| AppError::io(path, e))?
                .join(path)
        };

        // Fails when a non-directory already sits at the path.
        fs::create_dir_all(&absolute_path).map_err(|e| AppError::io(&absolute_path, e))?;

        Ok(absolute_path)
    }

    #[cfg(test)]
    fn fetcher(&self) -> &T {
        &self.fetcher
    }
}

impl Downloader<UReqFetcher> {
    pub fn new(path: impl AsRef<Path>) -> Result<Self, AppError> {
        Downloader::with_fetcher(path, UReqFetcher::new())
    }
}

#[cfg(test)]
use fetcher::MockFetcher;
