pub mod config;
pub mod downloader;
pub mod error;
pub mod logging;
pub mod record;

use std::io::Write;

pub use config::Config;
pub use downloader::{
    BatchReport, Download, DownloadError, Downloader, FileDownloader, Outcome, Response,
    UReqFetcher,
};
pub use error::{AppError, Result};
pub use record::ColorRecord;

/// Loads the records named by `config`, prepares the output directory and
/// downloads every record, writing one status line per record to `out`.
pub fn run<T, W>(config: &Config, fetcher: T, out: &mut W) -> Result<BatchReport>
where
    T: FileDownloader,
    W: Write,
{
    let records = record::load_records(&config.input_path)?;

    tracing::info!(
        "Loaded {} records from {}",
        records.len(),
        config.input_path.display()
    );

    let downloader = Downloader::with_fetcher(&config.output_dir, fetcher)?;

    downloader.download_all(&records, config.start_id, out)
}
