use std::io::Write;

use itertools::Itertools;

use super::{Download, DownloadError, Downloader, FileDownloader};
use crate::error::{AppError, Result};
use crate::record::ColorRecord;

#[derive(Debug)]
pub enum Outcome {
    Saved {
        file_name: String,
        download: Download,
    },
    Failed {
        file_name: String,
        error: DownloadError,
    },
}

impl Outcome {
    pub fn file_name(&self) -> &str {
        match self {
            Outcome::Saved { file_name, .. } | Outcome::Failed { file_name, .. } => file_name,
        }
    }

    pub fn is_saved(&self) -> bool {
        matches!(self, Outcome::Saved { .. })
    }
}

/// One outcome per input record, in input order.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub outcomes: Vec<Outcome>,
}

impl BatchReport {
    pub fn saved(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_saved()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.saved()
    }
}

impl<T> Downloader<T>
where
    T: FileDownloader,
{
    /// Downloads every record in order, giving record `i` the id `start_id + i`.
    ///
    /// A failed record is reported on `out` and the loop moves on. Only an id
    /// range that does not fit in `u64` or a failure to write to `out` ends
    /// the batch early.
    pub fn download_all<W: Write>(
        &self,
        records: &[ColorRecord],
        start_id: u64,
        out: &mut W,
    ) -> Result<BatchReport> {
        if let Some(last_offset) = records.len().checked_sub(1) {
            u64::try_from(last_offset)
                .ok()
                .and_then(|offset| start_id.checked_add(offset))
                .ok_or(AppError::IdOverflow {
                    start_id,
                    count: records.len(),
                })?;
        }

        let mut report = BatchReport::default();

        for (index, record) in records.iter().enumerate() {
            let id = start_id + index as u64;
            let file_name = record.file_name(id);

            let result = match record.missing_field() {
                Some(field) => Err(DownloadError::MissingField(field)),
                None => self.download(&record.color_image_url, &file_name),
            };

            let outcome = match result {
                Ok(download) => {
                    tracing::debug!("Saved {} ({} bytes)", download.file.display(), download.size);
                    writeln!(out, "✅ Saved: {}", file_name).map_err(AppError::Output)?;

                    Outcome::Saved {
                        file_name,
                        download,
                    }
                }
                Err(error) => {
                    tracing::debug!("Record {} failed: {:?}", id, error);
                    writeln!(out, "❌ Failed to save {}: {}", file_name, error)
                        .map_err(AppError::Output)?;

                    Outcome::Failed { file_name, error }
                }
            };

            report.outcomes.push(outcome);
        }

        if !report.outcomes.is_empty() {
            tracing::info!(
                "Batch finished: {} saved, {} failed",
                report.saved(),
                report.failed()
            );
        }

        if report.failed() > 0 {
            tracing::info!(
                "Failed files: {}",
                report
                    .outcomes
                    .iter()
                    .filter(|o| !o.is_saved())
                    .map(Outcome::file_name)
                    .join(", ")
            );
        }

        Ok(report)
    }
}
