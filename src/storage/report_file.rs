//! Report file repository
//!
//! The report file is a CSV sheet with the columns listed in
//! [`REPORT_COLUMNS`]. New rows are only ever appended; earlier rows are never
//! rewritten. The only destructive operation is [`ReportFile::reset`].

use std::fs::File;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::file_io::{append_durable, ends_with_newline, is_missing_or_empty, write_atomic};
use crate::error::{BudgetError, BudgetResult};
use crate::models::{TransactionRow, REPORT_COLUMNS};

/// Outcome of appending a batch of rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppendOutcome {
    /// Whether the file was created (or was empty) before this append
    pub created: bool,
    /// Number of rows appended
    pub appended: usize,
}

/// Repository for the persisted report sheet
#[derive(Debug, Clone)]
pub struct ReportFile {
    path: PathBuf,
}

impl ReportFile {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Load every row in insertion order
    ///
    /// A missing or empty file holds no rows.
    pub fn load(&self) -> BudgetResult<Vec<TransactionRow>> {
        if is_missing_or_empty(&self.path) {
            return Ok(Vec::new());
        }

        let mut reader = self.open_reader()?;
        check_header(&mut reader, &self.path)?;

        let mut rows = Vec::new();
        for (index, record) in reader.deserialize::<TransactionRow>().enumerate() {
            let row = record.map_err(|e| {
                BudgetError::Csv(format!(
                    "Failed to parse row {} of {}: {}",
                    index + 1,
                    self.path.display(),
                    e
                ))
            })?;
            rows.push(row);
        }

        debug!(path = %self.path.display(), rows = rows.len(), "loaded report rows");
        Ok(rows)
    }

    /// Number of data rows currently stored, without interpreting them
    pub fn row_count(&self) -> BudgetResult<usize> {
        if is_missing_or_empty(&self.path) {
            return Ok(0);
        }
        let mut reader = self.open_reader()?;
        let mut count = 0;
        for record in reader.records() {
            record?;
            count += 1;
        }
        Ok(count)
    }

    /// Append rows after any existing ones
    ///
    /// The header is written first when the file is missing or empty. A file
    /// with a different header is left untouched and reported as an error.
    pub fn append(&self, rows: &[TransactionRow]) -> BudgetResult<AppendOutcome> {
        let created = is_missing_or_empty(&self.path);

        let mut buffer = Vec::new();
        if !created {
            let mut reader = self.open_reader()?;
            check_header(&mut reader, &self.path)?;
            if !ends_with_newline(&self.path)? {
                buffer.push(b'\n');
            }
        }

        if rows.is_empty() {
            return Ok(AppendOutcome {
                created: false,
                appended: 0,
            });
        }

        {
            let mut writer = csv::WriterBuilder::new()
                .has_headers(created)
                .from_writer(&mut buffer);
            for row in rows {
                writer.serialize(row)?;
            }
            writer.flush()?;
        }

        append_durable(&self.path, &buffer)?;

        if created {
            info!(path = %self.path.display(), "created report file");
        }
        info!(path = %self.path.display(), rows = rows.len(), "appended report rows");

        Ok(AppendOutcome {
            created,
            appended: rows.len(),
        })
    }

    /// Delete every data row, keeping only the header
    ///
    /// Returns the number of rows removed. A missing file removes nothing.
    pub fn reset(&self) -> BudgetResult<usize> {
        if !self.exists() {
            return Ok(0);
        }

        let removed = self.row_count()?;

        let mut buffer = Vec::new();
        {
            let mut writer = csv::Writer::from_writer(&mut buffer);
            writer.write_record(REPORT_COLUMNS)?;
            writer.flush()?;
        }
        write_atomic(&self.path, &buffer)?;

        info!(path = %self.path.display(), removed, "reset report sheet");
        Ok(removed)
    }

    fn open_reader(&self) -> BudgetResult<csv::Reader<File>> {
        let file = File::open(&self.path).map_err(|e| {
            BudgetError::Storage(format!("Failed to open {}: {}", self.path.display(), e))
        })?;
        Ok(csv::ReaderBuilder::new().has_headers(true).from_reader(file))
    }
}

fn check_header(reader: &mut csv::Reader<File>, path: &Path) -> BudgetResult<()> {
    let headers = reader.headers()?;
    let matches = headers.len() == REPORT_COLUMNS.len()
        && headers
            .iter()
            .zip(REPORT_COLUMNS.iter())
            .all(|(found, expected)| found.trim() == *expected);

    if matches {
        Ok(())
    } else {
        Err(BudgetError::Storage(format!(
            "{} does not look like a budget report (columns: {})",
            path.display(),
            headers.iter().collect::<Vec<_>>().join(", ")
        )))
    }
}
