//! Storage layer for budget-saver
//!
//! Provides the CSV report file repository with durable appends and atomic
//! whole-file rewrites.

pub mod file_io;
pub mod report_file;

pub use file_io::{append_durable, write_atomic};
pub use report_file::{AppendOutcome, ReportFile};

use crate::config::{BudgetPaths, Settings};
use crate::error::BudgetError;

/// Main storage coordinator
pub struct Storage {
    paths: BudgetPaths,
    pub report: ReportFile,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: BudgetPaths, settings: &Settings) -> Result<Self, BudgetError> {
        paths.ensure_directories()?;

        Ok(Self {
            report: ReportFile::new(paths.report_file(&settings.report_file)),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &BudgetPaths {
        &self.paths
    }
}
