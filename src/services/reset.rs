//! Sheet reset service
//!
//! Irreversibly deletes every row of the report sheet. No backup is made.

use std::io::Write;
use std::thread;
use std::time::Duration;

use tracing::warn;

use crate::error::BudgetResult;
use crate::storage::Storage;

/// Service that clears the report sheet, pacing its progress messages
pub struct SheetReset<'a> {
    storage: &'a Storage,
    pacing: Duration,
}

impl<'a> SheetReset<'a> {
    /// Create a reset service; `pacing` is the base delay between messages
    pub fn new(storage: &'a Storage, pacing: Duration) -> Self {
        Self { storage, pacing }
    }

    /// Clear the sheet, narrating progress to `out`
    ///
    /// Returns the number of rows deleted.
    pub fn run<W: Write>(&self, out: &mut W) -> BudgetResult<usize> {
        writeln!(out, "Your data from your report sheet will be deleted")?;
        out.flush()?;
        self.pause(1.0);

        writeln!(out, "Processing")?;
        out.flush()?;
        self.pause(1.1);

        let removed = self.storage.report.reset()?;
        warn!(path = %self.storage.report.path().display(), removed, "report sheet cleared");
        writeln!(out, "{} rows has been deleted successfully.", removed)?;
        out.flush()?;
        self.pause(2.0);

        writeln!(out, "Deletion has been completed.")?;
        Ok(removed)
    }

    fn pause(&self, factor: f64) {
        if !self.pacing.is_zero() {
            thread::sleep(self.pacing.mul_f64(factor));
        }
    }
}
