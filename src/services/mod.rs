//! Service layer for budget-saver
//!
//! Business logic sitting between the prompts and the report file.

pub mod report_writer;
pub mod reset;

pub use report_writer::{build_rows, ReportWriter};
pub use reset::SheetReset;
