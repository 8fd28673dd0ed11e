//! Display formatting for terminal output
//!
//! Provides utilities for formatting report rows and savings charts for
//! terminal display.

pub mod chart;
pub mod report;
pub mod rows;

pub use chart::format_savings_chart;
pub use rows::format_rows_table;
