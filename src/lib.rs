//! budget-saver - Terminal income, expense and savings tracker
//!
//! Records one budget session at a time (income, expenses and an optional
//! saving), appends it as rows to a spreadsheet-compatible CSV report, and
//! charts monthly savings by income type for any date range.
//!
//! # Architecture
//!
//! - `config`: Data directory and user settings
//! - `error`: Custom error types
//! - `models`: Money, labels, the session ledger and persisted rows
//! - `storage`: CSV report file with durable appends and atomic reset
//! - `services`: Row building, report writing and sheet reset
//! - `reports`: Date-range filtering and savings aggregation
//! - `display`: Table and text-chart formatting
//! - `tui`: Chart window
//! - `cli`: Prompts and the interactive menu
//!
//! # Example
//!
//! ```rust,ignore
//! use budget_saver::config::{BudgetPaths, Settings};
//! use budget_saver::storage::Storage;
//!
//! let paths = BudgetPaths::resolve(None);
//! let settings = Settings::load_or_create(&paths)?;
//! let storage = Storage::new(paths, &settings)?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;
pub mod tui;

pub use error::{BudgetError, BudgetResult};
