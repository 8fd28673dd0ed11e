//! Reports module for budget-saver
//!
//! Provides the date-range savings report behind the view-and-plot operation.

pub mod savings;

pub use savings::{DateRange, MonthGroup, SavingBar, SavingsChart, SavingsReport};
