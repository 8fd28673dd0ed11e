//! Core data models for budget-saver
//!
//! This module contains the data structures of the savings domain: money
//! amounts, normalized labels, the per-session ledger and persisted rows.

pub mod label;
pub mod ledger;
pub mod money;
pub mod row;

pub use label::{Label, MAX_INCOME_TYPE_LEN};
pub use ledger::{Expense, Ledger};
pub use money::Money;
pub use row::{ExpenseCell, TransactionRow, DATE_FORMAT, NO_EXPENSES, NO_EXPENSES_TYPE, REPORT_COLUMNS};
