//! Report writer service
//!
//! Turns a finished session ledger into report rows and appends them to the
//! report file.

use chrono::NaiveDate;
use tracing::debug;

use crate::error::BudgetResult;
use crate::models::row::month_name;
use crate::models::{ExpenseCell, Ledger, TransactionRow, NO_EXPENSES_TYPE};
use crate::storage::{AppendOutcome, Storage};

/// Build the rows for one session
///
/// A session without expenses yields one summary row. Otherwise each expense
/// yields one row whose `Remaining Budget` is the budget minus the running sum
/// of expenses up to and including it. Income, income type, saving and the
/// after-saving remainder are repeated on every row.
pub fn build_rows(ledger: &Ledger, date: NaiveDate) -> Vec<TransactionRow> {
    let month = month_name(date);
    let income_type = ledger.income_type().to_string();

    let base = |expense: ExpenseCell, expense_type: String, remaining_budget| TransactionRow {
        income: ledger.budget(),
        income_type: income_type.clone(),
        expense,
        expense_type,
        remaining_budget,
        insertion_date: date,
        insertion_month: month.clone(),
        saving: ledger.saving(),
        remaining_after_saving: ledger.remaining(),
    };

    if ledger.expenses().is_empty() {
        return vec![base(
            ExpenseCell::NoExpenses,
            NO_EXPENSES_TYPE.to_string(),
            ledger.budget(),
        )];
    }

    ledger
        .running_remaining()
        .map(|(expense, left)| {
            base(
                ExpenseCell::Amount(expense.amount),
                expense.expense_type.to_string(),
                left,
            )
        })
        .collect()
}

/// Service that persists session ledgers
pub struct ReportWriter<'a> {
    storage: &'a Storage,
}

impl<'a> ReportWriter<'a> {
    /// Create a new report writer
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Append the rows of `ledger`, stamped with `date`
    pub fn write_session(&self, ledger: &Ledger, date: NaiveDate) -> BudgetResult<AppendOutcome> {
        let rows = build_rows(ledger, date);
        debug!(rows = rows.len(), income_type = %ledger.income_type(), "writing session");
        self.storage.report.append(&rows)
    }

    /// Append the rows of `ledger`, stamped with today's local date
    pub fn write_session_today(&self, ledger: &Ledger) -> BudgetResult<AppendOutcome> {
        self.write_session(ledger, chrono::Local::now().date_naive())
    }
}
