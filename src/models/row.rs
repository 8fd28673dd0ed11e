//! Transaction rows as persisted in the report file
//!
//! One row is written per expense, or a single summary row when a session had
//! no expenses. Rows are never modified after they are written.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use super::money::Money;
use crate::error::{BudgetError, BudgetResult};

/// Date format used for the `Insertion_Date` column and for user-entered dates
pub const DATE_FORMAT: &str = "%d-%m-%Y";

/// Sentinel written in the `Expenses` column of a summary row
pub const NO_EXPENSES: &str = "No Expenses";

/// Sentinel written in the `Expenses Type` column of a summary row
pub const NO_EXPENSES_TYPE: &str = "No Expenses Type";

/// Column headers of the report file, in order
pub const REPORT_COLUMNS: [&str; 9] = [
    "Income",
    "Income Type",
    "Expenses",
    "Expenses Type",
    "Remaining Budget",
    "Insertion_Date",
    "Insertion_Month",
    "Saving",
    "Rem Budget(After Saving)",
];

/// Parse a `dd-mm-yyyy` date
pub fn parse_date(input: &str) -> BudgetResult<NaiveDate> {
    let trimmed = input.trim();
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT).map_err(|_| BudgetError::DateParse {
        input: trimmed.to_string(),
    })
}

/// Format a date as `dd-mm-yyyy`
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Full English month name of a date ("January")
pub fn month_name(date: NaiveDate) -> String {
    date.format("%B").to_string()
}

/// Content of the `Expenses` column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpenseCell {
    /// Summary row of a session without expenses
    NoExpenses,
    Amount(Money),
}

impl ExpenseCell {
    pub fn amount(&self) -> Option<Money> {
        match self {
            ExpenseCell::NoExpenses => None,
            ExpenseCell::Amount(amount) => Some(*amount),
        }
    }
}

impl fmt::Display for ExpenseCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpenseCell::NoExpenses => f.write_str(NO_EXPENSES),
            ExpenseCell::Amount(amount) => f.write_str(&amount.to_decimal_string()),
        }
    }
}

impl Serialize for ExpenseCell {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ExpenseCell {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        if raw.trim() == NO_EXPENSES {
            return Ok(ExpenseCell::NoExpenses);
        }
        Money::parse(&raw)
            .map(ExpenseCell::Amount)
            .map_err(serde::de::Error::custom)
    }
}

mod insertion_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&date.format(super::DATE_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_date(&raw).map_err(serde::de::Error::custom)
    }
}

/// One persisted row of the report file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRow {
    #[serde(rename = "Income")]
    pub income: Money,

    #[serde(rename = "Income Type")]
    pub income_type: String,

    #[serde(rename = "Expenses")]
    pub expense: ExpenseCell,

    #[serde(rename = "Expenses Type")]
    pub expense_type: String,

    /// Budget left after this row's expense and all earlier ones of the
    /// same session, before saving
    #[serde(rename = "Remaining Budget")]
    pub remaining_budget: Money,

    #[serde(rename = "Insertion_Date", with = "insertion_date")]
    pub insertion_date: NaiveDate,

    #[serde(rename = "Insertion_Month")]
    pub insertion_month: String,

    /// Cumulative saving of the session this row belongs to
    #[serde(rename = "Saving")]
    pub saving: Money,

    #[serde(rename = "Rem Budget(After Saving)")]
    pub remaining_after_saving: Money,
}

impl TransactionRow {
    pub fn is_summary(&self) -> bool {
        self.expense == ExpenseCell::NoExpenses
    }
}
