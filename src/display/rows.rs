//! Transaction row display formatting
//!
//! Renders report rows as a terminal table with the report file's column names.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::row::format_date;
use crate::models::TransactionRow;

#[derive(Tabled)]
struct RowView {
    #[tabled(rename = "Income")]
    income: String,
    #[tabled(rename = "Income Type")]
    income_type: String,
    #[tabled(rename = "Expenses")]
    expense: String,
    #[tabled(rename = "Expenses Type")]
    expense_type: String,
    #[tabled(rename = "Remaining Budget")]
    remaining_budget: String,
    #[tabled(rename = "Insertion_Date")]
    insertion_date: String,
    #[tabled(rename = "Insertion_Month")]
    insertion_month: String,
    #[tabled(rename = "Saving")]
    saving: String,
    #[tabled(rename = "Rem Budget(After Saving)")]
    remaining_after_saving: String,
}

impl From<&TransactionRow> for RowView {
    fn from(row: &TransactionRow) -> Self {
        Self {
            income: row.income.to_decimal_string(),
            income_type: row.income_type.clone(),
            expense: row.expense.to_string(),
            expense_type: row.expense_type.clone(),
            remaining_budget: row.remaining_budget.to_decimal_string(),
            insertion_date: format_date(row.insertion_date),
            insertion_month: row.insertion_month.clone(),
            saving: row.saving.to_decimal_string(),
            remaining_after_saving: row.remaining_after_saving.to_decimal_string(),
        }
    }
}

/// Format rows as a table
pub fn format_rows_table(rows: &[TransactionRow]) -> String {
    if rows.is_empty() {
        return "No transactions found.".to_string();
    }

    let views: Vec<RowView> = rows.iter().map(RowView::from).collect();
    Table::new(views).with(Style::psql()).to_string()
}
