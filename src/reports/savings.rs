//! Savings report
//!
//! Filters report rows by an inclusive insertion-date range and aggregates
//! saving totals by insertion month and income type for charting.

use chrono::NaiveDate;
use std::collections::HashMap;

use crate::error::BudgetResult;
use crate::models::row::{format_date, parse_date};
use crate::models::{Money, TransactionRow};
use crate::storage::Storage;

/// Inclusive date range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Parse two `dd-mm-yyyy` dates
    pub fn parse(start: &str, end: &str) -> BudgetResult<Self> {
        Ok(Self::new(parse_date(start)?, parse_date(end)?))
    }

    /// Whether `date` lies within the range, bounds included
    ///
    /// A range whose start is after its end contains nothing.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Saving total of one income type within one month
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavingBar {
    pub income_type: String,
    pub total: Money,
}

/// All bars of one insertion month
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGroup {
    pub month: String,
    pub bars: Vec<SavingBar>,
}

/// Chart model: x-axis months, one bar per income type, y-axis saving sum
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SavingsChart {
    pub groups: Vec<MonthGroup>,
    /// Income types in order of first appearance, for legends and colors
    pub income_types: Vec<String>,
}

impl SavingsChart {
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Largest bar total, zero for an empty chart
    pub fn max_total(&self) -> Money {
        self.groups
            .iter()
            .flat_map(|g| g.bars.iter().map(|b| b.total))
            .max()
            .unwrap_or(Money::zero())
    }

    /// Position of an income type in the legend
    pub fn income_type_index(&self, income_type: &str) -> Option<usize> {
        self.income_types.iter().position(|t| t == income_type)
    }
}

/// Rows inside a date range
#[derive(Debug, Clone)]
pub struct SavingsReport {
    pub range: DateRange,
    /// Matching rows in file order
    pub rows: Vec<TransactionRow>,
}

impl SavingsReport {
    /// Load the report file and keep the rows inside `range`
    pub fn generate(storage: &Storage, range: DateRange) -> BudgetResult<Self> {
        let rows = storage.report.load()?;
        let report = Self::from_rows(rows, range);
        tracing::debug!(
            start = %format_date(range.start),
            end = %format_date(range.end),
            matched = report.rows.len(),
            "filtered report rows"
        );
        Ok(report)
    }

    /// Keep the rows of `rows` inside `range`
    pub fn from_rows(rows: Vec<TransactionRow>, range: DateRange) -> Self {
        let rows = rows
            .into_iter()
            .filter(|row| range.contains(row.insertion_date))
            .collect();
        Self { range, rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Group rows by insertion month and income type, summing the Saving column
    ///
    /// Months are ordered by the earliest date they occur on. An empty report
    /// produces an empty chart.
    pub fn chart(&self) -> SavingsChart {
        let mut ordered: Vec<&TransactionRow> = self.rows.iter().collect();
        ordered.sort_by_key(|row| row.insertion_date);

        let mut chart = SavingsChart::default();
        let mut month_index: HashMap<&str, usize> = HashMap::new();

        for row in ordered {
            if chart.income_type_index(&row.income_type).is_none() {
                chart.income_types.push(row.income_type.clone());
            }

            let group_idx = *month_index
                .entry(row.insertion_month.as_str())
                .or_insert_with(|| {
                    chart.groups.push(MonthGroup {
                        month: row.insertion_month.clone(),
                        bars: Vec::new(),
                    });
                    chart.groups.len() - 1
                });

            let group = &mut chart.groups[group_idx];
            match group
                .bars
                .iter_mut()
                .find(|bar| bar.income_type == row.income_type)
            {
                Some(bar) => bar.total += row.saving,
                None => group.bars.push(SavingBar {
                    income_type: row.income_type.clone(),
                    total: row.saving,
                }),
            }
        }

        chart
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::row::month_name;
    use crate::models::{ExpenseCell, NO_EXPENSES_TYPE};

    fn row(day: u32, month: u32, income_type: &str, saving: i64) -> TransactionRow {
        let date = NaiveDate::from_ymd_opt(2024, month, day).unwrap();
        TransactionRow {
            income: Money::from_cents(100000),
            income_type: income_type.into(),
            expense: ExpenseCell::NoExpenses,
            expense_type: NO_EXPENSES_TYPE.into(),
            remaining_budget: Money::from_cents(100000),
            insertion_date: date,
            insertion_month: month_name(date),
            saving: Money::from_cents(saving),
            remaining_after_saving: Money::from_cents(100000 - saving),
        }
    }

    fn range(start: &str, end: &str) -> DateRange {
        DateRange::parse(start, end).unwrap()
    }

    #[test]
    fn test_range_is_inclusive() {
        let r = range("01-01-2024", "31-01-2024");
        assert!(r.contains(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()));
        assert!(r.contains(NaiveDate::from_ymd_opt(2024, 1, 31).unwrap()));
        assert!(!r.contains(NaiveDate::from_ymd_opt(2024, 2, 1).unwrap()));
    }

    #[test]
    fn test_range_parse_rejects_bad_date() {
        assert!(DateRange::parse("2024-01-01", "31-01-2024").is_err());
        assert!(DateRange::parse("01-01-2024", "32-01-2024").is_err());
    }

    #[test]
    fn test_filter_keeps_file_order() {
        let rows = vec![
            row(20, 1, "Salary", 100),
            row(5, 2, "Salary", 200),
            row(10, 1, "Gift", 300),
        ];
        let report = SavingsReport::from_rows(rows, range("01-01-2024", "31-01-2024"));

        assert_eq!(report.rows.len(), 2);
        assert_eq!(report.rows[0].insertion_date.format("%d").to_string(), "20");
        assert_eq!(report.rows[1].income_type, "Gift");
    }

    #[test]
    fn test_empty_range_yields_empty_report_and_chart() {
        let rows = vec![row(20, 1, "Salary", 100)];
        let report = SavingsReport::from_rows(rows, range("01-06-2024", "30-06-2024"));

        assert!(report.is_empty());
        let chart = report.chart();
        assert!(chart.is_empty());
        assert!(chart.max_total().is_zero());
    }

    #[test]
    fn test_reversed_range_matches_nothing() {
        let rows = vec![row(20, 1, "Salary", 100)];
        let report = SavingsReport::from_rows(rows, range("31-01-2024", "01-01-2024"));
        assert!(report.is_empty());
    }

    #[test]
    fn test_chart_groups_by_month_and_income_type() {
        let rows = vec![
            row(20, 2, "Salary", 100),
            row(3, 1, "Salary", 500),
            row(4, 1, "Gift", 250),
            row(9, 1, "Salary", 500),
            row(21, 2, "Gift", 50),
        ];
        let report = SavingsReport::from_rows(rows, range("01-01-2024", "31-12-2024"));
        let chart = report.chart();

        assert_eq!(chart.income_types, vec!["Salary", "Gift"]);
        assert_eq!(chart.groups.len(), 2);

        let january = &chart.groups[0];
        assert_eq!(january.month, "January");
        assert_eq!(
            january.bars,
            vec![
                SavingBar {
                    income_type: "Salary".into(),
                    total: Money::from_cents(1000)
                },
                SavingBar {
                    income_type: "Gift".into(),
                    total: Money::from_cents(250)
                },
            ]
        );

        let february = &chart.groups[1];
        assert_eq!(february.month, "February");
        assert_eq!(february.bars.len(), 2);
        assert_eq!(chart.max_total(), Money::from_cents(1000));
    }
}
