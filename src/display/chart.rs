//! Plain-text rendering of the savings chart
//!
//! Used when the chart window cannot be opened (output is not a terminal).

use crate::models::Money;
use crate::reports::SavingsChart;

use super::report::{format_bar, format_header, separator, truncate};

const BAR_WIDTH: usize = 30;
const LABEL_WIDTH: usize = 20;

/// Format the chart as one block of horizontal bars per month
pub fn format_savings_chart(chart: &SavingsChart, currency_symbol: &str) -> String {
    let width = LABEL_WIDTH + BAR_WIDTH + 18;
    let mut output = String::new();

    output.push_str(&format_header("Monthly Saving Performance", width));
    output.push('\n');
    output.push_str(&separator(width));
    output.push('\n');

    if chart.is_empty() {
        output.push_str("No savings to plot.\n");
        return output;
    }

    let max = chart.max_total().cents() as f64;

    for group in &chart.groups {
        output.push_str(&group.month);
        output.push('\n');
        for bar in &group.bars {
            output.push_str(&format!(
                "  {:<label_width$} {} {:>12}\n",
                truncate(&bar.income_type, LABEL_WIDTH),
                format_bar(bar.total.cents() as f64, max, BAR_WIDTH),
                bar.total.format_with_symbol(currency_symbol),
                label_width = LABEL_WIDTH,
            ));
        }
    }

    let total: Money = chart
        .groups
        .iter()
        .flat_map(|g| g.bars.iter().map(|b| b.total))
        .sum();
    output.push_str(&separator(width));
    output.push('\n');
    output.push_str(&format!(
        "Saving Total Amount: {}\n",
        total.format_with_symbol(currency_symbol)
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::{MonthGroup, SavingBar};

    #[test]
    fn test_empty_chart() {
        let text = format_savings_chart(&SavingsChart::default(), "$");
        assert!(text.contains("Monthly Saving Performance"));
        assert!(text.contains("No savings to plot."));
    }

    #[test]
    fn test_bars_scaled_to_largest() {
        let chart = SavingsChart {
            groups: vec![MonthGroup {
                month: "March".into(),
                bars: vec![
                    SavingBar {
                        income_type: "Salary".into(),
                        total: Money::from_cents(10000),
                    },
                    SavingBar {
                        income_type: "Gift".into(),
                        total: Money::from_cents(5000),
                    },
                ],
            }],
            income_types: vec!["Salary".into(), "Gift".into()],
        };

        let text = format_savings_chart(&chart, "€");
        let salary = text.lines().find(|l| l.contains("Salary")).unwrap();
        let gift = text.lines().find(|l| l.contains("Gift")).unwrap();

        assert_eq!(salary.matches('█').count(), BAR_WIDTH);
        assert_eq!(gift.matches('█').count(), BAR_WIDTH / 2);
        assert!(salary.contains("€100.00"));
        assert!(text.contains("Saving Total Amount: €150.00"));
    }
}
