//! View and plot transactions within a date range

use std::io::{IsTerminal, Write};

use tracing::{debug, info, warn};

use crate::config::{ChartMode, Settings};
use crate::display::{format_rows_table, format_savings_chart};
use crate::error::BudgetResult;
use crate::models::row::format_date;
use crate::reports::{DateRange, SavingsReport};
use crate::storage::Storage;
use crate::tui::show_chart_window;

/// Where the chart ends up for a given mode
fn use_window(mode: ChartMode) -> bool {
    match mode {
        ChartMode::Window => true,
        ChartMode::Text => false,
        ChartMode::Auto => std::io::stdout().is_terminal(),
    }
}

/// Print rows between `start` and `end` and chart their savings
///
/// An empty selection prints a notice and no chart.
pub fn view_and_plot<W: Write>(
    storage: &Storage,
    settings: &Settings,
    chart_mode: ChartMode,
    start: &str,
    end: &str,
    out: &mut W,
) -> BudgetResult<()> {
    let range = DateRange::parse(start, end)?;
    let report = SavingsReport::generate(storage, range)?;

    if report.is_empty() {
        writeln!(out, "No data available for the given date range.")?;
        return Ok(());
    }

    writeln!(
        out,
        "Transactions from {} to {}",
        format_date(range.start),
        format_date(range.end)
    )?;
    writeln!(out, "{}", format_rows_table(&report.rows))?;

    let chart = report.chart();
    if use_window(chart_mode) {
        info!(months = chart.groups.len(), "opening chart window");
        out.flush()?;
        show_chart_window(&chart, &settings.currency_symbol)?;
    } else {
        debug!("printing text chart");
        writeln!(out)?;
        write!(out, "{}", format_savings_chart(&chart, &settings.currency_symbol))?;
    }

    Ok(())
}

/// Run [`view_and_plot`], reporting any failure as a single message
pub fn run_view<W: Write>(
    storage: &Storage,
    settings: &Settings,
    chart_mode: ChartMode,
    start: &str,
    end: &str,
    out: &mut W,
) -> BudgetResult<()> {
    if let Err(err) = view_and_plot(storage, settings, chart_mode, start, end, out) {
        warn!(error = %err, "view and plot failed");
        writeln!(out, "An error occurred: {}", err)?;
    }
    Ok(())
}
