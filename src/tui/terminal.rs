//! Terminal setup and teardown for the chart window
//!
//! The window takes over the terminal (raw mode, alternate screen) until a key
//! is pressed. The terminal is restored when the guard is dropped, including
//! on early returns and panics.

use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};

use crate::error::{BudgetError, BudgetResult};
use crate::reports::SavingsChart;

use super::chart;

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Restores the terminal when dropped
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

fn chart_error(err: io::Error) -> BudgetError {
    BudgetError::Chart(err.to_string())
}

/// Initialize the terminal for the chart window
fn init_terminal() -> BudgetResult<(Tui, TerminalGuard)> {
    enable_raw_mode().map_err(chart_error)?;
    let guard = TerminalGuard;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).map_err(chart_error)?;

    let terminal = Terminal::new(CrosstermBackend::new(stdout)).map_err(chart_error)?;
    Ok((terminal, guard))
}

/// Show the chart until any key is pressed
pub fn show_chart_window(savings: &SavingsChart, currency_symbol: &str) -> BudgetResult<()> {
    let (mut terminal, _guard) = init_terminal()?;

    loop {
        terminal
            .draw(|frame| chart::render(frame, savings, currency_symbol))
            .map_err(chart_error)?;

        match event::read().map_err(chart_error)? {
            Event::Key(key) if key.kind == KeyEventKind::Press => break,
            _ => {}
        }
    }

    Ok(())
}
