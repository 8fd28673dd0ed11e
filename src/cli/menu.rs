//! Interactive main menu
//!
//! States: MainMenu (initial), RecordTransaction, ViewAndPlot, ResetSheet and
//! Exit (terminal). Every non-terminal operation returns to MainMenu; an
//! invalid choice shows the menu again. Closing standard input ends the loop
//! as if Exit had been chosen.

use std::io::{BufRead, Write};
use std::thread;

use tracing::{error, info};

use crate::config::Settings;
use crate::error::BudgetResult;
use crate::services::{ReportWriter, SheetReset};
use crate::storage::Storage;

use super::collector::record_session;
use super::prompt::Prompter;
use super::view::run_view;

/// States of the top-level flow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    MainMenu,
    RecordTransaction,
    ViewAndPlot,
    ResetSheet,
    Exit,
}

impl MenuState {
    /// Map a menu answer to the state it selects
    pub fn from_choice(choice: &str) -> Option<Self> {
        match choice.trim() {
            "1" => Some(Self::RecordTransaction),
            "2" => Some(Self::ViewAndPlot),
            "3" => Some(Self::Exit),
            "4" => Some(Self::ResetSheet),
            _ => None,
        }
    }
}

/// The interactive menu loop
pub struct Menu<'a, R, W> {
    storage: &'a Storage,
    settings: &'a Settings,
    prompter: Prompter<R, W>,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(storage: &'a Storage, settings: &'a Settings, prompter: Prompter<R, W>) -> Self {
        Self {
            storage,
            settings,
            prompter,
        }
    }

    pub fn into_prompter(self) -> Prompter<R, W> {
        self.prompter
    }

    /// Run until Exit is chosen or input is closed
    pub fn run(&mut self) -> BudgetResult<()> {
        let mut state = MenuState::MainMenu;

        loop {
            let next = match self.step(state) {
                Ok(next) => next,
                Err(err) if err.is_input_closed() => {
                    info!("input closed, leaving menu");
                    return Ok(());
                }
                Err(err) => return Err(err),
            };
            if state == MenuState::Exit {
                return Ok(());
            }
            state = next;
        }
    }

    /// Perform one state and return the next
    pub fn step(&mut self, state: MenuState) -> BudgetResult<MenuState> {
        match state {
            MenuState::MainMenu => self.main_menu(),
            MenuState::RecordTransaction => {
                self.record_transaction()?;
                Ok(MenuState::MainMenu)
            }
            MenuState::ViewAndPlot => {
                self.view_and_plot()?;
                Ok(MenuState::MainMenu)
            }
            MenuState::ResetSheet => {
                self.reset_sheet()?;
                Ok(MenuState::MainMenu)
            }
            MenuState::Exit => {
                self.exit()?;
                Ok(MenuState::Exit)
            }
        }
    }

    fn main_menu(&mut self) -> BudgetResult<MenuState> {
        let p = &mut self.prompter;
        p.say("")?;
        p.say("1. Add a new transaction")?;
        p.say("2. View transactions and plot within a given date range")?;
        p.say("3. Exit")?;
        p.say("4. Clear the report sheet")?;
        let choice = p.ask("Enter your choice (1 - 4): ")?;

        match MenuState::from_choice(&choice) {
            Some(next) => Ok(next),
            None => {
                p.say("Invalid choice.")?;
                Ok(MenuState::MainMenu)
            }
        }
    }

    fn record_transaction(&mut self) -> BudgetResult<()> {
        let ledger = record_session(&mut self.prompter)?;

        match ReportWriter::new(self.storage).write_session_today(&ledger) {
            Ok(outcome) => {
                info!(rows = outcome.appended, created = outcome.created, "session recorded");
                self.prompter.say(format!(
                    "Data has been successfully exported to '{}'.",
                    self.storage.report.path().display()
                ))?;
            }
            Err(err) => {
                error!(error = %err, "failed to write session");
                self.prompter.say(format!("An error occurred: {}", err))?;
            }
        }

        self.prompter.say(format!(
            "Your remaining budget after calculating expenses is : {}",
            ledger.remaining_before_saving().to_decimal_string()
        ))
    }

    fn view_and_plot(&mut self) -> BudgetResult<()> {
        let start = self.prompter.ask("Enter the start date (dd-mm-yyyy): ")?;
        let end = self.prompter.ask("Enter the end date (dd-mm-yyyy): ")?;
        run_view(
            self.storage,
            self.settings,
            self.settings.chart,
            &start,
            &end,
            self.prompter.output(),
        )
    }

    fn reset_sheet(&mut self) -> BudgetResult<()> {
        let reset = SheetReset::new(self.storage, self.settings.pacing());
        if let Err(err) = reset.run(self.prompter.output()) {
            error!(error = %err, "sheet reset failed");
            self.prompter.say(format!("An error occurred: {}", err))?;
        }
        Ok(())
    }

    fn exit(&mut self) -> BudgetResult<()> {
        self.prompter.say("Exiting..")?;
        thread::sleep(self.settings.pacing());
        self.prompter.say("Exited.")
    }
}
