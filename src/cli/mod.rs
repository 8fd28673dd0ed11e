//! Interactive command handlers
//!
//! This module contains the prompt-driven flows of the application and the
//! menu that ties them together.

pub mod collector;
pub mod menu;
pub mod prompt;
pub mod savings;
pub mod view;

pub use collector::record_session;
pub use menu::{Menu, MenuState};
pub use prompt::Prompter;
pub use savings::ask_for_savings;
pub use view::{run_view, view_and_plot};
