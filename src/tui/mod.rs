//! Terminal chart window
//!
//! Draws the monthly savings chart with ratatui on top of crossterm.

pub mod chart;
pub mod terminal;

pub use terminal::show_chart_window;
