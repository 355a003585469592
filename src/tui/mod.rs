// ABOUTME: TUI module: ratatui full-screen interface for the elapsed logger.
// ABOUTME: Log pane, controls row, status bar, and key handling.

pub mod input;
pub mod state;
pub mod ui;
pub mod widgets;

pub use state::*;
