// ABOUTME: TUI widget sub-modules for the log pane, controls row, and status bar.
// ABOUTME: Each widget is a pure function producing styled ratatui Lines.

pub mod controls;
pub mod log;
pub mod status;
