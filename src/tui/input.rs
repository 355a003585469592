// ABOUTME: Keyboard input handling for the TUI: translates key events into timer commands.
// ABOUTME: Commands whose affordance is disabled are swallowed; scrolling keys move the log pane.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::session::TimerCommand;
use crate::tui::state::{Affordances, TuiState};

const PAGE_SCROLL: u16 = 10;

/// The result of processing a key event.
#[derive(Debug, PartialEq)]
pub enum InputResult {
    /// No action needed.
    None,
    /// Run a timer command.
    Command(TimerCommand),
    /// User wants to quit.
    Quit,
}

/// Process a key event against the current affordances and return the resulting action.
pub fn handle_key(state: &mut TuiState, affordances: Affordances, key: KeyEvent) -> InputResult {
    // Ctrl+C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return InputResult::Quit;
    }

    let command = match key.code {
        KeyCode::Char('s') => TimerCommand::Start,
        KeyCode::Char('p') => TimerCommand::Pause,
        KeyCode::Char('r') => TimerCommand::Resume,
        KeyCode::Char('c') => TimerCommand::Clear,
        KeyCode::Char('q') | KeyCode::Esc => return InputResult::Quit,
        KeyCode::PageUp => {
            state.scroll_up(PAGE_SCROLL);
            return InputResult::None;
        }
        KeyCode::PageDown => {
            state.scroll_down(PAGE_SCROLL);
            return InputResult::None;
        }
        KeyCode::Up => {
            state.scroll_up(1);
            return InputResult::None;
        }
        KeyCode::Down => {
            state.scroll_down(1);
            return InputResult::None;
        }
        KeyCode::End => {
            state.scroll_offset = 0;
            return InputResult::None;
        }
        _ => return InputResult::None,
    };

    if affordances.allows(command) {
        InputResult::Command(command)
    } else {
        InputResult::None
    }
}
