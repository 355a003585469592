// ABOUTME: TUI state: scroll position of the log pane and the derived control affordances.
// ABOUTME: Affordances are a pure function of the timer status, recomputed every frame.

use crate::session::{TimerCommand, TimerStatus};

/// Which commands the controls row offers right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Affordances {
    pub start: bool,
    pub pause: bool,
    pub resume: bool,
    pub clear: bool,
}

impl Affordances {
    pub fn for_status(status: TimerStatus) -> Self {
        Self {
            start: status == TimerStatus::Idle,
            pause: status == TimerStatus::Running,
            resume: status == TimerStatus::Paused,
            clear: true,
        }
    }

    pub fn allows(&self, command: TimerCommand) -> bool {
        match command {
            TimerCommand::Start => self.start,
            TimerCommand::Pause => self.pause,
            TimerCommand::Resume => self.resume,
            TimerCommand::Clear => self.clear,
        }
    }
}

/// UI-only state that the timer does not own.
#[derive(Debug, Default)]
pub struct TuiState {
    /// Lines scrolled up from the bottom of the log (0 = following the tail).
    pub scroll_offset: u16,
    /// Log length seen on the previous frame; growth snaps the view to the bottom.
    pub seen_log_lines: usize,
    /// Last storage failure, shown in the status bar until the next successful command.
    pub last_error: Option<String>,
}

impl TuiState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snap to the bottom whenever the log changed length since the last frame.
    pub fn follow_log(&mut self, log_lines: usize) {
        if log_lines != self.seen_log_lines {
            self.scroll_offset = 0;
            self.seen_log_lines = log_lines;
        }
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.scroll_offset = self.scroll_offset.saturating_add(lines);
    }

    pub fn scroll_down(&mut self, lines: u16) {
        self.scroll_offset = self.scroll_offset.saturating_sub(lines);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_offers_start_only() {
        let a = Affordances::for_status(TimerStatus::Idle);
        assert!(a.start && !a.pause && !a.resume && a.clear);
    }

    #[test]
    fn running_offers_pause_only() {
        let a = Affordances::for_status(TimerStatus::Running);
        assert!(!a.start && a.pause && !a.resume && a.clear);
    }

    #[test]
    fn paused_offers_resume_only() {
        let a = Affordances::for_status(TimerStatus::Paused);
        assert!(!a.start && !a.pause && a.resume && a.clear);
        assert!(a.allows(TimerCommand::Resume));
        assert!(!a.allows(TimerCommand::Start));
    }

    #[test]
    fn log_growth_snaps_to_bottom() {
        let mut state = TuiState::new();
        state.follow_log(5);
        state.scroll_up(3);
        state.follow_log(5);
        assert_eq!(state.scroll_offset, 3, "unchanged log keeps the scroll position");

        state.follow_log(6);
        assert_eq!(state.scroll_offset, 0);
    }

    #[test]
    fn scroll_down_stops_at_bottom() {
        let mut state = TuiState::new();
        state.scroll_up(2);
        state.scroll_down(10);
        assert_eq!(state.scroll_offset, 0);
    }
}
