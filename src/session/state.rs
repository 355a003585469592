// ABOUTME: Session state: the flags, instants, and counters of one logging session.
// ABOUTME: Status is derived from the flags; elapsed time subtracts all paused time.

use crate::clock::{Timestamp, millis_between};

/// Coarse state of the session, derived from `logging` and `paused`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerStatus {
    Idle,
    Running,
    Paused,
}

impl TimerStatus {
    pub fn label(self) -> &'static str {
        match self {
            TimerStatus::Idle => "idle",
            TimerStatus::Running => "running",
            TimerStatus::Paused => "paused",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    pub logging: bool,
    pub paused: bool,
    pub start_time: Option<Timestamp>,
    /// Set iff `paused`.
    pub pause_start: Option<Timestamp>,
    /// Sum of all completed pauses, in milliseconds.
    pub total_pause_ms: u64,
    /// Highest whole elapsed minute already written to the log.
    pub last_logged_minute: u64,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> TimerStatus {
        match (self.logging, self.paused) {
            (false, _) => TimerStatus::Idle,
            (true, false) => TimerStatus::Running,
            (true, true) => TimerStatus::Paused,
        }
    }

    /// Active time at `now`: wall time since start minus every pause, including
    /// one still in progress. `None` when no session has started.
    pub fn elapsed_ms(&self, now: Timestamp) -> Option<u64> {
        let start = self.start_time?;
        let ongoing_pause = match (self.paused, self.pause_start) {
            (true, Some(pause_start)) => millis_between(pause_start, now),
            _ => 0,
        };
        Some(
            millis_between(start, now)
                .saturating_sub(self.total_pause_ms)
                .saturating_sub(ongoing_pause),
        )
    }

    /// Reset everything and begin a fresh running session at `now`.
    pub fn begin(&mut self, now: Timestamp) {
        *self = Self {
            logging: true,
            paused: false,
            start_time: Some(now),
            pause_start: None,
            total_pause_ms: 0,
            last_logged_minute: 0,
        };
    }

    pub fn pause_at(&mut self, now: Timestamp) {
        self.paused = true;
        self.pause_start = Some(now);
    }

    /// Fold the current pause into `total_pause_ms`. Returns the pause length.
    pub fn resume_at(&mut self, now: Timestamp) -> u64 {
        let paused_for = self
            .pause_start
            .take()
            .map(|pause_start| millis_between(pause_start, now))
            .unwrap_or(0);
        self.total_pause_ms = self.total_pause_ms.saturating_add(paused_for);
        self.paused = false;
        paused_for
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
