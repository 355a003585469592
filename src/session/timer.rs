// ABOUTME: SessionTimer: the state machine behind start/pause/resume/clear and the periodic tick.
// ABOUTME: Owns session state, the log buffer, and the store; persists after every mutation.

use serde::Deserialize;

use crate::clock::{Clock, Timestamp, local_date_time, local_time};
use crate::format::format_elapsed;
use crate::session::log::LogBuffer;
use crate::session::persistence::{Snapshot, StorageKeys};
use crate::session::state::{SessionState, TimerStatus};
use crate::store::{KeyValueStore, StorageError};

const MINUTE_MS: u64 = 60_000;

pub const STATUS_READY: &str = "Ready to start logging.";
pub const STATUS_LOADED: &str = "Previous log loaded.";

/// How a tick handles several minute boundaries crossed since the last tick
/// (for example after the host slept, or after a restore).
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CatchUp {
    /// Write one line for every missed boundary.
    #[default]
    Drain,
    /// Write at most one line per tick.
    Step,
}

/// A user-facing command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerCommand {
    Start,
    Pause,
    Resume,
    Clear,
}

#[derive(Debug, Clone)]
pub struct TimerOptions {
    pub catch_up: CatchUp,
    pub keys: StorageKeys,
}

impl Default for TimerOptions {
    fn default() -> Self {
        Self {
            catch_up: CatchUp::Drain,
            keys: StorageKeys::default(),
        }
    }
}

/// Borrowed view of everything the UI draws.
#[derive(Debug, Clone, Copy)]
pub struct TimerView<'a> {
    pub status: TimerStatus,
    pub log: &'a str,
    pub message: &'a str,
    pub elapsed_ms: Option<u64>,
}

pub struct SessionTimer<S, C> {
    state: SessionState,
    log: LogBuffer,
    message: String,
    /// Whether the host should keep delivering periodic ticks.
    ticking: bool,
    catch_up: CatchUp,
    keys: StorageKeys,
    store: S,
    clock: C,
}

impl<S: KeyValueStore, C: Clock> SessionTimer<S, C> {
    /// An idle timer. Call `restore` or `restore_from_store` to pick up a previous session.
    pub fn new(store: S, clock: C, options: TimerOptions) -> Self {
        Self {
            state: SessionState::new(),
            log: LogBuffer::new(),
            message: STATUS_READY.to_string(),
            ticking: false,
            catch_up: options.catch_up,
            keys: options.keys,
            store,
            clock,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn status(&self) -> TimerStatus {
        self.state.status()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn log(&self) -> &LogBuffer {
        &self.log
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn is_ticking(&self) -> bool {
        self.ticking
    }

    pub fn elapsed_ms(&self) -> Option<u64> {
        self.state.elapsed_ms(self.clock.now())
    }

    pub fn view(&self) -> TimerView<'_> {
        TimerView {
            status: self.status(),
            log: self.log.text(),
            message: &self.message,
            elapsed_ms: self.elapsed_ms(),
        }
    }

    pub fn execute(&mut self, command: TimerCommand) -> Result<(), StorageError> {
        match command {
            TimerCommand::Start => self.start(),
            TimerCommand::Pause => self.pause(),
            TimerCommand::Resume => self.resume(),
            TimerCommand::Clear => self.clear(),
        }
    }

    pub fn start(&mut self) -> Result<(), StorageError> {
        if self.state.logging {
            return Ok(());
        }
        let now = self.clock.now();
        self.state.begin(now);
        self.log.append(&format!(
            "=== Session started at {} ===",
            local_date_time(now)
        ));
        self.advance(now);
        self.ticking = true;
        self.message = "Logging started.".to_string();
        log::info!("session started");
        self.persist()
    }

    pub fn pause(&mut self) -> Result<(), StorageError> {
        if self.status() != TimerStatus::Running {
            return Ok(());
        }
        let now = self.clock.now();
        self.state.pause_at(now);
        self.log
            .append(&format!("=== Paused at {} ===", local_time(now)));
        self.message = "Logging paused.".to_string();
        log::info!("session paused");
        self.persist()
    }

    pub fn resume(&mut self) -> Result<(), StorageError> {
        if self.status() != TimerStatus::Paused {
            return Ok(());
        }
        let now = self.clock.now();
        let paused_for = self.state.resume_at(now);
        self.log
            .append(&format!("=== Resumed at {} ===", local_time(now)));
        self.advance(now);
        self.ticking = true;
        self.message = "Logging resumed.".to_string();
        log::info!("session resumed after {} ms paused", paused_for);
        self.persist()
    }

    /// Drop the session, the log, and every stored key. The in-memory reset
    /// always happens, even when the store cannot be updated.
    pub fn clear(&mut self) -> Result<(), StorageError> {
        self.ticking = false;
        self.state.reset();
        self.log.clear();
        self.message = "Log cleared. Ready to start logging.".to_string();
        log::info!("session cleared");

        let removals = self.keys.all().into_iter().map(|key| (key, None)).collect();
        self.store.apply(removals)
    }

    /// Periodic update. Writes minute lines while running; persists only if a line was written.
    pub fn tick(&mut self) -> Result<(), StorageError> {
        let now = self.clock.now();
        if self.advance(now) > 0 {
            self.persist()?;
        }
        Ok(())
    }

    /// Replace the in-memory session with a previously persisted one.
    pub fn restore(&mut self, snapshot: Snapshot) {
        let now = self.clock.now();

        match snapshot.log_text.as_deref() {
            Some(text) if !text.is_empty() => {
                self.log.set_text(text);
                self.message = STATUS_LOADED.to_string();
            }
            _ => {
                self.log.clear();
                self.message = STATUS_READY.to_string();
            }
        }

        self.state = snapshot.into_state(now);
        self.ticking = self.status() == TimerStatus::Running;
        log::info!(
            "restored {} session (last logged minute {})",
            self.status().label(),
            self.state.last_logged_minute
        );
    }

    pub fn restore_from_store(&mut self) {
        let snapshot = Snapshot::load(&self.store, &self.keys);
        self.restore(snapshot);
    }

    /// The host is going away: auto-pause a running session, then save everything.
    pub fn on_unload(&mut self) -> Result<(), StorageError> {
        if self.status() == TimerStatus::Running {
            let now = self.clock.now();
            self.state.pause_at(now);
            self.log.append(&format!(
                "=== Auto-paused on shutdown at {} ===",
                local_time(now)
            ));
            self.message = "Logging auto-paused.".to_string();
            log::info!("session auto-paused on shutdown");
        }
        self.persist()
    }

    /// Write minute lines owed at `now` and refresh the status message.
    /// Returns the number of lines written.
    fn advance(&mut self, now: Timestamp) -> u64 {
        if self.status() != TimerStatus::Running {
            return 0;
        }
        let Some(elapsed) = self.state.elapsed_ms(now) else {
            return 0;
        };
        let elapsed_minutes = elapsed / MINUTE_MS;

        let mut written = 0;
        while self.state.last_logged_minute < elapsed_minutes {
            let boundary = (self.state.last_logged_minute + 1) * MINUTE_MS;
            self.log.append(&format!(
                "Elapsed: {} (logged at {})",
                format_elapsed(boundary),
                local_time(now)
            ));
            self.state.last_logged_minute += 1;
            written += 1;
            if self.catch_up == CatchUp::Step {
                break;
            }
        }

        self.message = format!("Logging... Elapsed: {}", format_elapsed(elapsed));
        written
    }

    fn persist(&mut self) -> Result<(), StorageError> {
        Snapshot::of(&self.state, &self.log).save(&mut self.store, &self.keys)
    }
}
