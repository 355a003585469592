// ABOUTME: Session snapshot: the persisted mirror of SessionState plus the log text.
// ABOUTME: One store key per field under a namespace; reads are lenient and default to zero.

use chrono::{DateTime, SecondsFormat, Utc};

use crate::clock::Timestamp;
use crate::session::log::LogBuffer;
use crate::session::state::SessionState;
use crate::store::{KeyValueStore, StorageError};

pub const DEFAULT_NAMESPACE: &str = "BatteryLoggerElapsedLog";

/// Names of the store keys owned by one logger namespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageKeys {
    namespace: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self::new(DEFAULT_NAMESPACE)
    }
}

impl StorageKeys {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
        }
    }

    /// The log text lives under the bare namespace.
    pub fn log(&self) -> String {
        self.namespace.clone()
    }

    pub fn logging(&self) -> String {
        self.field("logging")
    }

    pub fn paused(&self) -> String {
        self.field("paused")
    }

    pub fn start_time(&self) -> String {
        self.field("startTime")
    }

    pub fn pause_start(&self) -> String {
        self.field("pauseStart")
    }

    pub fn total_pause_duration(&self) -> String {
        self.field("totalPauseDuration")
    }

    pub fn last_logged_minute(&self) -> String {
        self.field("lastLoggedMinute")
    }

    pub fn all(&self) -> Vec<String> {
        vec![
            self.log(),
            self.logging(),
            self.paused(),
            self.start_time(),
            self.pause_start(),
            self.total_pause_duration(),
            self.last_logged_minute(),
        ]
    }

    fn field(&self, name: &str) -> String {
        format!("{}.{}", self.namespace, name)
    }
}

/// Everything the logger writes to the store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    pub log_text: Option<String>,
    pub logging: bool,
    pub paused: bool,
    pub start_time: Option<Timestamp>,
    pub pause_start: Option<Timestamp>,
    pub total_pause_ms: u64,
    pub last_logged_minute: u64,
}

impl Snapshot {
    pub fn of(state: &SessionState, log: &LogBuffer) -> Self {
        Self {
            log_text: Some(log.text().to_string()),
            logging: state.logging,
            paused: state.paused,
            start_time: state.start_time,
            pause_start: state.pause_start,
            total_pause_ms: state.total_pause_ms,
            last_logged_minute: state.last_logged_minute,
        }
    }

    /// Read a snapshot. Never fails: missing or malformed values take defaults.
    pub fn load(store: &impl KeyValueStore, keys: &StorageKeys) -> Self {
        Self {
            log_text: store.get(&keys.log()),
            logging: parse_flag(store.get(&keys.logging())),
            paused: parse_flag(store.get(&keys.paused())),
            start_time: parse_instant(store.get(&keys.start_time())),
            pause_start: parse_instant(store.get(&keys.pause_start())),
            total_pause_ms: parse_count(store.get(&keys.total_pause_duration())),
            last_logged_minute: parse_count(store.get(&keys.last_logged_minute())),
        }
    }

    /// Write every field in one batch, so the store never holds half a snapshot.
    pub fn save(
        &self,
        store: &mut impl KeyValueStore,
        keys: &StorageKeys,
    ) -> Result<(), StorageError> {
        store.apply(vec![
            (keys.log(), self.log_text.clone()),
            (keys.logging(), Some(bool_str(self.logging).to_string())),
            (keys.paused(), Some(bool_str(self.paused).to_string())),
            (keys.start_time(), self.start_time.map(format_instant)),
            (keys.pause_start(), self.pause_start.map(format_instant)),
            (
                keys.total_pause_duration(),
                Some(self.total_pause_ms.to_string()),
            ),
            (
                keys.last_logged_minute(),
                Some(self.last_logged_minute.to_string()),
            ),
        ])
    }

    /// Rebuild session state, repairing whatever the stored flags cannot support.
    ///
    /// A logging snapshot without a start time restores as idle. A paused
    /// snapshot without a pause start treats `now` as the start of the pause.
    pub fn into_state(self, now: Timestamp) -> SessionState {
        if !self.logging {
            return SessionState::default();
        }
        let Some(start_time) = self.start_time else {
            log::warn!("stored session is marked as logging but has no start time; ignoring it");
            return SessionState::default();
        };

        let pause_start = if self.paused {
            Some(self.pause_start.unwrap_or(now))
        } else {
            None
        };

        SessionState {
            logging: true,
            paused: self.paused,
            start_time: Some(start_time),
            pause_start,
            total_pause_ms: self.total_pause_ms,
            last_logged_minute: self.last_logged_minute,
        }
    }
}

fn bool_str(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

fn parse_flag(raw: Option<String>) -> bool {
    raw.is_some_and(|v| v.trim() == "true")
}

/// Non-negative whole number; anything else reads as 0.
fn parse_count(raw: Option<String>) -> u64 {
    let Some(raw) = raw else {
        return 0;
    };
    let trimmed = raw.trim();
    if let Ok(n) = trimmed.parse::<u64>() {
        return n;
    }
    match trimmed.parse::<f64>() {
        Ok(n) if n.is_finite() && n >= 0.0 => n.trunc() as u64,
        _ => 0,
    }
}

fn parse_instant(raw: Option<String>) -> Option<Timestamp> {
    let raw = raw?;
    DateTime::parse_from_rfc3339(raw.trim())
        .ok()
        .map(|at| at.with_timezone(&Utc))
}

fn format_instant(at: Timestamp) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}
