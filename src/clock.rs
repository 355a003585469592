// ABOUTME: Wall clock abstraction: the timer asks a Clock for "now" instead of calling Utc::now().
// ABOUTME: Also formats instants as human-readable local times for log lines.

use std::cell::Cell;
use std::rc::Rc;

use chrono::{DateTime, Local, TimeZone, Utc};

/// An instant on the wall clock.
pub type Timestamp = DateTime<Utc>;

/// Source of the current wall-clock instant.
pub trait Clock {
    fn now(&self) -> Timestamp;
}

/// The real system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Utc::now()
    }
}

/// A clock that only moves when told to. Clones share the same instant, so a
/// test can keep one handle and hand another to the timer.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Rc<Cell<Timestamp>>,
}

impl ManualClock {
    pub fn new(start: Timestamp) -> Self {
        Self {
            now: Rc::new(Cell::new(start)),
        }
    }

    /// A clock pinned to a fixed, whole-millisecond instant.
    pub fn fixed() -> Self {
        let start = Utc
            .with_ymd_and_hms(2026, 1, 15, 10, 0, 0)
            .single()
            .unwrap_or_else(Utc::now);
        Self::new(start)
    }

    pub fn advance_ms(&self, ms: u64) {
        let next = self.now.get() + chrono::Duration::milliseconds(ms as i64);
        self.now.set(next);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        self.now.get()
    }
}

/// Milliseconds from `earlier` to `later`, saturating at zero if the clock went backwards.
pub fn millis_between(earlier: Timestamp, later: Timestamp) -> u64 {
    (later - earlier).num_milliseconds().max(0) as u64
}

/// Local time of day, e.g. `14:03:27`.
pub fn local_time(at: Timestamp) -> String {
    at.with_timezone(&Local).format("%H:%M:%S").to_string()
}

/// Local date and time, e.g. `2026-01-15 14:03:27`.
pub fn local_date_time(at: Timestamp) -> String {
    at.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S").to_string()
}
