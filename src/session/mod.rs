// ABOUTME: Session module: the elapsed-time logging state machine and its persistence.
// ABOUTME: State, log buffer, store snapshot, and the SessionTimer that ties them together.

pub mod log;
pub mod persistence;
pub mod state;
pub mod timer;

pub use log::LogBuffer;
pub use persistence::{DEFAULT_NAMESPACE, Snapshot, StorageKeys};
pub use state::{SessionState, TimerStatus};
pub use timer::{CatchUp, SessionTimer, TimerCommand, TimerOptions, TimerView};
