// ABOUTME: Integration tests for session persistence across process restarts.
// ABOUTME: Drives SessionTimer over a FileStore, drops it, and reopens the same file.

use elapsed_logger::clock::{Clock, ManualClock};
use elapsed_logger::session::{
    CatchUp, SessionTimer, Snapshot, StorageKeys, TimerOptions, TimerStatus,
};
use elapsed_logger::store::{FileStore, KeyValueStore};

fn open(path: &std::path::Path, clock: &ManualClock) -> SessionTimer<FileStore, ManualClock> {
    let store = FileStore::open(path).unwrap();
    SessionTimer::new(store, clock.clone(), TimerOptions::default())
}

fn count_lines(timer: &SessionTimer<FileStore, ManualClock>, prefix: &str) -> usize {
    timer.log().lines().filter(|l| l.starts_with(prefix)).count()
}

/// Quitting mid-session auto-pauses; the next launch comes back paused with
/// the full log, and resuming does not count the downtime.
#[test]
fn unload_then_relaunch_resumes_paused_session() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("store.json");
    let clock = ManualClock::fixed();

    {
        let mut timer = open(&path, &clock);
        timer.restore_from_store();
        timer.start().unwrap();
        clock.advance_ms(90_000);
        timer.tick().unwrap();
        timer.on_unload().unwrap();
    }

    // Host is closed for an hour.
    clock.advance_ms(3_600_000);

    let mut timer = open(&path, &clock);
    timer.restore_from_store();

    assert_eq!(timer.status(), TimerStatus::Paused);
    assert!(!timer.is_ticking());
    assert_eq!(timer.message(), "Previous log loaded.");
    assert_eq!(timer.state().last_logged_minute, 1);
    assert_eq!(count_lines(&timer, "=== Auto-paused on shutdown at "), 1);
    assert_eq!(timer.elapsed_ms(), Some(90_000));

    timer.resume().unwrap();
    assert_eq!(timer.state().total_pause_ms, 3_600_000);
    clock.advance_ms(30_000);
    timer.tick().unwrap();

    assert_eq!(count_lines(&timer, "Elapsed: "), 2);
    assert_eq!(timer.state().last_logged_minute, 2);
}

/// A store written while running (no clean unload) restores as running and
/// catches up on the minutes that passed while the host was gone.
#[test]
fn crash_while_running_catches_up_on_restore() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("store.json");
    let clock = ManualClock::fixed();

    {
        let mut timer = open(&path, &clock);
        timer.start().unwrap();
    }

    clock.advance_ms(4 * 60_000 + 1_000);

    let mut timer = open(&path, &clock);
    timer.restore_from_store();
    assert_eq!(timer.status(), TimerStatus::Running);
    assert!(timer.is_ticking());

    timer.tick().unwrap();
    assert_eq!(count_lines(&timer, "Elapsed: "), 4);

    let reopened = FileStore::open(&path).unwrap();
    let saved = Snapshot::load(&reopened, &StorageKeys::default());
    assert_eq!(saved.last_logged_minute, 4);
}

/// Step catch-up writes the missed minutes over successive ticks instead.
#[test]
fn step_catch_up_spreads_missed_minutes() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("store.json");
    let clock = ManualClock::fixed();

    {
        let mut timer = open(&path, &clock);
        timer.start().unwrap();
    }
    clock.advance_ms(3 * 60_000);

    let options = TimerOptions {
        catch_up: CatchUp::Step,
        ..TimerOptions::default()
    };
    let mut timer = SessionTimer::new(FileStore::open(&path).unwrap(), clock.clone(), options);
    timer.restore_from_store();

    timer.tick().unwrap();
    assert_eq!(timer.state().last_logged_minute, 1);
    timer.tick().unwrap();
    timer.tick().unwrap();
    timer.tick().unwrap();
    assert_eq!(timer.state().last_logged_minute, 3);
}

/// Clearing removes every key from the file, so the next launch starts idle
/// with an empty log.
#[test]
fn clear_removes_persisted_session() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("store.json");
    let clock = ManualClock::fixed();

    {
        let mut timer = open(&path, &clock);
        timer.start().unwrap();
        clock.advance_ms(61_000);
        timer.tick().unwrap();
        timer.clear().unwrap();
    }

    let reopened = FileStore::open(&path).unwrap();
    for key in StorageKeys::default().all() {
        assert_eq!(reopened.get(&key), None, "key {} should be gone", key);
    }

    let mut timer = open(&path, &clock);
    timer.restore_from_store();
    assert_eq!(timer.status(), TimerStatus::Idle);
    assert!(timer.log().is_empty());
    assert_eq!(timer.message(), "Ready to start logging.");
}

/// Two namespaces in one file do not see each other's sessions.
#[test]
fn namespaces_are_isolated() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("store.json");
    let clock = ManualClock::fixed();

    {
        let options = TimerOptions {
            keys: StorageKeys::new("rig-a"),
            ..TimerOptions::default()
        };
        let mut timer = SessionTimer::new(FileStore::open(&path).unwrap(), clock.clone(), options);
        timer.start().unwrap();
    }

    let options = TimerOptions {
        keys: StorageKeys::new("rig-b"),
        ..TimerOptions::default()
    };
    let mut timer = SessionTimer::new(FileStore::open(&path).unwrap(), clock.clone(), options);
    timer.restore_from_store();
    assert_eq!(timer.status(), TimerStatus::Idle);

    let store = FileStore::open(&path).unwrap();
    assert_eq!(store.get("rig-a.logging").as_deref(), Some("true"));
    assert_eq!(
        store.get("rig-a.startTime").as_deref(),
        Some(
            clock
                .now()
                .to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
                .as_str()
        )
    );
}
