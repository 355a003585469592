// ABOUTME: App orchestrator: wires together config, store, session timer, and the TUI.
// ABOUTME: Restores the previous session, runs the event loop, and saves on the way out.

use std::time::Duration;

use anyhow::Context;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::DefaultTerminal;
use tokio::time::MissedTickBehavior;

use crate::clock::{Clock, SystemClock};
use crate::config::Config;
use crate::session::SessionTimer;
use crate::shutdown::ShutdownSignals;
use crate::store::{FileStore, KeyValueStore};
use crate::tui::input::{InputResult, handle_key};
use crate::tui::state::{Affordances, TuiState};
use crate::tui::ui;

/// Top-level application that orchestrates all subsystems.
pub struct App {
    config: Config,
    fresh: bool,
}

impl App {
    /// Create a new app with the given configuration.
    pub fn new(config: Config, fresh: bool) -> Self {
        Self { config, fresh }
    }

    /// Run the application: open the store, restore the session, and drive the TUI until quit.
    pub async fn run(self) -> anyhow::Result<()> {
        let store_path = self.config.store_path();
        let store = FileStore::open(&store_path)
            .with_context(|| format!("failed to open session store {}", store_path.display()))?;
        log::info!("using session store {}", store.path().display());

        let mut timer = SessionTimer::new(store, SystemClock, self.config.timer_options());
        if self.fresh {
            timer.clear().context("failed to clear the stored session")?;
        } else {
            timer.restore_from_store();
        }

        let mut signals =
            ShutdownSignals::install().context("failed to install shutdown signal handlers")?;
        let mut terminal = ratatui::try_init().context("failed to initialise terminal")?;
        let result = run_loop(
            &mut terminal,
            &mut timer,
            &mut signals,
            self.config.tick_interval(),
        )
        .await;
        ratatui::restore();

        // Best effort: the process is exiting either way.
        if let Err(e) = timer.on_unload() {
            log::error!("failed to save session on exit: {}", e);
            eprintln!("Warning: failed to save session on exit: {}", e);
        }

        print_exit_screen(&timer);
        result
    }
}

/// Process terminal events and ticks one at a time until the user quits or
/// the process is told to shut down.
pub async fn run_loop<S: KeyValueStore, C: Clock>(
    terminal: &mut DefaultTerminal,
    timer: &mut SessionTimer<S, C>,
    signals: &mut ShutdownSignals,
    tick_interval: Duration,
) -> anyhow::Result<()> {
    let mut tui = TuiState::new();
    let mut events = EventStream::new();
    let mut ticker = tokio::time::interval(tick_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tui.follow_log(timer.log().line_count());
        terminal.draw(|frame| ui::render(frame, &mut tui, &timer.view()))?;

        tokio::select! {
            _ = ticker.tick() => {
                if timer.is_ticking() {
                    record(&mut tui, timer.tick());
                }
            }
            event = events.next() => match event {
                Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                    match handle_key(&mut tui, Affordances::for_status(timer.status()), key) {
                        InputResult::Quit => return Ok(()),
                        InputResult::Command(command) => {
                            log::debug!("command {:?}", command);
                            record(&mut tui, timer.execute(command));
                        }
                        InputResult::None => {}
                    }
                }
                // Resize and other events just trigger a redraw.
                Some(Ok(_)) => {}
                Some(Err(e)) => return Err(e).context("terminal event stream failed"),
                None => return Ok(()),
            },
            name = signals.recv() => {
                log::info!("received {}, shutting down", name);
                return Ok(());
            }
        }
    }
}

fn record<E: std::fmt::Display>(tui: &mut TuiState, result: Result<(), E>) {
    match result {
        Ok(()) => tui.last_error = None,
        Err(e) => {
            log::error!("failed to persist session: {}", e);
            tui.last_error = Some(e.to_string());
        }
    }
}

/// Print a short summary after the TUI exits.
fn print_exit_screen<S: KeyValueStore, C: Clock>(timer: &SessionTimer<S, C>) {
    println!();
    match timer.elapsed_ms() {
        Some(elapsed) => println!(
            "  Session {} at {} elapsed ({} minute lines logged).",
            timer.status().label(),
            crate::format::format_elapsed(elapsed),
            timer.state().last_logged_minute
        ),
        None => println!("  No active session."),
    }
    println!();
}
