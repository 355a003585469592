// ABOUTME: Entry point for elog: a terminal elapsed-time session logger.
// ABOUTME: Parses CLI args, loads config, sets up logging, and launches the app.

use std::path::PathBuf;

use clap::Parser;

use elapsed_logger::app::App;
use elapsed_logger::config::Config;
use elapsed_logger::logging;

/// Log elapsed minutes of a pausable session; the session survives restarts.
#[derive(Debug, Parser)]
#[command(name = "elog", version, about)]
struct Cli {
    /// Session store file (overrides storage.path).
    #[arg(long, value_name = "PATH")]
    store: Option<PathBuf>,

    /// Config file (defaults to ~/.elapsed-logger/config.toml).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Discard any stored session and log before starting.
    #[arg(long)]
    fresh: bool,

    /// Tick period in milliseconds (overrides timer.tick_interval_ms).
    #[arg(long, value_name = "MS")]
    tick_ms: Option<u64>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(store) = cli.store {
        config.storage.path = Some(store);
    }
    if let Some(tick_ms) = cli.tick_ms {
        config.timer.tick_interval_ms = tick_ms;
    }

    if let Err(e) = logging::init(&Config::log_path()) {
        eprintln!("Warning: failed to set up logging: {:#}", e);
    }

    App::new(config, cli.fresh).run().await
}
