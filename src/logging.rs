// ABOUTME: Diagnostic logging setup: routes the `log` facade to a file via env_logger.
// ABOUTME: The terminal belongs to the TUI, so nothing is written to stderr while it runs.

use std::fs::OpenOptions;
use std::path::Path;

use anyhow::Context;
use env_logger::{Builder, Env, Target};

/// Install the global logger, appending to `log_path`. Level comes from
/// `RUST_LOG` and defaults to `info`.
pub fn init(log_path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = log_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create log directory {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)
        .with_context(|| format!("failed to open log file {}", log_path.display()))?;

    Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init()
        .context("failed to install logger")?;
    Ok(())
}
