// ABOUTME: Process signals that mean the terminal is going away (hangup, terminate, interrupt).
// ABOUTME: The event loop treats any of them like the quit key so the session is auto-paused.

#[cfg(unix)]
use tokio::signal::unix::{Signal, SignalKind, signal};

/// Listeners for the signals a closing terminal or a service manager sends.
///
/// Installing them replaces the default "terminate the process" action, so the
/// receiver must be polled for the signal to have any effect.
#[cfg(unix)]
pub struct ShutdownSignals {
    hangup: Signal,
    terminate: Signal,
    interrupt: Signal,
}

#[cfg(unix)]
impl ShutdownSignals {
    pub fn install() -> std::io::Result<Self> {
        Ok(Self {
            hangup: signal(SignalKind::hangup())?,
            terminate: signal(SignalKind::terminate())?,
            interrupt: signal(SignalKind::interrupt())?,
        })
    }

    /// Wait for the next shutdown signal and return its name.
    pub async fn recv(&mut self) -> &'static str {
        tokio::select! {
            _ = self.hangup.recv() => "SIGHUP",
            _ = self.terminate.recv() => "SIGTERM",
            _ = self.interrupt.recv() => "SIGINT",
        }
    }
}

#[cfg(not(unix))]
pub struct ShutdownSignals;

#[cfg(not(unix))]
impl ShutdownSignals {
    pub fn install() -> std::io::Result<Self> {
        Ok(Self)
    }

    pub async fn recv(&mut self) -> &'static str {
        match tokio::signal::ctrl_c().await {
            Ok(()) => "Ctrl+C",
            Err(_) => std::future::pending().await,
        }
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::time::Duration;

    fn send_to_self(name: &str) {
        let status = std::process::Command::new("kill")
            .args([&format!("-{}", name), &std::process::id().to_string()])
            .status()
            .unwrap();
        assert!(status.success());
    }

    #[tokio::test]
    async fn hangup_is_reported_instead_of_killing_the_process() {
        let mut signals = ShutdownSignals::install().unwrap();
        send_to_self("HUP");

        let received = tokio::time::timeout(Duration::from_secs(5), signals.recv())
            .await
            .unwrap();
        assert_eq!(received, "SIGHUP");
    }
}
