// ABOUTME: Library root for the elapsed logger: re-exports all modules for integration testing.
// ABOUTME: The binary entry point is in main.rs, which uses this crate as a library.

pub mod app;
pub mod clock;
pub mod config;
pub mod format;
pub mod logging;
pub mod session;
pub mod shutdown;
pub mod store;
pub mod tui;
