// ABOUTME: Elapsed-duration formatting shared by log lines and the status bar.
// ABOUTME: Renders milliseconds as zero-padded HH:MM:SS with uncapped hours.

/// Format an elapsed duration in milliseconds as `HH:MM:SS`.
///
/// Sub-second remainders are truncated. Hours keep growing past 23.
pub fn format_elapsed(ms: u64) -> String {
    let total_seconds = ms / 1000;
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}
