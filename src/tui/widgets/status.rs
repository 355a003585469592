// ABOUTME: Status bar widget: renders session state, live elapsed time, and the status message.
// ABOUTME: Displayed at the bottom of the TUI as a single-line summary.

use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use crate::format::format_elapsed;
use crate::session::TimerStatus;

/// Render the status bar line with state, elapsed time, and message.
pub fn status_line(
    status: TimerStatus,
    elapsed_ms: Option<u64>,
    message: &str,
    error: Option<&str>,
) -> Line<'static> {
    let dim = Style::default().fg(Color::DarkGray);
    let state_color = match status {
        TimerStatus::Idle => Color::Gray,
        TimerStatus::Running => Color::Green,
        TimerStatus::Paused => Color::Yellow,
    };

    let mut spans = vec![
        Span::styled(
            format!(" {} ", status.label()),
            Style::default().fg(state_color),
        ),
        Span::styled("| ", dim),
    ];

    if let Some(elapsed) = elapsed_ms {
        spans.push(Span::styled(
            format!("{} ", format_elapsed(elapsed)),
            Style::default().fg(Color::White),
        ));
        spans.push(Span::styled("| ", dim));
    }

    spans.push(Span::styled(
        message.to_string(),
        Style::default().fg(Color::White),
    ));

    if let Some(error) = error {
        spans.push(Span::styled(" | ", dim));
        spans.push(Span::styled(
            format!("save failed: {}", error),
            Style::default().fg(Color::Red),
        ));
    }

    Line::from(spans)
}
