// ABOUTME: Log pane widget: renders the session log text into styled ratatui Lines.
// ABOUTME: Session markers stand out from minute lines; an empty log shows a hint.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

pub const EMPTY_LOG_HINT: &str = "Log is empty. Press \"s\" to start logging.";

/// Render the last `max_lines` lines of the log into styled Lines, one per log line.
pub fn render_log_lines(text: &str, max_lines: usize) -> Vec<Line<'static>> {
    if text.is_empty() {
        return vec![Line::from(Span::styled(
            EMPTY_LOG_HINT,
            Style::default().fg(Color::DarkGray),
        ))];
    }

    let skip = text.lines().count().saturating_sub(max_lines);
    text.lines().skip(skip).map(log_line).collect()
}

fn log_line(line: &str) -> Line<'static> {
    let style = if line.starts_with("=== Auto-paused") {
        Style::default()
            .fg(Color::Magenta)
            .add_modifier(Modifier::BOLD)
    } else if line.starts_with("===") {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else if line.starts_with("Elapsed:") {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Gray)
    };
    Line::from(Span::styled(line.to_string(), style))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_of(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.to_string()).collect()
    }

    #[test]
    fn empty_log_shows_hint() {
        let lines = render_log_lines("", 10);
        assert_eq!(lines.len(), 1);
        assert_eq!(text_of(&lines[0]), EMPTY_LOG_HINT);
    }

    #[test]
    fn one_line_per_log_line() {
        let lines = render_log_lines("=== Session started ===\nElapsed: 00:01:00 (logged at 10:01:00)\n", 10);
        assert_eq!(lines.len(), 2);
        assert_eq!(text_of(&lines[1]), "Elapsed: 00:01:00 (logged at 10:01:00)");
    }

    #[test]
    fn only_the_tail_is_kept() {
        let lines = render_log_lines("one\ntwo\nthree\n", 2);
        assert_eq!(lines.len(), 2);
        assert_eq!(text_of(&lines[0]), "two");
        assert_eq!(text_of(&lines[1]), "three");
    }

    #[test]
    fn markers_are_bold() {
        let lines = render_log_lines("=== Paused at 10:00:00 ===\n", 10);
        let style = lines[0].spans[0].style;
        assert!(style.add_modifier.contains(Modifier::BOLD));
    }
}
