// ABOUTME: Controls row widget: shows each command key, dimmed when the command is unavailable.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::tui::state::Affordances;

pub fn controls_line(affordances: Affordances) -> Line<'static> {
    let controls = [
        ("s", "Start", affordances.start),
        ("p", "Pause", affordances.pause),
        ("r", "Resume", affordances.resume),
        ("c", "Clear", affordances.clear),
        ("q", "Quit", true),
    ];

    let mut spans = vec![Span::raw(" ")];
    for (key, label, enabled) in controls {
        let (key_style, label_style) = if enabled {
            (
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
                Style::default().fg(Color::White),
            )
        } else {
            let dim = Style::default().fg(Color::DarkGray);
            (dim, dim.add_modifier(Modifier::CROSSED_OUT))
        };
        spans.push(Span::styled(format!("[{}] ", key), key_style));
        spans.push(Span::styled(label, label_style));
        spans.push(Span::raw("  "));
    }

    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::TimerStatus;

    #[test]
    fn lists_every_control() {
        let line = controls_line(Affordances::for_status(TimerStatus::Idle));
        let text: String = line.spans.iter().map(|s| s.content.to_string()).collect();
        for label in ["[s] Start", "[p] Pause", "[r] Resume", "[c] Clear", "[q] Quit"] {
            assert!(text.contains(label), "missing {:?} in {:?}", label, text);
        }
    }

    #[test]
    fn disabled_controls_are_dimmed() {
        let line = controls_line(Affordances::for_status(TimerStatus::Running));
        let start_label = line
            .spans
            .iter()
            .find(|s| s.content == "Start")
            .expect("start label");
        assert_eq!(start_label.style.fg, Some(Color::DarkGray));

        let pause_label = line
            .spans
            .iter()
            .find(|s| s.content == "Pause")
            .expect("pause label");
        assert_eq!(pause_label.style.fg, Some(Color::White));
    }
}
