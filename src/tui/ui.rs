// ABOUTME: Main TUI rendering function: assembles header, log pane, controls, and status bar.
// ABOUTME: Splits the terminal frame into vertical layout chunks and delegates to widgets.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::session::TimerView;
use crate::tui::state::{Affordances, TuiState};
use crate::tui::widgets::controls::controls_line;
use crate::tui::widgets::log::render_log_lines;
use crate::tui::widgets::status::status_line;

/// Oldest log lines beyond this are left out of the pane. Paragraph scroll
/// offsets are u16, so the wrapped tail has to stay under that range.
const MAX_LOG_LINES: usize = 4_096;

/// Render the full TUI screen layout to the given frame.
pub fn render(frame: &mut Frame, state: &mut TuiState, view: &TimerView) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(3),    // Log pane
            Constraint::Length(3), // Controls
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    // Header
    let header = Line::from(Span::styled(
        " elapsed logger",
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(Paragraph::new(header), chunks[0]);

    // Log pane
    let log_chunk = chunks[1];
    let log_paragraph =
        Paragraph::new(render_log_lines(view.log, MAX_LOG_LINES)).wrap(Wrap { trim: false });

    // Use ratatui's own line_count() so the scroll math matches the wrapped
    // rendering exactly and the tail of the log is never hidden.
    let total_lines =
        u16::try_from(log_paragraph.line_count(log_chunk.width)).unwrap_or(u16::MAX);
    let max_scroll = total_lines.saturating_sub(log_chunk.height);

    if state.scroll_offset > max_scroll {
        state.scroll_offset = max_scroll;
    }

    // scroll_offset is lines scrolled up from the bottom (0 = at bottom)
    let scroll = max_scroll.saturating_sub(state.scroll_offset);
    frame.render_widget(log_paragraph.scroll((scroll, 0)), log_chunk);

    // Controls
    let controls = Paragraph::new(controls_line(Affordances::for_status(view.status)))
        .block(Block::default().borders(Borders::TOP | Borders::BOTTOM));
    frame.render_widget(controls, chunks[2]);

    // Status bar
    let status = status_line(
        view.status,
        view.elapsed_ms,
        view.message,
        state.last_error.as_deref(),
    );
    frame.render_widget(Paragraph::new(status), chunks[3]);
}
