pub mod answer_view;
pub mod ask_view;
pub mod capture_view;
pub mod header;
pub mod items_view;
pub mod status_row;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Block;

use crate::util::unicode::{display_width, next_grapheme_boundary};

use super::app::{App, InputState};
use super::theme::Theme;

/// Main render function — dispatches to sub-renderers
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // The answer panel only takes space once an answer exists
    let has_answer = app.answer.is_some();
    let mut constraints = vec![
        Constraint::Length(1), // header
        Constraint::Length(3), // capture input
        Constraint::Min(4),    // item list
        Constraint::Length(3), // question input
    ];
    if has_answer {
        constraints.push(Constraint::Percentage(35)); // answer + sources
    }
    constraints.push(Constraint::Length(1)); // status row

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    header::render_header(frame, app, chunks[0]);
    capture_view::render_capture_view(frame, app, chunks[1]);
    items_view::render_items_view(frame, app, chunks[2]);
    ask_view::render_ask_view(frame, app, chunks[3]);
    if has_answer {
        answer_view::render_answer_view(frame, app, chunks[4]);
    }
    status_row::render_status_row(frame, app, chunks[chunks.len() - 1]);
}

/// Build the display line for a single-line input, with a cursor mark when
/// focused. The text scrolls left as needed to keep the cursor in view.
pub(super) fn input_line(input: &InputState, focused: bool, theme: &Theme, width: u16) -> Line<'static> {
    let width = width as usize;

    if !focused {
        return Line::from(Span::styled(
            input.buffer.clone(),
            Style::default().fg(theme.text).bg(theme.background),
        ));
    }

    let before = &input.buffer[..input.cursor];
    let after = &input.buffer[input.cursor..];

    // Drop graphemes from the front until the pre-cursor text and the cursor
    // mark both fit
    let budget = width.saturating_sub(1);
    let mut visible_before = before;
    while display_width(visible_before) > budget {
        match next_grapheme_boundary(visible_before, 0) {
            Some(next) => visible_before = &visible_before[next..],
            None => break,
        }
    }

    Line::from(vec![
        Span::styled(
            visible_before.to_string(),
            Style::default().fg(theme.text_bright).bg(theme.background),
        ),
        Span::styled(
            "\u{258C}",
            Style::default().fg(theme.highlight).bg(theme.background),
        ), // ▌ cursor
        Span::styled(
            after.to_string(),
            Style::default().fg(theme.text_bright).bg(theme.background),
        ),
    ])
}
