use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::model::classify::classify;
use crate::model::item::ItemKind;
use crate::tui::app::{App, Mode};

use super::input_line;

/// Render the capture input with its live classification badge.
///
/// The badge is recomputed from the draft on every draw, so it tracks each
/// keystroke without any stored classification state.
pub fn render_capture_view(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.mode == Mode::Capture;
    let border_fg = if focused {
        app.theme.highlight
    } else {
        app.theme.dim
    };

    let mut title = vec![Span::styled(
        " Add note or URL ",
        Style::default().fg(app.theme.text_bright),
    )];
    let trimmed = app.content_draft.buffer.trim();
    if !trimmed.is_empty() {
        let kind = classify(trimmed);
        let label = match kind {
            ItemKind::Url => " link detected ",
            ItemKind::Note => " note ",
        };
        title.push(Span::styled(
            label,
            Style::default().fg(app.theme.kind_color(kind)),
        ));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_fg).bg(app.theme.background))
        .title(Line::from(title));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let line = input_line(&app.content_draft, focused, &app.theme, inner.width);
    frame.render_widget(
        Paragraph::new(line).style(Style::default().bg(app.theme.background)),
        inner,
    );
}
