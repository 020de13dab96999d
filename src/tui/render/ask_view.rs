use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::app::{App, Mode};

use super::input_line;

/// Render the question input
pub fn render_ask_view(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.mode == Mode::Ask;
    let border_fg = if focused {
        app.theme.highlight
    } else {
        app.theme.dim
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_fg).bg(app.theme.background))
        .title(Line::from(Span::styled(
            " Ask a question ",
            Style::default().fg(app.theme.text_bright),
        )));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let line = input_line(&app.question_draft, focused, &app.theme, inner.width);
    frame.render_widget(
        Paragraph::new(line).style(Style::default().bg(app.theme.background)),
        inner,
    );
}
