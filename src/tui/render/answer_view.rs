use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::tui::app::App;

/// Render the answer panel and, when present, the source snippets below it.
/// Only called once an answer exists; the sources keep the backend's
/// relevance order.
pub fn render_answer_view(frame: &mut Frame, app: &App, area: Rect) {
    let answer = match &app.answer {
        Some(a) => a.as_str(),
        None => return,
    };

    let (answer_area, sources_area) = if app.sources.is_empty() {
        (area, None)
    } else {
        let sources_height = (app.sources.len() as u16 + 2).min(area.height / 2);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(sources_height)])
            .split(area);
        (chunks[0], Some(chunks[1]))
    };

    let answer_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.dim).bg(app.theme.background))
        .title(Line::from(Span::styled(
            " Answer ",
            Style::default().fg(app.theme.text_bright),
        )));
    let inner = answer_block.inner(answer_area);
    frame.render_widget(answer_block, answer_area);
    frame.render_widget(
        Paragraph::new(answer)
            .wrap(Wrap { trim: false })
            .style(Style::default().fg(app.theme.text).bg(app.theme.background)),
        inner,
    );

    if let Some(sources_area) = sources_area {
        let sources_block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(app.theme.dim).bg(app.theme.background))
            .title(Line::from(Span::styled(
                " Sources ",
                Style::default().fg(app.theme.text_bright),
            )));
        let inner = sources_block.inner(sources_area);
        frame.render_widget(sources_block, sources_area);

        let lines: Vec<Line> = app
            .sources
            .iter()
            .map(|source| {
                let mut spans = Vec::new();
                if let Some(item_id) = source.item_id {
                    spans.push(Span::styled(
                        format!("#{} ", item_id),
                        Style::default().fg(app.theme.dim).bg(app.theme.background),
                    ));
                }
                spans.push(Span::styled(
                    source.text.clone(),
                    Style::default().fg(app.theme.text).bg(app.theme.background),
                ));
                Line::from(spans)
            })
            .collect();
        frame.render_widget(
            Paragraph::new(lines).style(Style::default().bg(app.theme.background)),
            inner,
        );
    }
}
