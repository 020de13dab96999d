use chrono::Utc;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};
use crate::util::timefmt::format_timestamp;
use crate::util::unicode::truncate_to_width;

/// Longest content preview shown per item before the ellipsis kicks in.
const PREVIEW_MAX_CHARS: usize = 200;

/// Render the stored-item list: one row per item with a kind badge, id,
/// relative timestamp, and a content preview.
pub fn render_items_view(frame: &mut Frame, app: &mut App, area: Rect) {
    if app.items.is_empty() {
        let empty = Paragraph::new(" No items saved yet.")
            .style(Style::default().fg(app.theme.dim).bg(app.theme.background));
        frame.render_widget(empty, area);
        return;
    }

    let focused = app.mode == Mode::Browse;
    let visible_height = area.height as usize;
    let width = area.width as usize;

    // Keep the cursor row inside the window
    let mut scroll = app.list_scroll.min(app.list_cursor);
    if visible_height > 0 && app.list_cursor >= scroll + visible_height {
        scroll = app.list_cursor + 1 - visible_height;
    }
    app.list_scroll = scroll;

    // Relative timestamps are derived from "now" on every draw, never stored
    let now = Utc::now();

    let mut lines: Vec<Line> = Vec::new();
    for (i, item) in app.items.iter().enumerate().skip(scroll).take(visible_height) {
        let is_cursor = focused && i == app.list_cursor;
        let bg = if is_cursor {
            app.theme.highlight
        } else {
            app.theme.background
        };

        let mut spans: Vec<Span> = Vec::new();
        spans.push(Span::styled(
            format!(" [{}]", item.kind.badge()),
            Style::default()
                .fg(app.theme.kind_color(item.kind))
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(" #{}", item.id),
            Style::default().fg(app.theme.dim).bg(bg),
        ));
        spans.push(Span::styled(
            format!("  {}", format_timestamp(item.created_at.as_deref(), now)),
            Style::default().fg(app.theme.dim).bg(bg),
        ));

        let preview = content_preview(&item.content, PREVIEW_MAX_CHARS);
        let used: usize = spans.iter().map(|s| s.content.chars().count()).sum();
        let remaining = width.saturating_sub(used + 2);
        spans.push(Span::styled(
            format!("  {}", truncate_to_width(&preview, remaining)),
            Style::default()
                .fg(if is_cursor {
                    app.theme.text_bright
                } else {
                    app.theme.text
                })
                .bg(bg),
        ));

        // Pad cursor line
        if is_cursor {
            let content_width: usize = spans.iter().map(|s| s.content.chars().count()).sum();
            if content_width < width {
                spans.push(Span::styled(
                    " ".repeat(width - content_width),
                    Style::default().bg(bg),
                ));
            }
        }

        lines.push(Line::from(spans));
    }

    let paragraph = Paragraph::new(lines).style(Style::default().bg(app.theme.background));
    frame.render_widget(paragraph, area);
}

/// Flatten content to a single line and cap it at `max_chars` characters,
/// marking the cut with an ellipsis.
pub fn content_preview(content: &str, max_chars: usize) -> String {
    let flat = content.replace(['\n', '\r'], " ");
    if flat.chars().count() <= max_chars {
        return flat;
    }
    let mut preview: String = flat.chars().take(max_chars).collect();
    preview.push('\u{2026}');
    preview
}
