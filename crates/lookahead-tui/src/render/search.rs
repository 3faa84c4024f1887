//! The autocomplete widget: input box, result list and status line.

use crate::app::App;
use crate::colors;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

pub fn render_search_box(f: &mut Frame, app: &App, area: Rect) {
    let focused = app.dismissal.is_visible();
    let input_block = Block::default()
        .borders(Borders::ALL)
        .title(" Autocomplete ")
        .style(Style::default().bg(colors::WIDGET))
        .border_style(Style::default().fg(if focused {
            colors::FOCUS
        } else {
            colors::BORDER
        }));

    let input_text = if app.input.is_empty() {
        Span::styled(&app.placeholder, Style::default().fg(colors::BORDER))
    } else {
        Span::styled(&app.input, Style::default().fg(colors::TEXT))
    };

    f.render_widget(Paragraph::new(input_text).block(input_block), area);

    let cursor_x = u16::try_from(app.cursor_column())
        .unwrap_or(u16::MAX)
        .saturating_add(area.x + 1)
        .min(area.right().saturating_sub(2));
    f.set_cursor_position((cursor_x, area.y + 1));
}

/// Loading replaces the list; a dismissed list draws an empty frame.
pub fn render_results(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .style(Style::default().bg(colors::WIDGET))
        .border_style(Style::default().fg(colors::BORDER));

    if app.controller.is_loading() {
        let loading = Paragraph::new(Span::styled(
            "loading...",
            Style::default()
                .fg(colors::LOADING)
                .add_modifier(Modifier::ITALIC),
        ))
        .block(block);
        f.render_widget(loading, area);
        return;
    }

    if !app.shows_results() {
        f.render_widget(block, area);
        return;
    }

    let items: Vec<ListItem> = app
        .controller
        .store()
        .current()
        .into_iter()
        .map(|item| {
            ListItem::new(Line::from(vec![
                Span::styled("• ", Style::default().fg(colors::BORDER)),
                Span::styled(item, Style::default().fg(colors::TEXT)),
            ]))
        })
        .collect();

    f.render_widget(List::new(items).block(block), area);
}

/// Query statistics and the last provider failure, if any.
pub fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let stats = app.controller.stats();
    let mut spans = vec![Span::styled(
        format!(
            "calls {}  hits {}  stale {}  cached {}",
            stats.provider_calls,
            stats.cache_hits,
            stats.stale_discards,
            app.controller.cache().len()
        ),
        Style::default().fg(colors::MUTED),
    )];

    if let Some(err) = app.controller.last_error() {
        spans.push(Span::styled(
            format!("  last error: {}", err.message),
            Style::default().fg(colors::CALL_FAILED),
        ));
    } else if stats.provider_calls > 0 {
        spans.push(Span::styled("  ok", Style::default().fg(colors::CALL_OK)));
    }

    let status = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::TOP)
            .title(" Esc quit  Ctrl+U clear ")
            .border_style(Style::default().fg(colors::BORDER)),
    );
    f.render_widget(status, area);
}
