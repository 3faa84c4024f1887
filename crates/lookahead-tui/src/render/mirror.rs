//! Second view of the shared result store, fed by its subscription.

use crate::app::App;
use crate::colors;
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Paragraph, Wrap},
};

pub fn render_shared_context(f: &mut Frame, app: &App, area: Rect) {
    let json = serde_json::to_string_pretty(&app.mirror).unwrap_or_else(|_| "[]".to_string());

    let panel = Paragraph::new(json)
        .style(Style::default().fg(colors::MUTED))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Shared context ")
                .style(Style::default().bg(colors::MIRROR))
                .border_style(Style::default().fg(colors::BORDER)),
        );
    f.render_widget(panel, area);
}
