//! Rendering functions for the TUI.
//!
//! The screen is split into the autocomplete widget on the left and the
//! shared-context mirror on the right.

mod mirror;
mod search;

pub use mirror::render_shared_context;
pub use search::{render_results, render_search_box, render_status};

use crate::app::App;
use crate::colors;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Block,
};

/// Render the whole screen and record the widget bounds for dismissal.
pub fn render_ui(f: &mut Frame, app: &mut App) {
    let bg_block = Block::default().style(Style::default().bg(colors::BACKDROP));
    f.render_widget(bg_block, f.area());

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(f.area());

    let widget_chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(3),
        ])
        .split(columns[0]);

    render_search_box(f, app, widget_chunks[0]);
    render_results(f, app, widget_chunks[1]);
    render_status(f, app, widget_chunks[2]);
    render_shared_context(f, app, columns[1]);

    app.set_widget_areas(widget_chunks[0], widget_chunks[1]);
}
