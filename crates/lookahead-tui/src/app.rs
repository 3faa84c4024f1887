//! Application state and input handling for the TUI.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use lookahead_core::{Bounds, DismissalWatcher, ResultList, SearchController};
use ratatui::layout::Rect;
use tracing::debug;
use unicode_width::UnicodeWidthStr;

/// Main application state
pub struct App {
    pub input: String,
    /// Cursor position in characters
    pub cursor_position: usize,
    pub placeholder: String,
    pub controller: SearchController,
    pub dismissal: DismissalWatcher,
    /// Last list observed through the shared store subscription
    pub mirror: ResultList,
    /// Where the input box was last drawn
    pub input_area: Rect,
    pub should_quit: bool,
}

impl App {
    pub fn new(controller: SearchController) -> Self {
        Self {
            input: String::new(),
            cursor_position: 0,
            placeholder: "search...".to_string(),
            controller,
            dismissal: DismissalWatcher::new(),
            mirror: ResultList::new(),
            input_area: Rect::default(),
            should_quit: false,
        }
    }

    /// Handle a terminal event. Returns true if the screen needs a redraw.
    pub fn handle_event(&mut self, event: &Event) -> bool {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                self.handle_key(*key);
                true
            }
            Event::Mouse(mouse) => self.handle_mouse(*mouse),
            Event::Resize(..) => true,
            _ => false,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('u') if ctrl => self.clear_input(),
            KeyCode::Char(c) if !ctrl => self.enter_char(c),
            KeyCode::Backspace => self.delete_char(),
            KeyCode::Left => self.move_cursor_left(),
            KeyCode::Right => self.move_cursor_right(),
            KeyCode::Home => self.cursor_position = 0,
            KeyCode::End => self.cursor_position = self.input.chars().count(),
            _ => {}
        }
    }

    /// Returns true if the press changed what is shown.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> bool {
        let MouseEventKind::Down(MouseButton::Left) = mouse.kind else {
            return false;
        };

        if self.input_area.contains((mouse.column, mouse.row).into()) {
            let was_visible = self.dismissal.is_visible();
            self.dismissal.focus_input();
            return !was_visible;
        }

        self.dismissal.on_press(mouse.column, mouse.row)
    }

    /// Record the drawn layout of the widget.
    pub fn set_widget_areas(&mut self, input: Rect, results: Rect) {
        self.input_area = input;
        let input = Bounds::new(input.x, input.y, input.width, input.height);
        let results = Bounds::new(results.x, results.y, results.width, results.height);
        self.dismissal.set_bounds(input.union(&results));
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor_position = self.cursor_position.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        self.cursor_position = self.clamp_cursor(self.cursor_position.saturating_add(1));
    }

    pub fn enter_char(&mut self, c: char) {
        let index = self.byte_index();
        self.input.insert(index, c);
        self.move_cursor_right();
        self.query_changed();
    }

    pub fn delete_char(&mut self) {
        if self.cursor_position == 0 {
            return;
        }
        let before = self.input.chars().take(self.cursor_position - 1);
        let after = self.input.chars().skip(self.cursor_position);
        self.input = before.chain(after).collect();
        self.move_cursor_left();
        self.query_changed();
    }

    pub fn clear_input(&mut self) {
        self.input.clear();
        self.cursor_position = 0;
        self.query_changed();
    }

    pub fn clamp_cursor(&self, new_cursor_pos: usize) -> usize {
        new_cursor_pos.min(self.input.chars().count())
    }

    /// Whether the result list should be drawn (loading shows an indicator instead).
    pub fn shows_results(&self) -> bool {
        self.dismissal.is_visible() && !self.controller.is_loading()
    }

    /// Terminal columns occupied by the text before the cursor.
    pub fn cursor_column(&self) -> usize {
        self.input[..self.byte_index()].width()
    }

    fn byte_index(&self) -> usize {
        self.input
            .char_indices()
            .map(|(i, _)| i)
            .nth(self.cursor_position)
            .unwrap_or(self.input.len())
    }

    /// Typing implies the field has focus.
    fn query_changed(&mut self) {
        self.dismissal.focus_input();
        debug!("Input now '{}'", self.input);
        self.controller.on_query_changed(self.input.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lookahead_core::config::{ProviderConfig, SearchConfig};
    use lookahead_core::{ResultStore, provider};

    fn make_app() -> App {
        let provider = provider::from_config(&ProviderConfig {
            latency_step_ms: 100,
            max_latency_steps: 1,
            ..Default::default()
        });
        App::new(SearchController::new(
            SearchConfig::default(),
            provider,
            ResultStore::new(),
        ))
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn press(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_typing_updates_input_and_query() {
        let mut app = make_app();
        type_text(&mut app, "abc");

        assert_eq!(app.input, "abc");
        assert_eq!(app.cursor_position, 3);
        assert_eq!(app.controller.query(), "abc");
    }

    #[tokio::test(start_paused = true)]
    async fn test_insert_and_delete_mid_string() {
        let mut app = make_app();
        type_text(&mut app, "acd");
        app.handle_key(key(KeyCode::Left));
        app.handle_key(key(KeyCode::Left));
        type_text(&mut app, "b");
        assert_eq!(app.input, "abcd");

        app.handle_key(key(KeyCode::End));
        app.handle_key(key(KeyCode::Backspace));
        assert_eq!(app.input, "abc");
        assert_eq!(app.controller.query(), "abc");
    }

    #[tokio::test(start_paused = true)]
    async fn test_multibyte_editing() {
        let mut app = make_app();
        type_text(&mut app, "äü");
        app.handle_key(key(KeyCode::Left));
        type_text(&mut app, "ö");
        assert_eq!(app.input, "äöü");

        app.handle_key(key(KeyCode::Backspace));
        assert_eq!(app.input, "äü");
    }

    #[tokio::test(start_paused = true)]
    async fn test_cursor_column_counts_display_width() {
        let mut app = make_app();
        type_text(&mut app, "ab");
        assert_eq!(app.cursor_column(), 2);

        type_text(&mut app, "日本");
        assert_eq!(app.cursor_position, 4);
        assert_eq!(app.cursor_column(), 6);

        app.handle_key(key(KeyCode::Left));
        assert_eq!(app.cursor_column(), 4);
    }

    #[tokio::test(start_paused = true)]
    async fn test_ctrl_u_clears_input() {
        let mut app = make_app();
        type_text(&mut app, "abc");
        app.handle_key(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL));

        assert!(app.input.is_empty());
        assert_eq!(app.cursor_position, 0);
        assert_eq!(app.controller.query(), "");
    }

    #[test]
    fn test_escape_quits() {
        let mut app = make_app();
        app.handle_key(key(KeyCode::Esc));
        assert!(app.should_quit);
    }

    #[test]
    fn test_backspace_at_start_is_noop() {
        let mut app = make_app();
        app.handle_key(key(KeyCode::Backspace));
        assert!(app.input.is_empty());
    }

    #[test]
    fn test_click_outside_hides_and_input_click_restores() {
        let mut app = make_app();
        app.set_widget_areas(Rect::new(1, 1, 40, 3), Rect::new(1, 4, 40, 10));

        assert!(app.handle_mouse(press(60, 20)));
        assert!(!app.dismissal.is_visible());

        // inside the list area: no change while hidden
        assert!(!app.handle_mouse(press(5, 8)));
        assert!(!app.dismissal.is_visible());

        assert!(app.handle_mouse(press(5, 2)));
        assert!(app.dismissal.is_visible());
    }

    #[test]
    fn test_click_inside_list_keeps_visible() {
        let mut app = make_app();
        app.set_widget_areas(Rect::new(1, 1, 40, 3), Rect::new(1, 4, 40, 10));

        assert!(!app.handle_mouse(press(10, 10)));
        assert!(app.dismissal.is_visible());
    }

    #[tokio::test(start_paused = true)]
    async fn test_typing_refocuses_hidden_list() {
        let mut app = make_app();
        app.set_widget_areas(Rect::new(1, 1, 40, 3), Rect::new(1, 4, 40, 10));
        app.handle_mouse(press(60, 20));

        type_text(&mut app, "a");
        assert!(app.dismissal.is_visible());
    }

    #[tokio::test(start_paused = true)]
    async fn test_results_flow_into_shows_results() {
        let mut app = make_app();
        type_text(&mut app, "abc");
        app.controller.settle().await;

        assert!(app.shows_results());
        assert_eq!(app.controller.store().current().len(), 4);
    }
}
