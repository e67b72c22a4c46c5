use crate::interactive::ui::components::Component;
use crate::interactive::ui::components::text_input::TextInput;
use crate::interactive::ui::events::Message;
use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

/// Role search input. Every edit emits `QueryChanged`.
pub struct SearchBar {
    input: TextInput,
    focused: bool,
    is_loading: bool,
    total: usize,
    shown: usize,
}

impl Default for SearchBar {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchBar {
    pub fn new() -> Self {
        Self {
            input: TextInput::new(),
            focused: true,
            is_loading: false,
            total: 0,
            shown: 0,
        }
    }

    pub fn set_query(&mut self, query: &str) {
        self.input.sync_text(query);
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    pub fn set_loading(&mut self, is_loading: bool) {
        self.is_loading = is_loading;
    }

    pub fn set_counts(&mut self, shown: usize, total: usize) {
        self.shown = shown;
        self.total = total;
    }

    pub fn get_query(&self) -> &str {
        self.input.text()
    }

    fn title(&self) -> String {
        if self.is_loading {
            "Search roles [loading...]".to_string()
        } else {
            format!("Search roles ({}/{})", self.shown, self.total)
        }
    }
}

impl Component for SearchBar {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let border_style = if self.focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let input = Paragraph::new(Line::from(self.input.render_cursor_spans(self.focused)))
            .block(
                Block::default()
                    .title(self.title())
                    .borders(Borders::ALL)
                    .border_style(border_style),
            );

        f.render_widget(input, area);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        if self.input.handle_key(key) {
            Some(Message::QueryChanged(self.input.text().to_string()))
        } else {
            None
        }
    }
}
