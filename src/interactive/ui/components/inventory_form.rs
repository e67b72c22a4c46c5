use crate::api::Style as InventoryStyle;
use crate::interactive::domain::models::Focus;
use crate::interactive::ui::components::Component;
use crate::interactive::ui::components::text_input::TextInput;
use crate::interactive::ui::events::Message;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Host, style and ignore-list fields plus the download action.
#[derive(Default)]
pub struct InventoryForm {
    host: TextInput,
    style: InventoryStyle,
    ignore: TextInput,
    focus: Option<Focus>,
    in_flight: usize,
}

impl InventoryForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_values(&mut self, host: &str, style: InventoryStyle, ignore: &str) {
        self.host.sync_text(host);
        self.style = style;
        self.ignore.sync_text(ignore);
    }

    /// `None` when focus is outside the form.
    pub fn set_focus(&mut self, focus: Option<Focus>) {
        self.focus = focus.filter(|f| f.is_form_field());
    }

    pub fn set_in_flight(&mut self, in_flight: usize) {
        self.in_flight = in_flight;
    }

    pub fn host(&self) -> &str {
        self.host.text()
    }

    pub fn ignore(&self) -> &str {
        self.ignore.text()
    }

    fn label(&self, text: &'static str, field: Focus) -> Span<'static> {
        let style = if self.focus == Some(field) {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Cyan)
        };
        Span::styled(text, style)
    }

    fn title(&self) -> String {
        match self.in_flight {
            0 => "Inventory".to_string(),
            1 => "Inventory [generating...]".to_string(),
            n => format!("Inventory [generating x{n}...]"),
        }
    }
}

impl Component for InventoryForm {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let mut spans = vec![self.label("Host: ", Focus::Host)];
        spans.extend(self.host.render_cursor_spans(self.focus == Some(Focus::Host)));
        spans.push(Span::raw("  "));
        spans.push(self.label("Style: ", Focus::Style));
        let style_value = format!("< {} >", self.style);
        if self.focus == Some(Focus::Style) {
            spans.push(Span::styled(
                style_value,
                Style::default().bg(Color::White).fg(Color::Black),
            ));
        } else {
            spans.push(Span::raw(style_value));
        }
        spans.push(Span::raw("  "));
        spans.push(self.label("Ignore (comma-separated): ", Focus::Ignore));
        if self.ignore.text().is_empty() && self.focus != Some(Focus::Ignore) {
            spans.push(Span::styled(
                "web-app-x,svc-db-y",
                Style::default().fg(Color::DarkGray),
            ));
        } else {
            spans.extend(
                self.ignore
                    .render_cursor_spans(self.focus == Some(Focus::Ignore)),
            );
        }

        let border_style = if self.focus.is_some() {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let form = Paragraph::new(Line::from(spans)).block(
            Block::default()
                .title(self.title())
                .title_bottom(" Enter / Ctrl+G: Download inventory ")
                .borders(Borders::ALL)
                .border_style(border_style),
        );
        f.render_widget(form, area);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        let focus = self.focus?;
        if key.code == KeyCode::Enter {
            return Some(Message::GenerateRequested);
        }

        match focus {
            Focus::Host => self
                .host
                .handle_key(key)
                .then(|| Message::HostChanged(self.host.text().to_string())),
            Focus::Ignore => self
                .ignore
                .handle_key(key)
                .then(|| Message::IgnoreChanged(self.ignore.text().to_string())),
            Focus::Style => match key.code {
                KeyCode::Char(' ') | KeyCode::Left | KeyCode::Right => {
                    self.style = self.style.toggle();
                    Some(Message::ToggleStyle)
                }
                _ => None,
            },
            Focus::Search => None,
        }
    }
}
