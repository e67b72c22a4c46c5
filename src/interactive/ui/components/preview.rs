use crate::interactive::ui::components::Component;
use crate::interactive::ui::events::Message;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
};

/// Read-only view of the last generated inventory, shown verbatim.
#[derive(Default)]
pub struct Preview {
    content: String,
    filename: Option<String>,
    scroll: u16,
}

impl Preview {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_content(&mut self, content: &str, filename: Option<&str>) {
        if self.content != content {
            self.content = content.to_string();
        }
        self.filename = filename.map(String::from);
    }

    pub fn set_scroll(&mut self, scroll: u16) {
        self.scroll = scroll;
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

impl Component for Preview {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let title = match &self.filename {
            Some(name) => format!("Preview - {name}"),
            None => "Preview".to_string(),
        };

        // Raw text: no markup is interpreted
        let paragraph = Paragraph::new(self.content.as_str())
            .style(Style::default().fg(Color::White))
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0))
            .block(Block::default().title(title).borders(Borders::ALL));

        f.render_widget(paragraph, area);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        match key.code {
            KeyCode::PageUp => Some(Message::PreviewScrollUp),
            KeyCode::PageDown => Some(Message::PreviewScrollDown),
            _ => None,
        }
    }
}
