use crate::interactive::ui::components::is_exit_prompt;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Paragraph,
};

const KEY_HINTS: &str =
    "Tab: Next field | ↑/↓: Roles | PgUp/PgDn: Scroll | Ctrl+G: Download | F1: Help | Esc: Quit";

/// Bottom line: the current status message, or key hints when there is none.
#[derive(Default)]
pub struct StatusBar {
    message: Option<String>,
}

impl StatusBar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_message(&mut self, message: Option<String>) {
        self.message = message;
    }

    pub fn render(&self, f: &mut Frame, area: Rect) {
        let paragraph = match &self.message {
            Some(message) if is_exit_prompt(&self.message) => Paragraph::new(message.as_str())
                .style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
            Some(message) => {
                Paragraph::new(message.as_str()).style(Style::default().fg(Color::Yellow))
            }
            None => Paragraph::new(KEY_HINTS).style(Style::default().fg(Color::DarkGray)),
        };
        f.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interactive::constants::EXIT_PROMPT;
    use crate::interactive::ui::components::test_support::buffer_to_string;
    use ratatui::{Terminal, backend::TestBackend};

    fn render(bar: &StatusBar) -> Terminal<TestBackend> {
        let mut terminal = Terminal::new(TestBackend::new(120, 1)).unwrap();
        terminal.draw(|f| bar.render(f, f.area())).unwrap();
        terminal
    }

    #[test]
    fn test_hints_without_message() {
        let bar = StatusBar::new();
        let content = buffer_to_string(render(&bar).backend().buffer());
        assert!(content.contains("Ctrl+G: Download"));
    }

    #[test]
    fn test_exit_prompt_is_highlighted() {
        let mut bar = StatusBar::new();
        bar.set_message(Some(EXIT_PROMPT.to_string()));
        let terminal = render(&bar);
        let buffer = terminal.backend().buffer();

        assert!(buffer_to_string(buffer).contains(EXIT_PROMPT));
        assert_eq!(buffer[(0, 0)].fg, Color::Red);
    }
}
