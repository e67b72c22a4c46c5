use crate::interactive::constants::{HELP_DIALOG_MARGIN, HELP_DIALOG_MAX_WIDTH};
use crate::interactive::ui::components::Component;
use crate::interactive::ui::events::Message;
use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

pub struct HelpDialog;

impl Default for HelpDialog {
    fn default() -> Self {
        Self::new()
    }
}

impl HelpDialog {
    pub fn new() -> Self {
        Self
    }

    fn section(title: &'static str) -> Line<'static> {
        Line::from(vec![Span::styled(
            title,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )])
    }

    fn get_help_text() -> Vec<Line<'static>> {
        vec![
            Line::from(vec![Span::styled(
                "Infinito Inventory Builder",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Self::section("Roles:"),
            Line::from("  type        - Filter roles (case-insensitive)"),
            Line::from("  ↑/↓         - Move through roles"),
            Line::from("  PgUp/PgDn   - Page through roles"),
            Line::from(""),
            Self::section("Form:"),
            Line::from("  Tab         - Next field (search, host, style, ignore)"),
            Line::from("  Shift+Tab   - Previous field"),
            Line::from("  Space/←/→   - Switch style (group/hostvars)"),
            Line::from("  Enter       - Generate and download inventory"),
            Line::from("  PgUp/PgDn   - Scroll preview"),
            Line::from(""),
            Self::section("Anywhere:"),
            Line::from("  Ctrl+G      - Generate and download inventory"),
            Line::from("  F1          - Show this help"),
            Line::from("  Esc         - Quit"),
            Line::from("  Ctrl+C x2   - Quit"),
            Line::from(""),
            Line::from("Press any key to close this help..."),
        ]
    }
}

impl Component for HelpDialog {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let help_text = Self::get_help_text();

        let width = HELP_DIALOG_MAX_WIDTH.min(area.width.saturating_sub(HELP_DIALOG_MARGIN));
        let height =
            (help_text.len() as u16 + 2).min(area.height.saturating_sub(HELP_DIALOG_MARGIN));

        let x = area.x + (area.width.saturating_sub(width)) / 2;
        let y = area.y + (area.height.saturating_sub(height)) / 2;
        let dialog_area = Rect::new(x, y, width, height);

        f.render_widget(Clear, dialog_area);

        let help = Paragraph::new(help_text)
            .block(
                Block::default()
                    .title(" Help ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .alignment(Alignment::Left);

        f.render_widget(help, dialog_area);
    }

    fn handle_key(&mut self, _key: KeyEvent) -> Option<Message> {
        Some(Message::CloseHelp)
    }
}
