use crate::interactive::constants::{PAGE_SIZE, ROLE_LIST_COLUMNS};
use crate::interactive::ui::components::Component;
use crate::interactive::ui::events::Message;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

/// The filtered roles, laid out column-major across `ROLE_LIST_COLUMNS` columns.
#[derive(Default)]
pub struct RoleList {
    roles: Vec<String>,
    selected_index: usize,
    highlight: bool,
    empty_message: String,
}

impl RoleList {
    pub fn new() -> Self {
        Self {
            roles: Vec::new(),
            selected_index: 0,
            highlight: false,
            empty_message: "No roles".to_string(),
        }
    }

    pub fn set_roles(&mut self, roles: &[String]) {
        if self.roles != roles {
            self.roles = roles.to_vec();
        }
        if self.selected_index >= self.roles.len() {
            self.selected_index = 0;
        }
    }

    pub fn set_selected_index(&mut self, index: usize) {
        if index < self.roles.len() {
            self.selected_index = index;
        }
    }

    pub fn set_highlight(&mut self, highlight: bool) {
        self.highlight = highlight;
    }

    pub fn set_empty_message(&mut self, message: impl Into<String>) {
        self.empty_message = message.into();
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn selected_role(&self) -> Option<&str> {
        self.roles.get(self.selected_index).map(String::as_str)
    }

    fn select(&mut self, index: usize) -> Option<Message> {
        let last = self.roles.len().checked_sub(1)?;
        let index = index.min(last);
        if index == self.selected_index {
            return None;
        }
        self.selected_index = index;
        Some(Message::SelectRole(index))
    }

    /// First index of the page holding the selection, for `rows` rows per column.
    pub(crate) fn page_start(&self, rows: usize) -> usize {
        let capacity = rows * ROLE_LIST_COLUMNS;
        if capacity == 0 {
            return 0;
        }
        (self.selected_index / capacity) * capacity
    }
}

impl Component for RoleList {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(format!("Roles ({})", self.roles.len()))
            .borders(Borders::ALL);
        let inner = block.inner(area);
        f.render_widget(block, area);

        if self.roles.is_empty() {
            let empty = Paragraph::new(self.empty_message.as_str())
                .style(Style::default().fg(Color::DarkGray));
            f.render_widget(empty, inner);
            return;
        }

        let rows = inner.height as usize;
        let start = self.page_start(rows);
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![
                Constraint::Ratio(1, ROLE_LIST_COLUMNS as u32);
                ROLE_LIST_COLUMNS
            ])
            .split(inner);

        for (column, column_area) in columns.iter().enumerate() {
            let column_start = start + column * rows;
            let items: Vec<ListItem> = self
                .roles
                .iter()
                .enumerate()
                .skip(column_start)
                .take(rows)
                .map(|(idx, role)| {
                    let style = if idx == self.selected_index && self.highlight {
                        Style::default()
                            .fg(Color::Black)
                            .bg(Color::Cyan)
                            .add_modifier(Modifier::BOLD)
                    } else {
                        Style::default()
                    };
                    ListItem::new(format!("• {role}")).style(style)
                })
                .collect();
            f.render_widget(List::new(items), *column_area);
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        match key.code {
            KeyCode::Up => self.select(self.selected_index.saturating_sub(1)),
            KeyCode::Down => self.select(self.selected_index + 1),
            KeyCode::Char('p') if key.modifiers == KeyModifiers::CONTROL => {
                self.select(self.selected_index.saturating_sub(1))
            }
            KeyCode::Char('n') if key.modifiers == KeyModifiers::CONTROL => {
                self.select(self.selected_index + 1)
            }
            KeyCode::PageUp => self.select(self.selected_index.saturating_sub(PAGE_SIZE)),
            KeyCode::PageDown => self.select(self.selected_index + PAGE_SIZE),
            KeyCode::Home => self.select(0),
            KeyCode::End => self.select(usize::MAX),
            _ => None,
        }
    }
}
