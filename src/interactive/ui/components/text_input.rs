use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    style::{Color, Style},
    text::Span,
};

/// A single-line editable field with a char-indexed cursor and emacs-style bindings.
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    text: String,
    cursor_position: usize,
}

impl TextInput {
    pub fn new() -> Self {
        Self {
            text: String::new(),
            cursor_position: 0,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor_position(&self) -> usize {
        self.cursor_position
    }

    /// Set the text and move cursor to the end
    pub fn set_text(&mut self, text: String) {
        self.cursor_position = text.chars().count();
        self.text = text;
    }

    /// Replace the text only if it differs. An unchanged text keeps its cursor.
    pub fn sync_text(&mut self, text: &str) {
        if self.text != text {
            self.set_text(text.to_string());
        }
    }

    pub fn set_cursor_position(&mut self, position: usize) {
        self.cursor_position = position.min(self.len());
    }

    fn len(&self) -> usize {
        self.text.chars().count()
    }

    fn byte_offset(&self, char_pos: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_pos)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }

    fn find_prev_word_boundary(&self, from: usize) -> usize {
        let chars: Vec<char> = self.text.chars().collect();
        let mut pos = from;

        while pos > 0 && chars.get(pos - 1).is_some_and(|c| c.is_whitespace()) {
            pos -= 1;
        }
        while pos > 0 && chars.get(pos - 1).is_some_and(|c| !c.is_whitespace()) {
            pos -= 1;
        }

        pos
    }

    fn find_next_word_boundary(&self, from: usize) -> usize {
        let chars: Vec<char> = self.text.chars().collect();
        let mut pos = from;
        let len = chars.len();

        while pos < len && chars.get(pos).is_some_and(|c| !c.is_whitespace()) {
            pos += 1;
        }
        while pos < len && chars.get(pos).is_some_and(|c| c.is_whitespace()) {
            pos += 1;
        }

        pos
    }

    /// Delete chars in `start..end` and return if text changed
    fn delete_range(&mut self, start: usize, end: usize) -> bool {
        if start >= end || end > self.len() {
            return false;
        }

        let byte_start = self.byte_offset(start);
        let byte_end = self.byte_offset(end);
        self.text.drain(byte_start..byte_end);
        self.cursor_position = start;
        true
    }

    /// Render the text with cursor as styled spans
    pub fn render_cursor_spans(&self, show_cursor: bool) -> Vec<Span<'_>> {
        let cursor_style = Style::default().bg(Color::White).fg(Color::Black);

        if !show_cursor {
            return vec![Span::raw(self.text.as_str())];
        }

        if self.cursor_position < self.len() {
            let split = self.byte_offset(self.cursor_position);
            let (before, rest) = self.text.split_at(split);
            let mut rest_chars = rest.chars();
            let under_cursor = rest_chars.next().unwrap_or(' ').to_string();
            let after = rest_chars.as_str();

            let mut spans = Vec::new();
            if !before.is_empty() {
                spans.push(Span::raw(before));
            }
            spans.push(Span::styled(under_cursor, cursor_style));
            if !after.is_empty() {
                spans.push(Span::raw(after));
            }
            spans
        } else {
            vec![
                Span::raw(self.text.as_str()),
                Span::styled(" ", cursor_style),
            ]
        }
    }

    /// Handle a key event and return true if the text changed
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('a') => {
                    self.cursor_position = 0;
                    false
                }
                KeyCode::Char('e') => {
                    self.cursor_position = self.len();
                    false
                }
                KeyCode::Char('b') => {
                    self.cursor_position = self.cursor_position.saturating_sub(1);
                    false
                }
                KeyCode::Char('f') => {
                    self.cursor_position = (self.cursor_position + 1).min(self.len());
                    false
                }
                // Same as backspace
                KeyCode::Char('h') => self.backspace(),
                KeyCode::Char('d') => self.delete(),
                KeyCode::Char('w') => {
                    let new_pos = self.find_prev_word_boundary(self.cursor_position);
                    self.delete_range(new_pos, self.cursor_position)
                }
                KeyCode::Char('u') => self.delete_range(0, self.cursor_position),
                KeyCode::Char('k') => self.delete_range(self.cursor_position, self.len()),
                _ => false,
            };
        }

        if key.modifiers.contains(KeyModifiers::ALT) {
            match key.code {
                KeyCode::Char('b') => {
                    self.cursor_position = self.find_prev_word_boundary(self.cursor_position);
                }
                KeyCode::Char('f') => {
                    self.cursor_position = self.find_next_word_boundary(self.cursor_position);
                }
                _ => {}
            }
            return false;
        }

        match key.code {
            KeyCode::Char(c) => {
                let byte_pos = self.byte_offset(self.cursor_position);
                self.text.insert(byte_pos, c);
                self.cursor_position += 1;
                true
            }
            KeyCode::Backspace => self.backspace(),
            KeyCode::Delete => self.delete(),
            KeyCode::Left => {
                self.cursor_position = self.cursor_position.saturating_sub(1);
                false
            }
            KeyCode::Right => {
                self.cursor_position = (self.cursor_position + 1).min(self.len());
                false
            }
            KeyCode::Home => {
                self.cursor_position = 0;
                false
            }
            KeyCode::End => {
                self.cursor_position = self.len();
                false
            }
            _ => false,
        }
    }

    fn backspace(&mut self) -> bool {
        if self.cursor_position == 0 {
            return false;
        }
        self.delete_range(self.cursor_position - 1, self.cursor_position)
    }

    fn delete(&mut self) -> bool {
        let pos = self.cursor_position;
        let changed = self.delete_range(pos, pos + 1);
        self.cursor_position = pos;
        changed
    }
}
