//! Single-line text field.

/// Key input events, independent of the terminal library.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    /// Printable character.
    Char(char),
    /// Backspace key (delete character before cursor).
    Backspace,
    /// Delete key (delete character at cursor).
    Delete,
    /// Left arrow.
    Left,
    /// Right arrow.
    Right,
    /// Home key (cursor to start).
    Home,
    /// End key (cursor to end).
    End,
    /// Tab key (next field).
    Tab,
    /// Shift+Tab (previous field).
    BackTab,
    /// Ctrl+C.
    CtrlC,
    /// Ctrl+U, delete from the start of the line to the cursor.
    DeleteToStart,
    /// Ctrl+K, delete from the cursor to the end of the line.
    DeleteToEnd,
    /// Ctrl+W, delete the word before the cursor.
    DeleteWordBackward,
}

/// Editable text buffer with a cursor and a character limit.
///
/// The cursor counts characters, not bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextField {
    buffer: String,
    cursor: usize,
    placeholder: &'static str,
    char_limit: usize,
}

impl TextField {
    /// Create an empty field.
    pub fn new(placeholder: &'static str, char_limit: usize) -> Self {
        TextField {
            buffer: String::new(),
            cursor: 0,
            placeholder,
            char_limit,
        }
    }

    /// Current text.
    pub fn value(&self) -> &str {
        &self.buffer
    }

    /// Cursor position in characters.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Hint shown while the field is empty.
    pub fn placeholder(&self) -> &'static str {
        self.placeholder
    }

    /// Maximum number of characters the field accepts.
    pub fn char_limit(&self) -> usize {
        self.char_limit
    }

    fn len(&self) -> usize {
        self.buffer.chars().count()
    }

    fn byte_offset(&self, char_idx: usize) -> usize {
        self.buffer
            .char_indices()
            .nth(char_idx)
            .map_or(self.buffer.len(), |(i, _)| i)
    }

    /// Apply one key. Returns true if the text changed.
    pub fn handle_key(&mut self, key: KeyInput) -> bool {
        match key {
            KeyInput::Char(c) if !c.is_control() => {
                if self.len() >= self.char_limit {
                    return false;
                }
                let at = self.byte_offset(self.cursor);
                self.buffer.insert(at, c);
                self.cursor += 1;
                true
            }
            KeyInput::Backspace => {
                if self.cursor == 0 {
                    return false;
                }
                self.cursor -= 1;
                let at = self.byte_offset(self.cursor);
                self.buffer.remove(at);
                true
            }
            KeyInput::Delete => {
                if self.cursor >= self.len() {
                    return false;
                }
                let at = self.byte_offset(self.cursor);
                self.buffer.remove(at);
                true
            }
            KeyInput::DeleteToStart => {
                if self.cursor == 0 {
                    return false;
                }
                let at = self.byte_offset(self.cursor);
                self.buffer.replace_range(..at, "");
                self.cursor = 0;
                true
            }
            KeyInput::DeleteToEnd => {
                if self.cursor >= self.len() {
                    return false;
                }
                let at = self.byte_offset(self.cursor);
                self.buffer.truncate(at);
                true
            }
            KeyInput::DeleteWordBackward => {
                let chars: Vec<char> = self.buffer.chars().take(self.cursor).collect();
                let trailing_space = chars
                    .iter()
                    .rev()
                    .take_while(|c| c.is_whitespace())
                    .count();
                let word = chars[..chars.len() - trailing_space]
                    .iter()
                    .rev()
                    .take_while(|c| !c.is_whitespace())
                    .count();
                let start = self.cursor - trailing_space - word;
                if start == self.cursor {
                    return false;
                }
                let (from, to) = (self.byte_offset(start), self.byte_offset(self.cursor));
                self.buffer.replace_range(from..to, "");
                self.cursor = start;
                true
            }
            KeyInput::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                false
            }
            KeyInput::Right => {
                self.cursor = (self.cursor + 1).min(self.len());
                false
            }
            KeyInput::Home => {
                self.cursor = 0;
                false
            }
            KeyInput::End => {
                self.cursor = self.len();
                false
            }
            _ => false,
        }
    }
}
