//! Single-line text input handling (pure state transitions).
//!
//! Shared by the expression field and the line-limit field. Cursor positions
//! are character indices, so multi-byte input never splits a code point.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Text plus cursor position (in chars).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextInput {
    text: String,
    cursor: usize,
}

impl TextInput {
    /// Input holding `text` with the cursor at the end.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.chars().count();
        Self { text, cursor }
    }

    /// Current text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Cursor position in chars, `0..=char_len`.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    fn byte_offset(&self, char_idx: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }
}

/// One editing operation on a [`TextInput`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEdit {
    /// Insert a character at the cursor and advance.
    Insert(char),
    /// Delete the character before the cursor.
    Backspace,
    /// Delete the character under the cursor.
    Delete,
    /// Cursor one left, saturating at 0.
    Left,
    /// Cursor one right, saturating at the end.
    Right,
    /// Cursor to start.
    Home,
    /// Cursor to end.
    End,
}

impl TextEdit {
    /// Map a key event to an edit, if it is a text editing key.
    ///
    /// Characters typed with Ctrl or Alt are not edits; they belong to key
    /// bindings.
    pub fn from_key(key: KeyEvent) -> Option<Self> {
        match key.code {
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                Some(TextEdit::Insert(c))
            }
            KeyCode::Backspace => Some(TextEdit::Backspace),
            KeyCode::Delete => Some(TextEdit::Delete),
            KeyCode::Left => Some(TextEdit::Left),
            KeyCode::Right => Some(TextEdit::Right),
            KeyCode::Home => Some(TextEdit::Home),
            KeyCode::End => Some(TextEdit::End),
            _ => None,
        }
    }
}

/// Apply an edit, returning the new input.
pub fn apply_edit(mut input: TextInput, edit: TextEdit) -> TextInput {
    let len = input.char_len();

    match edit {
        TextEdit::Insert(ch) => {
            let at = input.byte_offset(input.cursor);
            input.text.insert(at, ch);
            input.cursor += 1;
        }
        TextEdit::Backspace => {
            // cursor == 0, nothing to delete
            if input.cursor > 0 {
                let at = input.byte_offset(input.cursor - 1);
                input.text.remove(at);
                input.cursor -= 1;
            }
        }
        TextEdit::Delete => {
            if input.cursor < len {
                let at = input.byte_offset(input.cursor);
                input.text.remove(at);
            }
        }
        TextEdit::Left => input.cursor = input.cursor.saturating_sub(1),
        TextEdit::Right => input.cursor = (input.cursor + 1).min(len),
        TextEdit::Home => input.cursor = 0,
        TextEdit::End => input.cursor = len,
    }

    input
}

#[cfg(test)]
#[path = "text_input_tests.rs"]
mod tests;
