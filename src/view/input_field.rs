//! Bordered single-line input widget.

use crate::state::TextInput;
use crate::view::styles::FieldStyles;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use unicode_width::UnicodeWidthChar;

/// Input field widget.
///
/// Shows the cursor only when focused. Text wider than the field scrolls so
/// the cursor stays visible.
pub struct InputField<'a> {
    title: &'a str,
    input: &'a TextInput,
    focused: bool,
    styles: FieldStyles,
}

impl<'a> InputField<'a> {
    /// Create new InputField widget.
    pub fn new(title: &'a str, input: &'a TextInput) -> Self {
        Self {
            title,
            input,
            focused: false,
            styles: FieldStyles::default(),
        }
    }

    /// Mark the field focused.
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Override styles.
    pub fn styles(mut self, styles: FieldStyles) -> Self {
        self.styles = styles;
        self
    }
}

/// Index of the first char to show so that the cursor fits in `width` columns.
fn scroll_offset(chars: &[char], cursor: usize, width: usize) -> usize {
    if width == 0 {
        return cursor;
    }
    // One column is reserved for the cursor cell itself.
    let mut used = 1;
    let mut start = cursor;
    while start > 0 {
        let w = chars[start - 1].width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        start -= 1;
    }
    start
}

impl Widget for InputField<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(self.title)
            .border_style(self.styles.border(self.focused));
        let inner_width = block.inner(area).width as usize;

        let chars: Vec<char> = self.input.text().chars().collect();
        let cursor = self.input.cursor().min(chars.len());
        let start = scroll_offset(&chars, cursor, inner_width);

        let line = if self.focused {
            let before: String = chars[start..cursor].iter().collect();
            let (cursor_char, after) = match chars.get(cursor) {
                Some(c) => (c.to_string(), chars[cursor + 1..].iter().collect::<String>()),
                None => (" ".to_string(), String::new()),
            };
            Line::from(vec![
                Span::raw(before),
                Span::styled(cursor_char, self.styles.cursor),
                Span::raw(after),
            ])
        } else {
            Line::from(chars[start..].iter().collect::<String>())
        };

        Paragraph::new(line).block(block).render(area, buf);
    }
}
