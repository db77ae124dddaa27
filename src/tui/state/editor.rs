//! Property field editor

use unicode_width::UnicodeWidthStr;

/// Edit buffer for the focused property field.
///
/// The cursor is a byte offset that always sits on a char boundary.
#[derive(Debug, Default, Clone)]
pub struct FieldEditor {
    /// Focused property index
    focus: usize,
    buffer: String,
    cursor: usize,
}

impl FieldEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Focus field `index`, loading its current value with the cursor at the end
    pub fn focus(&mut self, index: usize, value: &str) {
        self.focus = index;
        self.buffer = value.to_string();
        self.cursor = self.buffer.len();
    }

    /// Focused field index
    pub fn focused(&self) -> usize {
        self.focus
    }

    pub fn value(&self) -> &str {
        &self.buffer
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Display width of the text left of the cursor
    pub fn visual_cursor(&self) -> usize {
        self.buffer[..self.cursor].width()
    }

    /// Text left and right of the cursor
    pub fn split_at_cursor(&self) -> (&str, &str) {
        self.buffer.split_at(self.cursor)
    }

    pub fn insert(&mut self, c: char) {
        self.buffer.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Delete the char before the cursor. Returns whether anything changed.
    pub fn backspace(&mut self) -> bool {
        match self.buffer[..self.cursor].chars().next_back() {
            Some(c) => {
                self.cursor -= c.len_utf8();
                self.buffer.remove(self.cursor);
                true
            }
            None => false,
        }
    }

    /// Delete the char under the cursor. Returns whether anything changed.
    pub fn delete(&mut self) -> bool {
        if self.cursor < self.buffer.len() {
            self.buffer.remove(self.cursor);
            true
        } else {
            false
        }
    }

    pub fn left(&mut self) {
        if let Some(c) = self.buffer[..self.cursor].chars().next_back() {
            self.cursor -= c.len_utf8();
        }
    }

    pub fn right(&mut self) {
        if let Some(c) = self.buffer[self.cursor..].chars().next() {
            self.cursor += c.len_utf8();
        }
    }

    pub fn home(&mut self) {
        self.cursor = 0;
    }

    pub fn end(&mut self) {
        self.cursor = self.buffer.len();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_loads_value() {
        let mut editor = FieldEditor::new();
        editor.focus(2, "Age");
        assert_eq!(editor.focused(), 2);
        assert_eq!(editor.value(), "Age");
        assert_eq!(editor.cursor(), 3);
    }

    #[test]
    fn test_multibyte_editing() {
        let mut editor = FieldEditor::new();
        editor.focus(0, "");
        for c in "年龄x".chars() {
            editor.insert(c);
        }
        assert_eq!(editor.visual_cursor(), 5);

        editor.left();
        assert!(editor.backspace());
        assert_eq!(editor.value(), "年x");
        assert_eq!(editor.split_at_cursor(), ("年", "x"));

        editor.home();
        assert!(!editor.backspace());
        assert!(editor.delete());
        assert_eq!(editor.value(), "x");

        editor.end();
        assert!(!editor.delete());
        editor.right();
        assert_eq!(editor.cursor(), 1);
    }
}
