use crate::keymap::Action;
use crossterm::event::{KeyCode, KeyModifiers};

/// A text input field with encapsulated state.
///
/// The cursor is a character index, not a byte offset, so multi-byte input
/// edits correctly.
///
/// # Example
/// ```
/// use slider::utils::text_input::TextInput;
///
/// let mut input = TextInput::new();
/// input.insert_char('h');
/// input.insert_char('i');
/// assert_eq!(input.text(), "hi");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    text: String,
    cursor: usize,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a text input with initial text, cursor at the end.
    pub fn with_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.chars().count();
        Self { text, cursor }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Check if the text is empty (ignoring whitespace).
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }

    fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_index)
            .map_or(self.text.len(), |(i, _)| i)
    }

    /// Set the text and move cursor to end.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.cursor = self.char_count();
    }

    /// Insert a character at the cursor position. Control characters are ignored.
    pub fn insert_char(&mut self, c: char) {
        if c.is_control() {
            return;
        }
        let at = self.byte_index(self.cursor);
        self.text.insert(at, c);
        self.cursor += 1;
    }

    /// Delete the character before the cursor.
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let start = self.byte_index(self.cursor - 1);
        let end = self.byte_index(self.cursor);
        self.text.replace_range(start..end, "");
        self.cursor -= 1;
    }

    /// Delete the character at the cursor position.
    pub fn delete(&mut self) {
        if self.cursor >= self.char_count() {
            return;
        }
        let start = self.byte_index(self.cursor);
        let end = self.byte_index(self.cursor + 1);
        self.text.replace_range(start..end, "");
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.char_count());
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_count();
    }

    /// Handle an editing action from the keymap.
    ///
    /// Returns true if the action was handled.
    pub fn handle_action(&mut self, action: Action) -> bool {
        match action {
            Action::MoveLeft => self.move_left(),
            Action::MoveRight => self.move_right(),
            Action::Home => self.move_home(),
            Action::End => self.move_end(),
            Action::Backspace => self.backspace(),
            Action::DeleteChar => self.delete(),
            _ => return false,
        }
        true
    }
}

/// The character a key event would type, if any.
///
/// Keys carrying Ctrl or Alt never type, so they stay available for bindings.
pub fn typed_char(code: KeyCode, modifiers: KeyModifiers) -> Option<char> {
    match code {
        KeyCode::Char(c)
            if !modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            Some(c)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_input_new() {
        let input = TextInput::new();
        assert_eq!(input.text(), "");
        assert_eq!(input.cursor(), 0);
        assert!(input.is_empty());
    }

    #[test]
    fn test_insert_in_middle() {
        let mut input = TextInput::with_text("hello");
        input.move_home();
        input.move_right();
        input.move_right();
        input.insert_char('x');
        assert_eq!(input.text(), "hexllo");
        assert_eq!(input.cursor(), 3);
    }

    #[test]
    fn test_unicode_handling() {
        let mut input = TextInput::with_text("Zoë");
        input.backspace();
        assert_eq!(input.text(), "Zo");
        input.insert_char('é');
        input.move_left();
        input.insert_char('x');
        assert_eq!(input.text(), "Zoxé");
        assert_eq!(input.cursor(), 3);
    }

    #[test]
    fn test_backspace_at_start() {
        let mut input = TextInput::with_text("hello");
        input.move_home();
        input.backspace();
        assert_eq!(input.text(), "hello");
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn test_delete() {
        let mut input = TextInput::with_text("hello");
        input.move_home();
        input.delete();
        assert_eq!(input.text(), "ello");
        assert_eq!(input.cursor(), 0);
        input.move_end();
        input.delete();
        assert_eq!(input.text(), "ello");
    }

    #[test]
    fn test_control_chars_ignored() {
        let mut input = TextInput::new();
        input.insert_char('\u{7}');
        assert_eq!(input.text(), "");
    }

    #[test]
    fn test_handle_action() {
        let mut input = TextInput::with_text("hello");
        assert!(input.handle_action(Action::Home));
        assert_eq!(input.cursor(), 0);
        assert!(input.handle_action(Action::MoveRight));
        assert!(input.handle_action(Action::DeleteChar));
        assert_eq!(input.text(), "hllo");
        assert!(!input.handle_action(Action::Confirm));
    }

    #[test]
    fn test_typed_char() {
        assert_eq!(typed_char(KeyCode::Char('a'), KeyModifiers::NONE), Some('a'));
        assert_eq!(typed_char(KeyCode::Char('A'), KeyModifiers::SHIFT), Some('A'));
        assert_eq!(typed_char(KeyCode::Char('c'), KeyModifiers::CONTROL), None);
        assert_eq!(typed_char(KeyCode::Enter, KeyModifiers::NONE), None);
    }
}
