use crate::checklist::ItemId;

/// What a confirmed input line is applied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditTarget {
    NewItem,
    Rename(ItemId),
}

/// The single-line name input used for both adding and renaming.
/// The cursor is a byte offset that always sits on a char boundary.
#[derive(Debug)]
pub struct EditState {
    pub edit_buffer: String,
    pub edit_cursor_position: usize,
    pub target: Option<EditTarget>,
}

impl EditState {
    pub fn new() -> Self {
        Self {
            edit_buffer: String::new(),
            edit_cursor_position: 0,
            target: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.target.is_some()
    }

    pub fn enter_edit_mode(&mut self, target: EditTarget, content: String) {
        self.edit_buffer = content;
        self.edit_cursor_position = self.edit_buffer.len();
        self.target = Some(target);
    }

    pub fn exit_edit_mode(&mut self) {
        self.target = None;
        self.edit_buffer.clear();
        self.edit_cursor_position = 0;
    }

    pub fn insert_char(&mut self, c: char) {
        self.edit_buffer.insert(self.edit_cursor_position, c);
        self.edit_cursor_position += c.len_utf8();
    }

    pub fn backspace(&mut self) {
        if let Some(width) = self.previous_char_width() {
            self.edit_cursor_position -= width;
            self.edit_buffer.remove(self.edit_cursor_position);
        }
    }

    pub fn delete(&mut self) {
        if self.edit_cursor_position < self.edit_buffer.len() {
            self.edit_buffer.remove(self.edit_cursor_position);
        }
    }

    pub fn move_cursor_left(&mut self) {
        if let Some(width) = self.previous_char_width() {
            self.edit_cursor_position -= width;
        }
    }

    pub fn move_cursor_right(&mut self) {
        if let Some(ch) = self.edit_buffer[self.edit_cursor_position..].chars().next() {
            self.edit_cursor_position += ch.len_utf8();
        }
    }

    pub fn move_cursor_home(&mut self) {
        self.edit_cursor_position = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.edit_cursor_position = self.edit_buffer.len();
    }

    /// Buffer split at the cursor, for rendering.
    pub fn split_at_cursor(&self) -> (&str, &str) {
        self.edit_buffer.split_at(self.edit_cursor_position)
    }

    fn previous_char_width(&self) -> Option<usize> {
        self.edit_buffer[..self.edit_cursor_position]
            .chars()
            .next_back()
            .map(char::len_utf8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_state_new() {
        let edit_state = EditState::new();
        assert!(!edit_state.is_active());
        assert!(edit_state.edit_buffer.is_empty());
        assert_eq!(edit_state.edit_cursor_position, 0);
    }

    #[test]
    fn test_enter_edit_mode() {
        let mut edit_state = EditState::new();
        edit_state.enter_edit_mode(EditTarget::NewItem, "Hello World".to_string());

        assert!(edit_state.is_active());
        assert_eq!(edit_state.target, Some(EditTarget::NewItem));
        assert_eq!(edit_state.edit_buffer, "Hello World");
        assert_eq!(edit_state.edit_cursor_position, "Hello World".len());
    }

    #[test]
    fn test_exit_edit_mode() {
        let mut edit_state = EditState::new();
        edit_state.enter_edit_mode(EditTarget::Rename(ItemId::new()), "Hello".to_string());
        edit_state.exit_edit_mode();

        assert!(!edit_state.is_active());
        assert!(edit_state.edit_buffer.is_empty());
        assert_eq!(edit_state.edit_cursor_position, 0);
    }

    #[test]
    fn test_insert_and_backspace() {
        let mut edit_state = EditState::new();
        edit_state.enter_edit_mode(EditTarget::NewItem, "Hello".to_string());
        edit_state.insert_char('!');
        assert_eq!(edit_state.edit_buffer, "Hello!");
        assert_eq!(edit_state.edit_cursor_position, 6);

        edit_state.backspace();
        edit_state.backspace();
        assert_eq!(edit_state.edit_buffer, "Hell");
        assert_eq!(edit_state.edit_cursor_position, 4);
    }

    #[test]
    fn test_delete_at_start() {
        let mut edit_state = EditState::new();
        edit_state.enter_edit_mode(EditTarget::NewItem, "Hello".to_string());
        edit_state.move_cursor_home();
        edit_state.delete();

        assert_eq!(edit_state.edit_buffer, "ello");
        assert_eq!(edit_state.edit_cursor_position, 0);
    }

    #[test]
    fn test_cursor_movement() {
        let mut edit_state = EditState::new();
        edit_state.enter_edit_mode(EditTarget::NewItem, "Hello".to_string());

        edit_state.move_cursor_left();
        assert_eq!(edit_state.edit_cursor_position, 4);

        edit_state.move_cursor_right();
        assert_eq!(edit_state.edit_cursor_position, 5);

        // Already at the end
        edit_state.move_cursor_right();
        assert_eq!(edit_state.edit_cursor_position, 5);

        edit_state.move_cursor_home();
        assert_eq!(edit_state.edit_cursor_position, 0);
        edit_state.move_cursor_left();
        assert_eq!(edit_state.edit_cursor_position, 0);

        edit_state.move_cursor_end();
        assert_eq!(edit_state.edit_cursor_position, 5);
    }

    #[test]
    fn test_multibyte_editing() {
        let mut edit_state = EditState::new();
        edit_state.enter_edit_mode(EditTarget::NewItem, "りんご".to_string());

        edit_state.move_cursor_left();
        assert_eq!(edit_state.edit_cursor_position, "りん".len());

        edit_state.insert_char('の');
        assert_eq!(edit_state.edit_buffer, "りんのご");

        edit_state.backspace();
        edit_state.backspace();
        assert_eq!(edit_state.edit_buffer, "りご");
        assert_eq!(edit_state.edit_cursor_position, "り".len());

        edit_state.move_cursor_right();
        assert_eq!(edit_state.split_at_cursor(), ("りご", ""));
    }
}
