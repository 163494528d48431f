use crate::checklist::models::normalize_name;
use crate::checklist::{Item, ItemStore, StoreError};
use crate::tui::edit::{EditState, EditTarget};
use crate::tui::handlers::{EditModeAction, HelpModeAction, KeyHandler, NormalModeAction};
use crate::tui::navigation::NavigationState;
use crossterm::event::KeyEvent;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{info, warn};

pub struct App {
    store: ItemStore,
    /// Last snapshot pushed by the store; everything drawn comes from here.
    view: Rc<RefCell<Vec<Item>>>,
    pub navigation: NavigationState,
    pub edit: EditState,
    pub help_mode: bool,
    pub should_quit: bool,
    pub status_message: Option<String>,
}

impl App {
    pub fn new(mut store: ItemStore) -> Self {
        let view = Rc::new(RefCell::new(store.list()));
        let sink = Rc::clone(&view);
        store.subscribe(move |items| *sink.borrow_mut() = items.to_vec());

        info!(items = store.len(), "checklist session started");

        Self {
            store,
            view,
            navigation: NavigationState::new(),
            edit: EditState::new(),
            help_mode: false,
            should_quit: false,
            status_message: None,
        }
    }

    pub fn items(&self) -> Vec<Item> {
        self.view.borrow().clone()
    }

    pub fn total_items(&self) -> usize {
        self.view.borrow().len()
    }

    pub fn checked_items(&self) -> usize {
        self.store.checked_count()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn selected_index(&self) -> usize {
        self.navigation.selected_index
    }

    pub fn edit_mode(&self) -> bool {
        self.edit.is_active()
    }

    pub fn handle_key_event(&mut self, key_event: KeyEvent) {
        if self.help_mode {
            self.handle_help_mode_key(key_event);
        } else if self.edit.is_active() {
            self.handle_edit_mode_key(key_event);
        } else {
            self.handle_normal_mode_key(key_event);
        }
    }

    fn handle_normal_mode_key(&mut self, key_event: KeyEvent) {
        self.status_message = None;
        match KeyHandler::handle_normal_mode_key(key_event) {
            NormalModeAction::Quit => {
                info!(items = self.store.len(), "checklist session ended");
                self.should_quit = true;
            }
            NormalModeAction::MoveSelectionUp => self.navigation.move_selection_up(),
            NormalModeAction::MoveSelectionDown => {
                let len = self.total_items();
                self.navigation.move_selection_down(len);
            }
            NormalModeAction::ToggleSelectedItem => self.toggle_selected_item(),
            NormalModeAction::AddItem => {
                self.edit.enter_edit_mode(EditTarget::NewItem, String::new());
            }
            NormalModeAction::RenameSelectedItem => self.enter_rename_mode(),
            NormalModeAction::DeleteSelectedItem => self.delete_selected_item(),
            NormalModeAction::ToggleHelpMode => self.help_mode = true,
            NormalModeAction::None => {}
        }
    }

    fn handle_help_mode_key(&mut self, key_event: KeyEvent) {
        if KeyHandler::handle_help_mode_key(key_event) == HelpModeAction::ExitHelpMode {
            self.help_mode = false;
        }
    }

    fn handle_edit_mode_key(&mut self, key_event: KeyEvent) {
        match KeyHandler::handle_edit_mode_key(key_event) {
            EditModeAction::CancelEdit => {
                self.status_message = None;
                self.edit.exit_edit_mode();
            }
            EditModeAction::ConfirmEdit => self.confirm_edit(),
            EditModeAction::Backspace => {
                self.status_message = None;
                self.edit.backspace();
            }
            EditModeAction::Delete => self.edit.delete(),
            EditModeAction::MoveCursorLeft => self.edit.move_cursor_left(),
            EditModeAction::MoveCursorRight => self.edit.move_cursor_right(),
            EditModeAction::MoveCursorHome => self.edit.move_cursor_home(),
            EditModeAction::MoveCursorEnd => self.edit.move_cursor_end(),
            EditModeAction::InsertChar(c) => {
                self.status_message = None;
                self.edit.insert_char(c);
            }
            EditModeAction::None => {}
        }
    }

    fn selected_item(&self) -> Option<Item> {
        self.view.borrow().get(self.navigation.selected_index).cloned()
    }

    fn toggle_selected_item(&mut self) {
        if let Some(item) = self.selected_item() {
            self.store.toggle_checked(item.id());
        }
    }

    fn enter_rename_mode(&mut self) {
        if let Some(item) = self.selected_item() {
            self.edit
                .enter_edit_mode(EditTarget::Rename(item.id()), item.name().to_string());
        }
    }

    fn delete_selected_item(&mut self) {
        match self.store.remove_at(self.navigation.selected_index) {
            Ok(_) => {
                let len = self.total_items();
                self.navigation.clamp(len);
            }
            Err(e @ StoreError::OutOfRange { .. }) => {
                warn!(error = %e, "delete rejected");
                self.status_message = Some("Nothing to delete".to_string());
            }
        }
    }

    /// A blank name keeps the input open, like a save button that refuses
    /// to close its dialog.
    fn confirm_edit(&mut self) {
        let Some(target) = self.edit.target else {
            return;
        };
        if normalize_name(&self.edit.edit_buffer).is_none() {
            self.status_message = Some("Name cannot be empty".to_string());
            return;
        }

        match target {
            EditTarget::NewItem => {
                if let Some(item) = self.store.add(&self.edit.edit_buffer) {
                    if let Some(position) = self.store.position(item.id()) {
                        let len = self.total_items();
                        self.navigation.select(position, len);
                    }
                }
            }
            EditTarget::Rename(id) => {
                self.store.rename(id, &self.edit.edit_buffer);
            }
        }

        self.status_message = None;
        self.edit.exit_edit_mode();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checklist::Locale;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn english_app() -> App {
        App::new(ItemStore::seeded(Locale::En))
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::from(code));
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn names(app: &App) -> Vec<String> {
        app.items().iter().map(|item| item.name().to_string()).collect()
    }

    #[test]
    fn test_view_starts_with_seed() {
        let app = english_app();
        assert_eq!(names(&app), vec!["Apple", "Orange", "Banana", "Pineapple"]);
        assert_eq!(app.total_items(), 4);
        assert_eq!(app.checked_items(), 2);
    }

    #[test]
    fn test_toggle_selected_item() {
        let mut app = english_app();

        press(&mut app, KeyCode::Enter);
        assert!(app.items()[0].is_checked());

        press(&mut app, KeyCode::Char(' '));
        assert!(!app.items()[0].is_checked());
    }

    #[test]
    fn test_navigation_and_toggle() {
        let mut app = english_app();
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.selected_index(), 2);

        press(&mut app, KeyCode::Enter);
        assert!(app.items()[2].is_checked());
        assert_eq!(app.checked_items(), 3);
    }

    #[test]
    fn test_add_item_through_input() {
        let mut app = english_app();

        press(&mut app, KeyCode::Char('a'));
        assert!(app.edit_mode());
        type_text(&mut app, "  Grape ");
        press(&mut app, KeyCode::Enter);

        assert!(!app.edit_mode());
        assert_eq!(app.total_items(), 5);
        let last = app.items().last().cloned().unwrap();
        assert_eq!(last.name(), "Grape");
        assert!(!last.is_checked());
        assert_eq!(app.selected_index(), 4);
    }

    #[test]
    fn test_blank_input_stays_open() {
        let mut app = english_app();

        press(&mut app, KeyCode::Char('a'));
        type_text(&mut app, "   ");
        press(&mut app, KeyCode::Enter);

        assert!(app.edit_mode());
        assert_eq!(app.total_items(), 4);
        assert!(app.status_message.is_some());

        press(&mut app, KeyCode::Esc);
        assert!(!app.edit_mode());
        assert_eq!(app.total_items(), 4);
    }

    #[test]
    fn test_typing_clears_empty_name_message() {
        let mut app = english_app();

        press(&mut app, KeyCode::Char('a'));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.status_message.as_deref(), Some("Name cannot be empty"));

        press(&mut app, KeyCode::Char('F'));
        assert!(app.status_message.is_none());

        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Enter);
        assert!(app.status_message.is_some());
        press(&mut app, KeyCode::Backspace);
        assert!(app.status_message.is_none());
        assert!(app.edit_mode());
    }

    #[test]
    fn test_cancel_add_changes_nothing() {
        let mut app = english_app();
        press(&mut app, KeyCode::Char('a'));
        type_text(&mut app, "Kiwi");
        press(&mut app, KeyCode::Esc);

        assert_eq!(names(&app), vec!["Apple", "Orange", "Banana", "Pineapple"]);
    }

    #[test]
    fn test_rename_selected_item() {
        let mut app = english_app();
        press(&mut app, KeyCode::Down);

        press(&mut app, KeyCode::Char('e'));
        assert_eq!(app.edit.edit_buffer, "Orange");
        for _ in 0.."Orange".len() {
            press(&mut app, KeyCode::Backspace);
        }
        type_text(&mut app, "Mandarin");
        press(&mut app, KeyCode::Enter);

        assert_eq!(names(&app), vec!["Apple", "Mandarin", "Banana", "Pineapple"]);
        assert!(app.items()[1].is_checked());
    }

    #[test]
    fn test_delete_selected_item() {
        let mut app = english_app();
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Char('d'));

        assert_eq!(names(&app), vec!["Apple", "Banana", "Pineapple"]);
        assert_eq!(app.selected_index(), 1);
    }

    #[test]
    fn test_delete_last_row_moves_selection_up() {
        let mut app = english_app();
        for _ in 0..3 {
            press(&mut app, KeyCode::Down);
        }
        press(&mut app, KeyCode::Char('d'));

        assert_eq!(app.total_items(), 3);
        assert_eq!(app.selected_index(), 2);
    }

    #[test]
    fn test_delete_on_empty_list_reports() {
        let mut app = App::new(ItemStore::new(Vec::new()));
        press(&mut app, KeyCode::Char('d'));

        assert_eq!(app.total_items(), 0);
        assert_eq!(app.status_message.as_deref(), Some("Nothing to delete"));
    }

    #[test]
    fn test_seed_scenario_through_keys() {
        let mut app = english_app();

        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('a'));
        type_text(&mut app, "Grape");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.total_items(), 5);

        for _ in 0..3 {
            press(&mut app, KeyCode::Up);
        }
        assert_eq!(app.selected_index(), 1);
        press(&mut app, KeyCode::Char('d'));

        let summary: Vec<(String, bool)> = app
            .items()
            .iter()
            .map(|item| (item.name().to_string(), item.is_checked()))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("Apple".to_string(), true),
                ("Banana".to_string(), false),
                ("Pineapple".to_string(), true),
                ("Grape".to_string(), false),
            ]
        );
    }

    #[test]
    fn test_help_mode() {
        let mut app = english_app();
        press(&mut app, KeyCode::Char('?'));
        assert!(app.help_mode);

        // Keys are swallowed while help is shown
        press(&mut app, KeyCode::Enter);
        assert!(!app.items()[0].is_checked());

        press(&mut app, KeyCode::Esc);
        assert!(!app.help_mode);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = english_app();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);

        let mut app = english_app();
        let mut key_event = KeyEvent::from(KeyCode::Char('c'));
        key_event.modifiers = KeyModifiers::CONTROL;
        app.handle_key_event(key_event);
        assert!(app.should_quit);
    }

    #[test]
    fn test_q_is_text_while_editing() {
        let mut app = english_app();
        press(&mut app, KeyCode::Char('a'));
        type_text(&mut app, "Quince");
        assert!(!app.should_quit);
        assert_eq!(app.edit.edit_buffer, "Quince");
    }
}
