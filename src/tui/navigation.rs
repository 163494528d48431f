/// Row selection. Scrolling is left to ratatui's `ListState`, which keeps the
/// selected row on screen.
pub struct NavigationState {
    pub selected_index: usize,
}

impl NavigationState {
    pub fn new() -> Self {
        Self { selected_index: 0 }
    }

    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    pub fn move_selection_down(&mut self, max_items: usize) {
        if self.selected_index < max_items.saturating_sub(1) {
            self.selected_index += 1;
        }
    }

    pub fn select(&mut self, index: usize, max_items: usize) {
        self.selected_index = index;
        self.clamp(max_items);
    }

    /// Keeps the selection on a real row after the list shrinks.
    pub fn clamp(&mut self, max_items: usize) {
        if self.selected_index >= max_items {
            self.selected_index = max_items.saturating_sub(1);
        }
    }
}
