use tracing::info;

use super::{App, Focus};

/// Fixed sample inputs offered in the sidebar; a mix of palindromes and
/// near-misses.
pub const EXAMPLES: [&str; 7] = [
    "A man, a plan, a canal: Panama",
    "race a car",
    "Was it a car or a cat I saw?",
    "No lemon, no melon",
    "Able was I, I saw Elba!",
    "12321",
    "Hello, world!",
];

impl App {
    pub fn example_select_up(&mut self) {
        if self.example_selected > 0 {
            self.example_selected -= 1;
        }
    }

    pub fn example_select_down(&mut self) {
        if self.example_selected + 1 < EXAMPLES.len() {
            self.example_selected += 1;
        }
    }

    /// Load the highlighted example into the input pane; the usual debounce
    /// flow takes it from there, exactly as if the user had typed it.
    pub fn apply_selected_example(&mut self) {
        let example = EXAMPLES[self.example_selected.min(EXAMPLES.len() - 1)];
        info!(target: "tui", "example selected: {:?}", example);
        self.input = example.to_string();
        self.input_cursor = self.grapheme_len();
        self.focus = Focus::Input;
        self.after_edit();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_stays_within_bounds() {
        let mut app = App::new();
        app.example_select_up();
        assert_eq!(app.example_selected, 0);
        for _ in 0..20 {
            app.example_select_down();
        }
        assert_eq!(app.example_selected, EXAMPLES.len() - 1);
    }

    #[test]
    fn applying_example_replaces_input_and_returns_focus() {
        let mut app = App::new();
        app.insert_text("old text");
        app.focus = Focus::Examples;
        app.example_select_down();
        app.apply_selected_example();
        assert_eq!(app.input, EXAMPLES[1]);
        assert_eq!(app.focus, Focus::Input);
        assert!(app.debouncer.is_pending());
    }
}
