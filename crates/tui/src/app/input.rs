use unicode_segmentation::UnicodeSegmentation;

use super::App;

// Cursor movement and editing over grapheme clusters, so combined emoji and
// accent sequences behave as single characters. Every mutation ends in
// `after_edit`, which re-arms the debounced check.
impl App {
    pub fn grapheme_len(&self) -> usize {
        self.input.graphemes(true).count()
    }

    pub fn insert_text(&mut self, s: &str) {
        let parts: Vec<&str> = self.input.graphemes(true).collect();
        let idx = self.input_cursor.min(parts.len());
        let mut next = String::with_capacity(self.input.len() + s.len());
        next.extend(parts[..idx].iter().copied());
        next.push_str(s);
        next.extend(parts[idx..].iter().copied());
        self.input = next;
        let added = s.graphemes(true).count();
        self.input_cursor = (idx + added).min(self.grapheme_len());
        self.after_edit();
    }

    pub fn delete_left_grapheme(&mut self) {
        if self.input_cursor == 0 {
            return;
        }
        let mut parts: Vec<&str> = self.input.graphemes(true).collect();
        let idx = self.input_cursor.min(parts.len());
        parts.remove(idx - 1);
        self.input = parts.concat();
        self.input_cursor = idx - 1;
        self.after_edit();
    }

    pub fn delete_right_grapheme(&mut self) {
        let mut parts: Vec<&str> = self.input.graphemes(true).collect();
        let idx = self.input_cursor.min(parts.len());
        if idx < parts.len() {
            parts.remove(idx);
            self.input = parts.concat();
            self.after_edit();
        }
    }

    pub fn delete_prev_word(&mut self) {
        if self.input_cursor == 0 {
            return;
        }
        let mut parts: Vec<&str> = self.input.graphemes(true).collect();
        let end = self.input_cursor.min(parts.len());
        let start = word_boundary_left(&parts, end);
        parts.drain(start..end);
        self.input = parts.concat();
        self.input_cursor = start;
        self.after_edit();
    }

    pub fn kill_to_line_start(&mut self) {
        let mut parts: Vec<&str> = self.input.graphemes(true).collect();
        let end = self.input_cursor.min(parts.len());
        let start = line_start(&parts, end);
        parts.drain(start..end);
        self.input = parts.concat();
        self.input_cursor = start;
        self.after_edit();
    }

    pub fn kill_to_line_end(&mut self) {
        let mut parts: Vec<&str> = self.input.graphemes(true).collect();
        let start = self.input_cursor.min(parts.len());
        let end = line_end(&parts, start);
        parts.drain(start..end);
        self.input = parts.concat();
        self.after_edit();
    }

    pub fn move_cursor_line_start(&mut self) {
        let parts: Vec<&str> = self.input.graphemes(true).collect();
        self.input_cursor = line_start(&parts, self.input_cursor.min(parts.len()));
    }

    pub fn move_cursor_line_end(&mut self) {
        let parts: Vec<&str> = self.input.graphemes(true).collect();
        self.input_cursor = line_end(&parts, self.input_cursor.min(parts.len()));
    }

    pub fn move_cursor_word_left(&mut self) {
        let parts: Vec<&str> = self.input.graphemes(true).collect();
        self.input_cursor = word_boundary_left(&parts, self.input_cursor.min(parts.len()));
    }

    pub fn move_cursor_word_right(&mut self) {
        let parts: Vec<&str> = self.input.graphemes(true).collect();
        let mut i = self.input_cursor.min(parts.len());
        while i < parts.len() && parts[i].trim().is_empty() {
            i += 1;
        }
        while i < parts.len() && !parts[i].trim().is_empty() {
            i += 1;
        }
        self.input_cursor = i;
    }
}

fn word_boundary_left(parts: &[&str], from: usize) -> usize {
    let mut i = from;
    while i > 0 && parts[i - 1].trim().is_empty() {
        i -= 1;
    }
    while i > 0 && !parts[i - 1].trim().is_empty() {
        i -= 1;
    }
    i
}

fn line_start(parts: &[&str], from: usize) -> usize {
    let mut i = from;
    while i > 0 && parts[i - 1] != "\n" {
        i -= 1;
    }
    i
}

fn line_end(parts: &[&str], from: usize) -> usize {
    let mut i = from;
    while i < parts.len() && parts[i] != "\n" {
        i += 1;
    }
    i
}
