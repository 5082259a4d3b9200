use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use palin_core::{check, CheckOutcome, Debouncer, History};
use tracing::info;

pub mod examples;
pub mod input;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Focus {
    Input,
    Examples,
}

/// Transient message shown in the corner (e.g. after a clipboard copy).
pub struct Notice {
    pub text: String,
    pub expires_at: Instant,
}

const NOTICE_TTL: Duration = Duration::from_secs(2);

pub struct App {
    pub input: String,
    pub input_cursor: usize,
    pub outcome: Option<CheckOutcome>,
    pub history: History,
    pub debouncer: Debouncer,
    pub focus: Focus,
    pub show_examples: bool,
    pub example_selected: usize,
    pub show_help: bool,
    pub notice: Option<Notice>,
    pub should_quit: bool,
    pub input_visible_lines: u16,
    pub input_max_lines: u16,
    pub dirty: bool,
}

impl App {
    pub fn new() -> Self {
        Self {
            input: String::new(),
            input_cursor: 0,
            outcome: None,
            history: History::new(),
            debouncer: Debouncer::new(),
            focus: Focus::Input,
            show_examples: true,
            example_selected: 0,
            show_help: false,
            notice: None,
            should_quit: false,
            input_visible_lines: 1,
            input_max_lines: 6,
            dirty: true,
        }
    }

    /// Every input mutation funnels through here: blank input drops the
    /// displayed result immediately, anything else (re)arms the debouncer.
    pub fn after_edit(&mut self) {
        let now = Instant::now();
        self.debouncer.on_change(&self.input, now);
        if self.input.trim().is_empty() {
            self.outcome = None;
        }
    }

    pub fn clear_input(&mut self) {
        self.input.clear();
        self.input_cursor = 0;
        self.after_edit();
    }

    pub fn copy_input(&mut self) {
        if self.input.is_empty() {
            return;
        }
        crate::clipboard::copy(&self.input);
        self.notice = Some(Notice {
            text: crate::strings::NOTICE_COPIED.to_string(),
            expires_at: Instant::now() + NOTICE_TTL,
        });
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        if let KeyEventKind::Press = key.kind {
            if self.show_help {
                match key.code {
                    KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('?') => {
                        self.show_help = false;
                        self.dirty = true;
                    }
                    _ => {}
                }
                return;
            }

            match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.should_quit = true;
                }
                KeyCode::Esc => self.should_quit = true,
                KeyCode::F(1) => {
                    self.show_help = true;
                }
                // '?' opens help too, except while it would be typed text.
                KeyCode::Char('?') if !matches!(self.focus, Focus::Input) => {
                    self.show_help = true;
                }
                KeyCode::F(2) => {
                    self.show_examples = !self.show_examples;
                    if !self.show_examples && matches!(self.focus, Focus::Examples) {
                        self.focus = Focus::Input;
                    }
                }
                KeyCode::Tab => {
                    self.focus = match self.focus {
                        Focus::Input if self.show_examples => Focus::Examples,
                        _ => Focus::Input,
                    };
                }
                KeyCode::Char('y') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.copy_input();
                }
                KeyCode::Char('x') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    info!(target: "tui", "on_key: Ctrl+X => clear input");
                    self.clear_input();
                }
                KeyCode::Up if matches!(self.focus, Focus::Examples) => {
                    self.example_select_up();
                }
                KeyCode::Down if matches!(self.focus, Focus::Examples) => {
                    self.example_select_down();
                }
                KeyCode::Enter if matches!(self.focus, Focus::Examples) => {
                    self.apply_selected_example();
                }
                KeyCode::Enter if matches!(self.focus, Focus::Input) => {
                    self.insert_text("\n");
                }
                KeyCode::Backspace if matches!(self.focus, Focus::Input) => {
                    self.delete_left_grapheme();
                }
                KeyCode::Delete if matches!(self.focus, Focus::Input) => {
                    self.delete_right_grapheme();
                }
                KeyCode::Char('w')
                    if key.modifiers.contains(KeyModifiers::CONTROL)
                        && matches!(self.focus, Focus::Input) =>
                {
                    self.delete_prev_word();
                }
                KeyCode::Char('u')
                    if key.modifiers.contains(KeyModifiers::CONTROL)
                        && matches!(self.focus, Focus::Input) =>
                {
                    self.kill_to_line_start();
                }
                KeyCode::Char('k')
                    if key.modifiers.contains(KeyModifiers::CONTROL)
                        && matches!(self.focus, Focus::Input) =>
                {
                    self.kill_to_line_end();
                }
                KeyCode::Char('a')
                    if key.modifiers.contains(KeyModifiers::CONTROL)
                        && matches!(self.focus, Focus::Input) =>
                {
                    self.move_cursor_line_start();
                }
                KeyCode::Char('e')
                    if key.modifiers.contains(KeyModifiers::CONTROL)
                        && matches!(self.focus, Focus::Input) =>
                {
                    self.move_cursor_line_end();
                }
                KeyCode::Left
                    if key.modifiers.contains(KeyModifiers::CONTROL)
                        && matches!(self.focus, Focus::Input) =>
                {
                    self.move_cursor_word_left();
                }
                KeyCode::Right
                    if key.modifiers.contains(KeyModifiers::CONTROL)
                        && matches!(self.focus, Focus::Input) =>
                {
                    self.move_cursor_word_right();
                }
                KeyCode::Left if matches!(self.focus, Focus::Input) => {
                    if self.input_cursor > 0 {
                        self.input_cursor -= 1;
                    }
                }
                KeyCode::Right if matches!(self.focus, Focus::Input) => {
                    let len = self.grapheme_len();
                    if self.input_cursor < len {
                        self.input_cursor += 1;
                    }
                }
                KeyCode::Home if matches!(self.focus, Focus::Input) => {
                    self.move_cursor_line_start();
                }
                KeyCode::End if matches!(self.focus, Focus::Input) => {
                    self.move_cursor_line_end();
                }
                KeyCode::Char(ch) => {
                    if matches!(self.focus, Focus::Input)
                        && !key.modifiers.contains(KeyModifiers::CONTROL)
                    {
                        let mut buf = [0u8; 4];
                        let s = ch.encode_utf8(&mut buf);
                        self.insert_text(s);
                    }
                }
                _ => {}
            }
            // Mark dirty on any handled key press path.
            self.dirty = true;
        }
    }

    /// Drive time-based work: fire the debounced check once input has been
    /// quiet long enough, and expire the transient notice.
    pub fn on_tick(&mut self) {
        let now = Instant::now();
        if let Some(text) = self.debouncer.poll(now) {
            let outcome = check(&text);
            if !outcome.normalized.is_empty() {
                self.history.record(&text, outcome.is_palindrome);
            }
            info!(
                target: "tui",
                "check settled: palindrome={} normalized_len={}",
                outcome.is_palindrome,
                outcome.normalized.chars().count()
            );
            self.outcome = Some(outcome);
            self.dirty = true;
        }
        if let Some(n) = &self.notice {
            if now >= n.expires_at {
                self.notice = None;
                self.dirty = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn app_with_instant_debounce() -> App {
        let mut app = App::new();
        app.debouncer = Debouncer::with_delay(Duration::ZERO);
        app
    }

    fn press(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
        app.on_key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        });
    }

    fn type_str(app: &mut App, s: &str) {
        for ch in s.chars() {
            press(app, KeyCode::Char(ch), KeyModifiers::NONE);
        }
    }

    #[test]
    fn typing_then_tick_produces_result_and_history() {
        let mut app = app_with_instant_debounce();
        type_str(&mut app, "aba");
        assert!(app.debouncer.is_pending());
        assert!(app.outcome.is_none());
        app.on_tick();
        let out = app.outcome.as_ref().unwrap();
        assert!(out.is_palindrome);
        assert_eq!(out.normalized, "aba");
        assert_eq!(app.history.len(), 1);
        assert_eq!(app.history.entries()[0].text, "aba");
    }

    #[test]
    fn only_final_text_of_a_burst_is_recorded() {
        let mut app = app_with_instant_debounce();
        type_str(&mut app, "ab");
        type_str(&mut app, "a");
        app.on_tick();
        assert_eq!(app.history.len(), 1);
        assert_eq!(app.history.entries()[0].text, "aba");
    }

    #[test]
    fn punctuation_only_input_shows_verdict_but_records_nothing() {
        let mut app = app_with_instant_debounce();
        type_str(&mut app, "!!!");
        app.on_tick();
        let out = app.outcome.as_ref().unwrap();
        assert!(!out.is_palindrome);
        assert!(out.normalized.is_empty());
        assert!(app.history.is_empty());
    }

    #[test]
    fn clearing_input_drops_result_immediately_but_keeps_history() {
        let mut app = app_with_instant_debounce();
        type_str(&mut app, "racecar");
        app.on_tick();
        assert!(app.outcome.is_some());
        assert_eq!(app.history.len(), 1);
        press(&mut app, KeyCode::Char('x'), KeyModifiers::CONTROL);
        assert!(app.input.is_empty());
        assert!(app.outcome.is_none());
        assert!(app.debouncer.is_idle());
        // No later tick resurrects a stale check.
        app.on_tick();
        assert!(app.outcome.is_none());
        assert_eq!(app.history.len(), 1);
    }

    #[test]
    fn loading_an_example_runs_the_debounce_flow() {
        let mut app = app_with_instant_debounce();
        press(&mut app, KeyCode::Tab, KeyModifiers::NONE);
        assert_eq!(app.focus, Focus::Examples);
        press(&mut app, KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(app.input, examples::EXAMPLES[0]);
        assert_eq!(app.focus, Focus::Input);
        app.on_tick();
        let out = app.outcome.as_ref().unwrap();
        assert!(out.is_palindrome);
        assert_eq!(out.normalized, "amanaplanacanalpanama");
        assert_eq!(app.history.len(), 1);
    }

    #[test]
    fn rechecking_same_text_keeps_history_deduplicated() {
        let mut app = app_with_instant_debounce();
        type_str(&mut app, "abc");
        app.on_tick();
        press(&mut app, KeyCode::Char('x'), KeyModifiers::CONTROL);
        type_str(&mut app, "aba");
        app.on_tick();
        press(&mut app, KeyCode::Char('x'), KeyModifiers::CONTROL);
        type_str(&mut app, "abc");
        app.on_tick();
        assert_eq!(app.history.len(), 2);
        assert_eq!(app.history.entries()[0].text, "abc");
        assert!(!app.history.entries()[0].is_palindrome);
        assert_eq!(app.history.entries()[1].text, "aba");
        assert!(app.history.entries()[1].is_palindrome);
    }

    #[test]
    fn question_mark_opens_help_outside_the_input() {
        let mut app = App::new();
        press(&mut app, KeyCode::Tab, KeyModifiers::NONE);
        assert_eq!(app.focus, Focus::Examples);
        press(&mut app, KeyCode::Char('?'), KeyModifiers::NONE);
        assert!(app.show_help);
        press(&mut app, KeyCode::Char('?'), KeyModifiers::NONE);
        assert!(!app.show_help);
    }

    #[test]
    fn question_mark_is_plain_text_while_typing() {
        let mut app = App::new();
        type_str(&mut app, "a?");
        assert!(!app.show_help);
        assert_eq!(app.input, "a?");
    }

    #[test]
    fn ctrl_editing_keys_ignore_the_examples_pane() {
        let mut app = App::new();
        type_str(&mut app, "race a car");
        press(&mut app, KeyCode::Tab, KeyModifiers::NONE);
        assert_eq!(app.focus, Focus::Examples);
        for ch in ['w', 'u', 'k'] {
            press(&mut app, KeyCode::Char(ch), KeyModifiers::CONTROL);
        }
        assert_eq!(app.input, "race a car");
        let cursor = app.input_cursor;
        press(&mut app, KeyCode::Char('a'), KeyModifiers::CONTROL);
        press(&mut app, KeyCode::Char('e'), KeyModifiers::CONTROL);
        assert_eq!(app.input_cursor, cursor);
    }

    #[test]
    fn tab_cycles_between_input_and_examples() {
        let mut app = App::new();
        assert_eq!(app.focus, Focus::Input);
        press(&mut app, KeyCode::Tab, KeyModifiers::NONE);
        assert_eq!(app.focus, Focus::Examples);
        press(&mut app, KeyCode::Tab, KeyModifiers::NONE);
        assert_eq!(app.focus, Focus::Input);
        // Hiding the pane pulls focus back to the input.
        press(&mut app, KeyCode::Tab, KeyModifiers::NONE);
        press(&mut app, KeyCode::F(2), KeyModifiers::NONE);
        assert_eq!(app.focus, Focus::Input);
    }
}
