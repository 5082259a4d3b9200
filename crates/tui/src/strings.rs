// Centralized UI strings and labels. ASCII-friendly by default.

use unicode_width::UnicodeWidthStr;

// List markers for the recent-checks pane (render color applied in UI)
pub const MARK_PALINDROME: &str = "+ ";
pub const MARK_NOT_PALINDROME: &str = "- ";

pub const INPUT_HINT: &str = "Type or paste text; it is checked after a short pause";

// UI block titles (keep surrounding spaces for visual padding)
pub const TITLE_EXAMPLES: &str = " Examples ";
pub const TITLE_INPUT: &str = " Input ";
pub const TITLE_RESULT: &str = " Result ";
pub const TITLE_STATS: &str = " Stats ";
pub const TITLE_RECENT: &str = " Recent checks ";
pub const TITLE_HELP: &str = " Help / Shortcuts ";

// Result pane
pub const VERDICT_OK: &str = "This is a palindrome!";
pub const VERDICT_BAD: &str = "Not a palindrome";
pub const CHECKING: &str = "Checking...";
pub const RESULT_EMPTY_HINT: &str = "Type something to check it.";

pub const NOTICE_COPIED: &str = "Copied to clipboard";

pub fn normalized_summary(normalized: &str) -> String {
    format!(
        "Processed: \"{}\" ({} characters)",
        normalized,
        normalized.chars().count()
    )
}

// Build the status bar line with width-aware compaction: fixed segments
// first, key hints appended while space allows.
pub fn build_status_line(
    focus: &str,
    pending: bool,
    history_len: usize,
    palindromes: usize,
    non_palindromes: usize,
    max_width: u16,
) -> String {
    let mut segments: Vec<String> = Vec::new();
    segments.push(format!(
        "[{}][{}]",
        focus,
        if pending { "Checking" } else { "Ready" }
    ));
    segments.push(format!("Hist:{}", history_len));
    segments.push(format!("P:{} N:{}", palindromes, non_palindromes));
    // Hints ordered by importance; appended if space allows.
    let hints: [&str; 5] = [
        "F1: help",
        "F2: examples",
        "Ctrl+Y: copy",
        "Ctrl+X: clear",
        "Esc: quit",
    ];
    for h in hints {
        segments.push(h.to_string());
    }

    let sep = "  |  ";
    let mut out = String::new();
    let mut used = 0usize;
    for (i, seg) in segments.iter().enumerate() {
        let segw = UnicodeWidthStr::width(seg.as_str());
        let addw = segw
            + if i == 0 {
                0
            } else {
                UnicodeWidthStr::width(sep)
            };
        if used + addw > max_width as usize {
            break;
        }
        if i > 0 {
            out.push_str(sep);
            used += UnicodeWidthStr::width(sep);
        }
        out.push_str(seg);
        used += segw;
    }
    out
}

// ASCII help lines content; UI maps to styled lines.
pub fn help_lines_ascii() -> &'static [&'static str] {
    &[
        "Basic",
        "  Type freely; the verdict updates once input has been quiet for 300 ms",
        "  Esc/Ctrl-C: Quit    F1: Open/close this panel (? when examples focused)",
        "Input Editing",
        "  Arrow: Move cursor    Backspace/Delete: Delete prev/next char",
        "  Home/End: Line start/end    Ctrl+A/E: Line start/end",
        "  Ctrl+Arrow: Word move    Ctrl+W: Delete prev word",
        "  Ctrl+U/K: Kill to line start/end    Enter: Newline",
        "Actions",
        "  Ctrl+X: Clear input (recent checks are kept)",
        "  Ctrl+Y: Copy input to clipboard (OSC 52, terminal-dependent)",
        "Examples",
        "  F2: Show/hide examples    Tab: Switch focus",
        "  Examples focus: Up/Down select, Enter load into input",
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_counts_characters_not_bytes() {
        assert_eq!(normalized_summary("été"), "Processed: \"été\" (3 characters)");
    }

    #[test]
    fn status_line_truncates_to_width() {
        let full = build_status_line("Input", false, 3, 2, 1, 200);
        assert!(full.contains("Hist:3"));
        assert!(full.contains("Esc: quit"));
        let narrow = build_status_line("Input", false, 3, 2, 1, 20);
        assert!(narrow.len() <= 20);
        assert!(narrow.starts_with("[Input][Ready]"));
    }
}
