use ratatui::{
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use crate::app::{examples::EXAMPLES, App, Focus};
use crate::strings::{
    build_status_line, help_lines_ascii, normalized_summary, CHECKING, INPUT_HINT,
    MARK_NOT_PALINDROME, MARK_PALINDROME, RESULT_EMPTY_HINT, TITLE_EXAMPLES, TITLE_HELP,
    TITLE_INPUT, TITLE_RECENT, TITLE_RESULT, TITLE_STATS, VERDICT_BAD, VERDICT_OK,
};
use crate::theme::THEME;

pub fn draw(f: &mut Frame, app: &mut App) {
    // Layout: optional left examples sidebar (32), main column
    let mut constraints: Vec<Constraint> = Vec::new();
    if app.show_examples {
        constraints.push(Constraint::Length(32));
    }
    constraints.push(Constraint::Min(30));
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(f.area());
    let mut idx = 0usize;
    if app.show_examples {
        draw_examples(f, chunks[idx], app);
        idx += 1;
    }
    draw_main(f, chunks[idx], app);

    if app.show_help {
        draw_help(f, f.area());
    }
    if let Some(notice) = &app.notice {
        draw_notice(f, f.area(), &notice.text);
    }
}

fn draw_main(f: &mut Frame, area: Rect, app: &mut App) {
    let inner_width = area.width.saturating_sub(2);
    let input_total_lines = measure_total_lines(&app.input, inner_width).max(1) as u16;
    let target_lines = input_total_lines.min(app.input_max_lines);
    let current = app.input_visible_lines.max(1);
    // Grow/shrink one row per frame so the pane does not jump.
    app.input_visible_lines = if current < target_lines {
        current + 1
    } else if current > target_lines {
        current - 1
    } else {
        current
    };
    let input_height = app.input_visible_lines + 2;

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(input_height),
            Constraint::Length(5),
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(area);

    draw_input(f, main_chunks[0], app, app.input_visible_lines, inner_width);
    draw_result(f, main_chunks[1], app);
    draw_stats(f, main_chunks[2], app);
    draw_recent(f, main_chunks[3], app);
    draw_status(f, main_chunks[4], app);
}

fn draw_input(f: &mut Frame, area: Rect, app: &App, input_visible_lines: u16, inner_width: u16) {
    let focused = matches!(app.focus, Focus::Input);
    let border_style = if focused {
        Style::default().fg(THEME.border_focus)
    } else {
        Style::default().fg(THEME.border_inactive)
    };
    let block = Block::default()
        .title(Span::styled(
            TITLE_INPUT,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(border_style);

    let graphemes: Vec<&str> = app.input.graphemes(true).collect();
    let upto = app.input_cursor.min(graphemes.len());
    let (cursor_line, cursor_col) = measure_prefix_line_col(&graphemes, upto, inner_width);
    let offset_y = cursor_line.saturating_sub(input_visible_lines.saturating_sub(1));

    let para = if app.input.is_empty() {
        let hint = Line::from(Span::styled(
            INPUT_HINT,
            Style::default().fg(Color::DarkGray),
        ));
        Paragraph::new(hint).block(block).wrap(Wrap { trim: false })
    } else {
        Paragraph::new(app.input.clone())
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((offset_y, 0))
    };
    f.render_widget(para, area);

    if focused && !app.show_help {
        let cursor_x = area.x + 1 + cursor_col;
        let cursor_y = area.y + 1 + cursor_line.saturating_sub(offset_y);
        f.set_cursor_position(Position::new(cursor_x, cursor_y));
    }
}

fn draw_result(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(Span::styled(
            TITLE_RESULT,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(THEME.border_inactive));

    let mut lines: Vec<Line> = Vec::new();
    if app.input.trim().is_empty() {
        lines.push(Line::from(Span::styled(
            RESULT_EMPTY_HINT,
            Style::default().fg(Color::DarkGray),
        )));
    } else if app.debouncer.is_pending() {
        lines.push(Line::from(Span::styled(
            CHECKING,
            Style::default().fg(THEME.pending),
        )));
    } else if let Some(out) = &app.outcome {
        let (verdict, color) = if out.is_palindrome {
            (VERDICT_OK, THEME.verdict_ok)
        } else {
            (VERDICT_BAD, THEME.verdict_bad)
        };
        lines.push(Line::from(Span::styled(
            verdict,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )));
        if !out.normalized.is_empty() {
            lines.push(Line::from(Span::styled(
                normalized_summary(&out.normalized),
                Style::default().fg(Color::DarkGray),
            )));
        }
    }

    let para = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
    f.render_widget(para, area);
}

fn draw_stats(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(Span::styled(
            TITLE_STATS,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(THEME.border_inactive));

    let line = if app.history.is_empty() {
        Line::from(Span::styled(
            "No checks yet",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        let stats = app.history.stats();
        Line::from(vec![
            Span::styled(
                format!("Palindromes: {}", stats.palindromes),
                Style::default()
                    .fg(THEME.verdict_ok)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled(
                format!("Non-palindromes: {}", stats.non_palindromes),
                Style::default()
                    .fg(THEME.verdict_bad)
                    .add_modifier(Modifier::BOLD),
            ),
        ])
    };
    f.render_widget(Paragraph::new(line).block(block), area);
}

fn draw_recent(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(Span::styled(
            TITLE_RECENT,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(THEME.border_inactive));

    let inner_width = area.width.saturating_sub(2) as usize;
    let inner_height = area.height.saturating_sub(2) as usize;
    let mut lines: Vec<Line> = Vec::new();
    for entry in app.history.entries().iter().take(inner_height) {
        let (mark, color) = if entry.is_palindrome {
            (MARK_PALINDROME, THEME.verdict_ok)
        } else {
            (MARK_NOT_PALINDROME, THEME.verdict_bad)
        };
        let budget = inner_width.saturating_sub(UnicodeWidthStr::width(mark));
        let text = truncate_to_width(&entry.text, budget);
        lines.push(Line::from(vec![
            Span::styled(mark, Style::default().fg(color).add_modifier(Modifier::BOLD)),
            Span::raw(text),
        ]));
    }
    if lines.is_empty() {
        lines.push(Line::from(Span::styled(
            "Checks land here, newest first (last 5 kept)",
            Style::default().fg(Color::DarkGray),
        )));
    }
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_examples(f: &mut Frame, area: Rect, app: &App) {
    let focused = matches!(app.focus, Focus::Examples);
    let title = Span::styled(
        TITLE_EXAMPLES,
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    );
    let border_style = if focused {
        Style::default().fg(THEME.border_focus)
    } else {
        Style::default().fg(THEME.border_inactive)
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style);

    let inner_width = area.width.saturating_sub(2) as usize;
    let mut lines: Vec<Line> = Vec::new();
    for (i, s) in EXAMPLES.iter().enumerate() {
        let prefix = if i == app.example_selected { "> " } else { "  " };
        let style = if i == app.example_selected {
            if focused {
                Style::default()
                    .fg(THEME.examples_selected_fg)
                    .bg(THEME.examples_selected_bg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
                    .fg(THEME.border_focus)
                    .add_modifier(Modifier::BOLD)
            }
        } else {
            Style::default()
        };
        let text = truncate_to_width(s, inner_width.saturating_sub(2));
        lines.push(Line::from(Span::styled(format!("{}{}", prefix, text), style)));
    }
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_status(f: &mut Frame, area: Rect, app: &App) {
    let focus = match app.focus {
        Focus::Input => "Input",
        Focus::Examples => "Examples",
    };
    let stats = app.history.stats();
    let tips = build_status_line(
        focus,
        app.debouncer.is_pending(),
        app.history.len(),
        stats.palindromes,
        stats.non_palindromes,
        area.width,
    );
    let line = Line::from(Span::styled(tips, Style::default().fg(Color::DarkGray)));
    f.render_widget(Paragraph::new(line), area);
}

fn draw_help(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(70, 70, area);
    let block = Block::default()
        .title(Span::styled(
            TITLE_HELP,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL);
    let lines = help_lines_ascii()
        .iter()
        .map(|s| Line::from(*s))
        .collect::<Vec<Line>>();
    let para = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
    f.render_widget(Clear, popup_area);
    f.render_widget(para, popup_area);
}

fn draw_notice(f: &mut Frame, area: Rect, text: &str) {
    let width = (UnicodeWidthStr::width(text) as u16 + 2).min(area.width);
    let rect = Rect {
        x: area.x + area.width.saturating_sub(width + 1),
        y: area.y + area.height.saturating_sub(2),
        width,
        height: 1,
    };
    let line = Line::from(Span::styled(
        format!(" {} ", text),
        Style::default()
            .fg(Color::Black)
            .bg(THEME.verdict_ok)
            .add_modifier(Modifier::BOLD),
    ));
    f.render_widget(Clear, rect);
    f.render_widget(Paragraph::new(line), rect);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);
    let horiz = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vert[1]);
    horiz[1]
}

fn measure_total_lines(s: &str, width: u16) -> usize {
    if width == 0 {
        return 1;
    }
    let mut lines = 1usize;
    let mut col = 0usize;
    for g in s.graphemes(true) {
        if g == "\n" {
            lines += 1;
            col = 0;
            continue;
        }
        let w = UnicodeWidthStr::width(g);
        if col + w > width as usize {
            lines += 1;
            col = 0;
        }
        col += w;
    }
    lines
}

fn measure_prefix_line_col(graphemes: &[&str], upto: usize, width: u16) -> (u16, u16) {
    if width == 0 {
        return (0, 0);
    }
    let mut line = 0usize;
    let mut col = 0usize;
    for g in graphemes.iter().take(upto) {
        if *g == "\n" {
            line += 1;
            col = 0;
            continue;
        }
        let w = UnicodeWidthStr::width(*g);
        if col + w > width as usize {
            line += 1;
            col = 0;
        }
        col += w;
    }
    (line as u16, col as u16)
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    let flat = s.replace('\n', " ");
    if UnicodeWidthStr::width(flat.as_str()) <= max_width {
        return flat;
    }
    let ellipsis = "...";
    let budget = max_width.saturating_sub(ellipsis.len());
    let mut out = String::new();
    let mut used = 0usize;
    for g in flat.graphemes(true) {
        let w = UnicodeWidthStr::width(g);
        if used + w > budget {
            break;
        }
        out.push_str(g);
        used += w;
    }
    out.push_str(ellipsis);
    out
}
