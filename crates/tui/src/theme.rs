use ratatui::style::Color;

pub struct Theme {
    pub border_focus: Color,
    pub border_inactive: Color,
    pub verdict_ok: Color,
    pub verdict_bad: Color,
    pub pending: Color,
    pub examples_selected_fg: Color,
    pub examples_selected_bg: Color,
}

pub const THEME: Theme = Theme {
    border_focus: Color::Cyan,
    border_inactive: Color::DarkGray,
    verdict_ok: Color::Green,
    verdict_bad: Color::Red,
    pending: Color::Yellow,
    examples_selected_fg: Color::Black,
    examples_selected_bg: Color::Cyan,
};
