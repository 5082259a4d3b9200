mod app;
mod clipboard;
mod events;
mod logging;
mod strings;
mod terminal;
mod theme;
mod ui;

use anyhow::Result;
use terminal::TerminalGuard;

fn main() -> Result<()> {
    let _log_guard = logging::init();
    let mut app = app::App::new();
    let mut term = TerminalGuard::new()?;
    events::run(&mut term.terminal, &mut app)
}
