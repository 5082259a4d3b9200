use std::fs;

use directories::BaseDirs;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Route tracing output to a rolling file under the platform data dir;
/// stdout belongs to the TUI. `PALIN_LOG` selects the filter. Returns the
/// appender guard, which must stay alive for the process lifetime.
pub fn init() -> Option<WorkerGuard> {
    let base = BaseDirs::new()?;
    let dir = base.data_dir().join("palin").join("logs");
    fs::create_dir_all(&dir).ok()?;
    let appender = tracing_appender::rolling::daily(dir, "palin.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let filter =
        EnvFilter::try_from_env("PALIN_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .init();
    Some(guard)
}
