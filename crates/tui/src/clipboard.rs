use std::io::{stdout, Write};

use base64::engine::general_purpose::STANDARD as B64;
use base64::Engine as _;
use tracing::{info, warn};

/// Hand `text` to the hosting terminal's clipboard via an OSC 52 escape.
/// Support varies by terminal and multiplexer; failures never reach the
/// caller.
pub fn copy(text: &str) {
    let seq = format!("\x1b]52;c;{}\x07", B64.encode(text.as_bytes()));
    let mut out = stdout();
    match out.write_all(seq.as_bytes()).and_then(|_| out.flush()) {
        Ok(()) => info!(target: "tui", "clipboard: copied {} bytes", text.len()),
        Err(e) => warn!(target: "tui", "clipboard: OSC 52 write failed: {}", e),
    }
}
