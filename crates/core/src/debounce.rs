use std::time::{Duration, Instant};

use tracing::trace;

/// Quiet period before a pending check fires.
pub const DEBOUNCE_DELAY: Duration = Duration::from_millis(300);

enum State {
    Idle,
    Pending { text: String, deadline: Instant },
    Settled,
}

/// Single-slot delayed-task scheduler for the checker.
///
/// At most one check is pending at a time; a new input change replaces any
/// outstanding one, so in a burst of edits only the final text is ever
/// checked. Time is passed in by the caller, which keeps this testable
/// without sleeping.
pub struct Debouncer {
    state: State,
    delay: Duration,
}

impl Debouncer {
    pub fn new() -> Self {
        Self::with_delay(DEBOUNCE_DELAY)
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self {
            state: State::Idle,
            delay,
        }
    }

    /// Feed the latest input. Blank input cancels any pending check and goes
    /// straight back to idle; the caller clears its displayed result without
    /// waiting for the delay.
    pub fn on_change(&mut self, text: &str, now: Instant) {
        if text.trim().is_empty() {
            trace!(target: "core", "debounce: blank input, idle");
            self.state = State::Idle;
            return;
        }
        self.state = State::Pending {
            text: text.to_string(),
            deadline: now + self.delay,
        };
    }

    /// Yield the pending text exactly once, as soon as its quiet period has
    /// elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        match &self.state {
            State::Pending { text, deadline } if now >= *deadline => {
                let text = text.clone();
                self.state = State::Settled;
                trace!(target: "core", "debounce: settled after quiet period");
                Some(text)
            }
            _ => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.state, State::Pending { .. })
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.state, State::Idle)
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new()
    }
}
