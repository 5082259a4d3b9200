pub mod check;
pub mod debounce;
pub mod history;

pub use check::{check, CheckOutcome};
pub use debounce::Debouncer;
pub use history::{History, HistoryEntry, Stats};
