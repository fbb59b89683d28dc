//! Human-readable findings about an account.
//!
//! The flag rules reuse the raw thresholds behind the scores but are evaluated
//! independently of them, so a report can explain itself even where an axis
//! adjustment did not fire.

mod flag_set;
mod rules;

pub use flag_set::Flags;
pub use rules::generate;
