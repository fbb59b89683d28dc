//! Report generation for account analyses
//!
//! This module turns an [`Analysis`](crate::analysis::Analysis) into output for
//! human consumption and programmatic processing.
//!
//! # Implementation Model
//!
//! Two report generators are provided, each accessed through a `generate` function:
//! - **Console**: Terminal output with optional ANSI colors
//! - **JSON**: Machine-readable serialization of the full analysis
//!
//! Generators write into any [`core::fmt::Write`] sink and never alter the numbers
//! they are given. Shared formatting lives in the `common` module.

mod common;
mod console;
mod json;

pub use console::generate as generate_console;
pub use json::generate as generate_json;
