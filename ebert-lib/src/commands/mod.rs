//! Command-line interface and orchestration for ebert
//!
//! This module implements the CLI commands and coordinates the other modules
//! to perform an end-to-end account appraisal. It handles argument parsing,
//! configuration management, and the high-level workflow.
//!
//! # Implementation Model
//!
//! ## Commands
//!
//! - **analyze**: Fetch one account's profile, repositories, and public events,
//!   score them, and render the result as text or JSON
//! - **init**: Generate a default configuration file
//!
//! ## Execution Flow
//!
//! The `run` function parses command-line arguments using clap and routes
//! to the appropriate command handler. The analyze command:
//!
//! 1. Initializes logging and loads configuration
//! 2. Fetches account data through the GitHub provider, showing a spinner
//! 3. Runs the scoring pipeline once over the complete data
//! 4. Generates the requested reports
//! 5. Fails if the risk level meets an `--error-if-*` threshold
//!
//! Configuration is managed through an optional TOML file that tunes how the
//! GitHub API is queried; scoring itself is not configurable.

mod analyze;
mod common;
mod config;
mod host;
mod init;
mod progress_reporter;
mod run;

#[cfg(debug_assertions)]
pub use config::Config;

pub use analyze::{AnalyzeArgs, analyze_account};
pub use common::{ColorMode, LogLevel};
pub use host::Host;
pub use init::{InitArgs, init_config};
pub use progress_reporter::ProgressReporter;
pub use run::run;
