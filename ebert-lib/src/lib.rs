#![doc(hidden)]
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core library for ebert
//!
//! This library consolidates all functionality for the ebert tool, which appraises
//! GitHub accounts by deriving a heuristic trust/risk profile from their public activity.
//!
//! # Module Organization
//!
//! - [`commands`]: Command-line interface and orchestration
//! - [`facts`]: Data collection from the GitHub REST API
//! - [`metrics`]: Aggregation of raw records into counters
//! - [`scoring`]: Per-axis risk scores and the overall risk level
//! - [`flags`]: Human-readable findings
//! - [`analysis`]: The end-to-end pipeline producing an [`analysis::Analysis`]
//! - [`reports`]: Report generation in multiple formats

pub type Result<T, E = ohno::AppError> = core::result::Result<T, E>;

pub mod analysis;
pub mod facts;
pub mod flags;
pub mod metrics;
pub mod scoring;

#[cfg(any(debug_assertions, test))]
pub mod commands;
#[cfg(not(any(debug_assertions, test)))]
mod commands;

#[cfg(any(debug_assertions, test))]
pub mod reports;
#[cfg(not(any(debug_assertions, test)))]
mod reports;

pub use crate::commands::{Host, run};
