//! Metric aggregation from raw activity records
//!
//! This module reduces the three record collections fetched for an account
//! (profile, repositories, events) into a single flat [`Metrics`] bundle of
//! integer counters. The bundle is the only input the scoring engine and the
//! flag generator consume besides a few raw profile fields.
//!
//! # Implementation Model
//!
//! [`aggregate`] makes one pass over repositories and one over events. The
//! current time is an explicit parameter so results are reproducible. Display
//! metadata for each counter lives in a static table ([`METRIC_DEFINITIONS`])
//! used by the report generators.

mod aggregator;
mod metric_def;
mod profile_metrics;

pub use aggregator::aggregate;
pub use metric_def::{METRIC_DEFINITIONS, MetricDef};
pub use profile_metrics::Metrics;
