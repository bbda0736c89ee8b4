//! Per-operation counters for both cache types (feature = "metrics").
//!
//! Counters live inside the caches and are updated inline; callers read them
//! through the `Copy` snapshot structs, so a snapshot is a coherent view of
//! one moment.

pub mod metrics_impl;
pub mod snapshot;

pub use metrics_impl::{IntervalLruMetrics, SplayMetrics};
pub use snapshot::{IntervalLruMetricsSnapshot, SplayMetricsSnapshot};
