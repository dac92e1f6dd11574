//! Analytics snapshot handling.
//!
//! | Module      | Purpose                                            |
//! |-------------|----------------------------------------------------|
//! | `metrics`   | `PageMetrics`, `MetricsSnapshot`, JSON loading     |
//! | `aggregate` | Views-weighted aggregation for dynamic routes      |
//! | `lookup`    | File -> metrics, static or aggregated              |
//! | `cache`     | `SnapshotSource` trait and the TTL snapshot cache  |
//! | `error`     | `SnapshotError`                                    |
//!
//! The snapshot is always passed in by the caller and only read.

mod aggregate;
mod cache;
mod error;
mod lookup;
pub(crate) mod metrics;

pub use aggregate::{AggregateOutcome, aggregate, aggregate_matching, aggregate_outcome, weighted};
pub use cache::{FileSource, MetricsCache, SnapshotSource};
pub use error::SnapshotError;
pub use lookup::{FileMetrics, lookup};
pub use metrics::{AggregatedMetrics, MetricsSnapshot, PageMetrics};
