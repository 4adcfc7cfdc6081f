//! In-process request metrics and Prometheus text exposition.
//!
//! Counters are stored as atomics behind a `DashMap`, so increments from
//! concurrent request handlers need no external locking. The exposition
//! renderer works off a sorted snapshot to keep scrape output deterministic.

pub mod counter;
pub mod expo;

pub use counter::RequestCounter;
pub use expo::MetricsExporter;
