//! Label-partitioned monotonic request counter.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

/// A monotonic counter family with a single label dimension.
///
/// Each distinct label value owns an independent `AtomicU64`, so increments
/// from concurrent callers are linearizable per label without any lock shared
/// across labels. First use of a new label inserts it through the map's entry
/// API, which is safe under concurrent first-use from multiple callers.
pub struct RequestCounter {
    name: String,
    help: String,
    label_key: String,
    values: DashMap<String, AtomicU64>,
}

impl RequestCounter {
    pub fn new(
        name: impl Into<String>,
        help: impl Into<String>,
        label_key: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            help: help.into(),
            label_key: label_key.into(),
            values: DashMap::new(),
        }
    }

    /// Metric family name (e.g. `app_requests_total`).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Help text emitted on the `# HELP` line.
    pub fn help(&self) -> &str {
        &self.help
    }

    /// Label key (e.g. `endpoint`).
    pub fn label_key(&self) -> &str {
        &self.label_key
    }

    /// Increment by 1. Inserts the label with value 1 when absent.
    pub fn increment(&self, label: &str) {
        match self.values.entry(label.to_string()) {
            Entry::Occupied(e) => {
                e.get().fetch_add(1, Ordering::Relaxed);
            }
            Entry::Vacant(v) => {
                tracing::debug!(metric = %self.name, %label, "new label observed");
                v.insert(AtomicU64::new(1));
            }
        }
    }

    /// Current value for one label, 0 when the label was never observed.
    pub fn value(&self, label: &str) -> u64 {
        self.values
            .get(label)
            .map(|c| c.load(Ordering::Relaxed))
            .unwrap_or(0)
    }

    /// Point-in-time view of every observed label, sorted by label.
    ///
    /// Each value is read atomically; cross-label consistency is best-effort,
    /// which is the usual contract for scrape-style metrics.
    pub fn snapshot(&self) -> BTreeMap<String, u64> {
        self.values
            .iter()
            .map(|r| (r.key().clone(), r.value().load(Ordering::Relaxed)))
            .collect()
    }
}
