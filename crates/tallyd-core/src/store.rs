//! In-memory metric store.
//!
//! Counters and gauges live in two independently-guarded maps so a burst of
//! gauge writes never serializes behind unrelated counter writes. Same-name
//! read-modify-write happens under the map's entry guard, so updates to one
//! name are strictly serialized while distinct names proceed concurrently.

use dashmap::DashMap;

/// Process-lifetime holder of aggregated metric state.
///
/// Entries are created lazily on first update and never removed. The store
/// is constructed empty and owned explicitly (typically behind an `Arc` in
/// application state); there is no ambient singleton.
#[derive(Default)]
pub struct MetricStore {
    counters: DashMap<String, i64>,
    gauges: DashMap<String, f64>,
}

impl MetricStore {
    pub fn new() -> Self {
        Self {
            counters: DashMap::new(),
            gauges: DashMap::new(),
        }
    }

    /// Add `delta` to the accumulated value for `name`, creating the entry
    /// with value `delta` if absent. Overflow wraps (i64 two's complement).
    pub fn update_counter(&self, name: &str, delta: i64) {
        let mut entry = self.counters.entry(name.to_string()).or_insert(0);
        let current = *entry;
        *entry = current.wrapping_add(delta);
    }

    /// Overwrite the value for `name` (last write wins), creating the entry
    /// if absent. NaN and infinities are stored as-is.
    pub fn update_gauge(&self, name: &str, value: f64) {
        self.gauges.insert(name.to_string(), value);
    }

    /// Current accumulated counter value, `None` if never updated.
    pub fn counter(&self, name: &str) -> Option<i64> {
        self.counters.get(name).map(|v| *v)
    }

    /// Most recently written gauge value, `None` if never updated.
    pub fn gauge(&self, name: &str) -> Option<f64> {
        self.gauges.get(name).map(|v| *v)
    }

    /// True when no metric of either kind has ever been recorded.
    pub fn is_empty(&self) -> bool {
        self.counters.is_empty() && self.gauges.is_empty()
    }
}
