//! Update validation and dispatch.
//!
//! Single entry point translating an inbound (kind, name, value) triple into
//! either a store mutation or a classified rejection. Validation completes
//! before any mutation begins, so a rejected update leaves the store
//! untouched.

use crate::error::{Result, TallydError};
use crate::metric::{MetricKind, MetricValue};
use crate::store::MetricStore;

/// Apply one update to the store.
///
/// Rejections:
/// - empty `name` -> `NotFound` (routing-miss semantics, mirroring a
///   resource lookup for an unnamed metric)
/// - unknown `kind` -> `BadRequest`, without parsing the value
/// - unparseable value for the given kind -> `BadRequest`
///
/// On success exactly one map entry is mutated; store mutations themselves
/// cannot fail.
pub fn apply_update(store: &MetricStore, kind: &str, name: &str, raw_value: &str) -> Result<()> {
    if name.is_empty() {
        return Err(TallydError::NotFound);
    }

    let kind = MetricKind::parse(kind)
        .ok_or_else(|| TallydError::BadRequest(format!("unknown metric kind: {kind}")))?;

    match MetricValue::parse(kind, raw_value)? {
        MetricValue::Counter(delta) => store.update_counter(name, delta),
        MetricValue::Gauge(value) => store.update_gauge(name, value),
    }

    tracing::debug!(kind = kind.as_str(), name, "metric updated");
    Ok(())
}
