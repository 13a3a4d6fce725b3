//! Metric kinds and typed update values.
//!
//! Counters and gauges are independent namespaces: the same name may exist
//! in both with unrelated values.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TallydError};

/// The two supported metric kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricKind {
    /// Running sum of all deltas applied to a name.
    Counter,
    /// Most recent value written to a name.
    Gauge,
}

impl MetricKind {
    /// Parse the wire representation. Anything other than `counter` or
    /// `gauge` is unknown.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "counter" => Some(MetricKind::Counter),
            "gauge" => Some(MetricKind::Gauge),
            _ => None,
        }
    }

    /// Wire representation.
    pub fn as_str(self) -> &'static str {
        match self {
            MetricKind::Counter => "counter",
            MetricKind::Gauge => "gauge",
        }
    }
}

/// A validated update value, typed per kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MetricValue {
    /// Signed counter delta.
    Counter(i64),
    /// Gauge value (NaN/±Inf pass through unchanged).
    Gauge(f64),
}

impl MetricValue {
    /// Parse a raw textual value for the given kind.
    ///
    /// Counters take base-10 signed 64-bit integers; gauges take standard
    /// floating-point literals (decimal or scientific notation).
    pub fn parse(kind: MetricKind, raw: &str) -> Result<Self> {
        match kind {
            MetricKind::Counter => raw
                .parse::<i64>()
                .map(MetricValue::Counter)
                .map_err(|_| TallydError::BadRequest(format!("invalid counter value: {raw}"))),
            MetricKind::Gauge => raw
                .parse::<f64>()
                .map(MetricValue::Gauge)
                .map_err(|_| TallydError::BadRequest(format!("invalid gauge value: {raw}"))),
        }
    }
}
