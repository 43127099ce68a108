//! Time range types handed over by the host.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Concrete `{from, to}` pair in epoch milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AbsoluteTimeRange {
    /// Range start, epoch milliseconds.
    pub from: i64,
    /// Range end, epoch milliseconds.
    pub to: i64,
}

impl AbsoluteTimeRange {
    /// Width of the range in milliseconds.
    pub fn span_millis(&self) -> i64 {
        self.to - self.from
    }
}

/// Time range of an executed request, as timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    /// Range start.
    pub from: DateTime<Utc>,
    /// Range end.
    pub to: DateTime<Utc>,
}

/// Metadata of the last request the host issued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataQueryRequest {
    /// Range the request covered.
    pub range: TimeRange,
}

/// Result data the host passes down after running a query.
///
/// `request` is `None` until the host has run something.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PanelData {
    /// Last issued request, if any.
    pub request: Option<DataQueryRequest>,
}

impl PanelData {
    /// Panel data carrying a request over `[from, to]`.
    pub fn with_range(from: DateTime<Utc>, to: DateTime<Utc>) -> Self {
        Self {
            request: Some(DataQueryRequest {
                range: TimeRange { from, to },
            }),
        }
    }
}
