//! Absolute time range derivation (pure).

use crate::model::{AbsoluteTimeRange, PanelData};
use chrono::{DateTime, Utc};

/// Width of the fallback window used before the host has run anything.
pub const FALLBACK_WINDOW_MS: i64 = 10_000;

/// Compute the absolute range handed to the syntax provider and query field.
///
/// Uses the host's last request range when there is one, else
/// `{now - 10s, now}`. Recomputed every render; nothing is cached.
pub fn derive_absolute_range(data: Option<&PanelData>, now: DateTime<Utc>) -> AbsoluteTimeRange {
    match data.and_then(|d| d.request.as_ref()) {
        Some(request) => AbsoluteTimeRange {
            from: request.range.from.timestamp_millis(),
            to: request.range.to.timestamp_millis(),
        },
        None => {
            let to = now.timestamp_millis();
            AbsoluteTimeRange {
                from: to - FALLBACK_WINDOW_MS,
                to,
            }
        }
    }
}
