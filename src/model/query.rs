//! Query record owned by the host, plus the explore mode enum.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A Loki query as the host stores it.
///
/// `max_lines` is either absent (defer to the datasource default) or a
/// non-negative finite number. The editor never writes NaN or a negative
/// value here.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LokiQuery {
    /// Host-assigned identifier for the query row (e.g. "A").
    #[serde(default)]
    pub ref_id: String,

    /// LogQL expression text.
    #[serde(default)]
    pub expr: String,

    /// Cap on returned log lines.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_lines: Option<f64>,
}

impl LokiQuery {
    /// Create a query with the given expression and no line cap.
    pub fn new(ref_id: impl Into<String>, expr: impl Into<String>) -> Self {
        Self {
            ref_id: ref_id.into(),
            expr: expr.into(),
            max_lines: None,
        }
    }

    /// Copy of this query with `max_lines` replaced.
    pub fn with_max_lines(&self, max_lines: Option<f64>) -> Self {
        Self {
            max_lines,
            ..self.clone()
        }
    }

    /// Copy of this query with `expr` replaced.
    pub fn with_expr(&self, expr: impl Into<String>) -> Self {
        Self {
            expr: expr.into(),
            ..self.clone()
        }
    }

    /// Whether the expression text is non-empty.
    pub fn has_expr(&self) -> bool {
        !self.expr.is_empty()
    }
}

/// Which query UI the host has active.
///
/// The line-limit field only exists in [`ExploreMode::Logs`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExploreMode {
    /// Log browsing; line limit applies.
    #[default]
    Logs,
    /// Metric queries; no line limit.
    Metrics,
}

impl ExploreMode {
    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            ExploreMode::Logs => ExploreMode::Metrics,
            ExploreMode::Metrics => ExploreMode::Logs,
        }
    }
}

impl fmt::Display for ExploreMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExploreMode::Logs => write!(f, "Logs"),
            ExploreMode::Metrics => write!(f, "Metrics"),
        }
    }
}

/// Error returned when an explore mode name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown explore mode '{0}' (expected 'logs' or 'metrics')")]
pub struct UnknownExploreMode(pub String);

impl FromStr for ExploreMode {
    type Err = UnknownExploreMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "logs" => Ok(ExploreMode::Logs),
            "metrics" => Ok(ExploreMode::Metrics),
            _ => Err(UnknownExploreMode(s.to_string())),
        }
    }
}
