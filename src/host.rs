//! In-process host for running the editor standalone.
//!
//! Plays the part of the surrounding Explore page: owns the query, records
//! every change, and "runs" queries by stamping a request time range and
//! appending to history. There is no backend; running a query only updates
//! what the editor sees.

use crate::model::{LokiQuery, PanelData};
use crate::state::QueryHost;
use chrono::{DateTime, Duration, Utc};
use tracing::info;

/// Default lookback window stamped on a run request, in minutes.
pub const DEFAULT_RUN_WINDOW_MINUTES: i64 = 60;

/// Explore host owning the query and its run history.
#[derive(Debug, Clone)]
pub struct ExploreHost {
    query: LokiQuery,
    data: Option<PanelData>,
    history: Vec<LokiQuery>,
    changes: usize,
    run_window: Duration,
    clock: fn() -> DateTime<Utc>,
}

impl ExploreHost {
    /// Host for `query` that has not run anything yet.
    pub fn new(query: LokiQuery) -> Self {
        Self {
            query,
            data: None,
            history: Vec::new(),
            changes: 0,
            run_window: Duration::minutes(DEFAULT_RUN_WINDOW_MINUTES),
            clock: Utc::now,
        }
    }

    /// Use a fixed clock, for deterministic tests.
    pub fn with_clock(mut self, clock: fn() -> DateTime<Utc>) -> Self {
        self.clock = clock;
        self
    }

    /// Lookback window for run requests.
    pub fn with_run_window(mut self, window: Duration) -> Self {
        self.run_window = window;
        self
    }

    /// Result data of the last run, if any.
    pub fn data(&self) -> Option<&PanelData> {
        self.data.as_ref()
    }

    /// Queries run so far, oldest first.
    pub fn history(&self) -> &[LokiQuery] {
        &self.history
    }

    /// Number of `on_change` calls received.
    pub fn change_count(&self) -> usize {
        self.changes
    }

    /// Take the final query, consuming the host.
    pub fn into_query(self) -> LokiQuery {
        self.query
    }
}

impl QueryHost for ExploreHost {
    fn query(&self) -> &LokiQuery {
        &self.query
    }

    fn on_change(&mut self, query: LokiQuery) {
        self.changes += 1;
        self.query = query;
    }

    fn on_run_query(&mut self) {
        let now = (self.clock)();
        self.data = Some(PanelData::with_range(now - self.run_window, now));
        self.history.push(self.query.clone());
        info!(
            expr = %self.query.expr,
            max_lines = ?self.query.max_lines,
            runs = self.history.len(),
            "Query run"
        );
    }
}
