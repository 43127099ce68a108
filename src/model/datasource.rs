//! Datasource-level settings the editor reads.

/// Line cap applied by the datasource when a query leaves `max_lines` unset.
pub const DEFAULT_MAX_LINES: u64 = 1000;

/// Datasource handle passed down by the host.
///
/// Generic over the label source so tests and the binary can plug in
/// whatever provider they have.
#[derive(Debug, Clone)]
pub struct LokiDatasource<P> {
    /// Configured default line cap, if any.
    pub max_lines: Option<u64>,
    /// Label/syntax source consumed by the syntax collaborator.
    pub language_provider: P,
}

impl<P> LokiDatasource<P> {
    /// Datasource with the given default line cap.
    pub fn new(max_lines: Option<u64>, language_provider: P) -> Self {
        Self {
            max_lines,
            language_provider,
        }
    }
}
