//! In-memory label source backed by configuration.

use super::LanguageProvider;
use crate::model::{AbsoluteTimeRange, ProviderError};
use std::collections::BTreeMap;
use tracing::debug;

/// Label source that serves a fixed table of label keys and values.
///
/// Used by the binary (labels come from the `[labels]` config table) and by
/// tests. The time range is accepted but does not filter anything.
#[derive(Debug, Clone, Default)]
pub struct StaticLanguageProvider {
    labels: BTreeMap<String, Vec<String>>,
    started: bool,
}

impl StaticLanguageProvider {
    /// Provider over the given label table.
    pub fn new(labels: impl IntoIterator<Item = (String, Vec<String>)>) -> Self {
        Self {
            labels: labels.into_iter().collect(),
            started: false,
        }
    }

    /// Whether `start` has been called.
    pub fn is_started(&self) -> bool {
        self.started
    }
}

impl LanguageProvider for StaticLanguageProvider {
    fn start(&mut self, range: AbsoluteTimeRange) -> Result<(), ProviderError> {
        debug!(from = range.from, to = range.to, keys = self.labels.len(), "Label source started");
        self.started = true;
        Ok(())
    }

    fn label_keys(&self) -> Vec<String> {
        if !self.started {
            return Vec::new();
        }
        self.labels.keys().cloned().collect()
    }

    fn refresh_label_keys(&mut self, range: AbsoluteTimeRange) -> Result<(), ProviderError> {
        debug!(from = range.from, to = range.to, "Label keys refreshed");
        Ok(())
    }

    fn label_values(
        &mut self,
        key: &str,
        _range: AbsoluteTimeRange,
    ) -> Result<Vec<String>, ProviderError> {
        self.labels
            .get(key)
            .cloned()
            .ok_or_else(|| ProviderError::UnknownLabel(key.to_string()))
    }
}
