//! Label/syntax state collaborator.
//!
//! Owns whatever the query field needs to offer label completion: whether
//! the label source has started, which label keys exist, and the values of
//! keys the user has expanded. The editor core only reads
//! [`SyntaxState`] and forwards it to the view.

use crate::model::AbsoluteTimeRange;
use crate::source::LanguageProvider;
use tracing::{debug, warn};

/// A label key and, once loaded, its values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelOption {
    /// Label key.
    pub label: String,
    /// `None` until the key is activated.
    pub values: Option<Vec<String>>,
}

impl LabelOption {
    fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            values: None,
        }
    }
}

/// Snapshot of the syntax collaborator's state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SyntaxState {
    /// Whether the label source has started.
    pub is_syntax_ready: bool,
    /// Known label keys, sorted.
    pub label_options: Vec<LabelOption>,
    /// Label key most recently activated via `set_active_option`.
    pub active_label: Option<String>,
}

/// Syntax collaborator over a [`LanguageProvider`].
#[derive(Debug, Clone, Default)]
pub struct LokiSyntax {
    state: SyntaxState,
    started: bool,
}

impl LokiSyntax {
    /// Collaborator that has not started its provider yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    pub fn state(&self) -> &SyntaxState {
        &self.state
    }

    /// Start the provider on first use.
    ///
    /// Called every render with that render's range; only the first call does
    /// any work. A failed start leaves syntax not ready and is retried on the
    /// next call.
    pub fn sync<P: LanguageProvider>(
        &mut self,
        provider: &mut P,
        range: AbsoluteTimeRange,
    ) -> &SyntaxState {
        if !self.started {
            match provider.start(range) {
                Ok(()) => {
                    self.started = true;
                    self.state.is_syntax_ready = true;
                    self.state.label_options = provider
                        .label_keys()
                        .into_iter()
                        .map(LabelOption::new)
                        .collect();
                    debug!(labels = self.state.label_options.len(), "Syntax ready");
                }
                Err(e) => warn!(error = %e, "Label source failed to start"),
            }
        }
        &self.state
    }

    /// Load values for the label key at `path[0]`.
    ///
    /// Empty paths and unknown keys are ignored (logged).
    pub fn set_active_option<P: LanguageProvider>(
        &mut self,
        provider: &mut P,
        path: &[String],
        range: AbsoluteTimeRange,
    ) {
        let Some(key) = path.first() else {
            return;
        };

        let Some(option) = self
            .state
            .label_options
            .iter_mut()
            .find(|o| &o.label == key)
        else {
            debug!(label = %key, "Ignoring activation of unknown label");
            return;
        };

        match provider.label_values(key, range) {
            Ok(values) => {
                option.values = Some(values);
                self.state.active_label = Some(key.clone());
            }
            Err(e) => warn!(label = %key, error = %e, "Failed to load label values"),
        }
    }

    /// Re-fetch label keys for `range`.
    ///
    /// Values already loaded for keys that still exist are kept.
    pub fn refresh_labels<P: LanguageProvider>(&mut self, provider: &mut P, range: AbsoluteTimeRange) {
        if !self.started {
            self.sync(provider, range);
            return;
        }

        if let Err(e) = provider.refresh_label_keys(range) {
            warn!(error = %e, "Failed to refresh label keys");
            return;
        }

        let previous = std::mem::take(&mut self.state.label_options);
        self.state.label_options = provider
            .label_keys()
            .into_iter()
            .map(|label| {
                previous
                    .iter()
                    .find(|o| o.label == label)
                    .cloned()
                    .unwrap_or_else(|| LabelOption::new(label))
            })
            .collect();

        let active_gone = self
            .state
            .active_label
            .as_ref()
            .is_some_and(|active| !self.state.label_options.iter().any(|o| &o.label == active));
        if active_gone {
            self.state.active_label = None;
        }
    }

    /// Label key following the active one (wrapping), or the first key.
    pub fn next_label(&self) -> Option<String> {
        let options = &self.state.label_options;
        if options.is_empty() {
            return None;
        }
        let next = match &self.state.active_label {
            Some(active) => options
                .iter()
                .position(|o| &o.label == active)
                .map(|i| (i + 1) % options.len())
                .unwrap_or(0),
            None => 0,
        };
        Some(options[next].label.clone())
    }
}

#[cfg(test)]
#[path = "syntax_tests.rs"]
mod tests;
