//! Label sources for the syntax collaborator.
//!
//! A [`LanguageProvider`] is the datasource's handle to label metadata: which
//! label keys exist and which values each key takes in a time range. The
//! editor never talks to it directly; [`LokiSyntax`](crate::state::LokiSyntax)
//! does.

use crate::model::{AbsoluteTimeRange, ProviderError};

pub mod static_labels;

pub use static_labels::StaticLanguageProvider;

/// Source of label keys and values.
pub trait LanguageProvider {
    /// Prepare the provider for the given range.
    ///
    /// Called once before any other method. Syntax is "ready" only after
    /// this succeeds.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError` if labels cannot be loaded.
    fn start(&mut self, range: AbsoluteTimeRange) -> Result<(), ProviderError>;

    /// Label keys known after the last start/refresh, sorted.
    fn label_keys(&self) -> Vec<String>;

    /// Re-fetch label keys for a new range.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError` if labels cannot be loaded.
    fn refresh_label_keys(&mut self, range: AbsoluteTimeRange) -> Result<(), ProviderError>;

    /// Values observed for `key` in `range`.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::UnknownLabel` for keys the provider does not know.
    fn label_values(
        &mut self,
        key: &str,
        range: AbsoluteTimeRange,
    ) -> Result<Vec<String>, ProviderError>;
}
