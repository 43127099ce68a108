//! Error types for the lokiq application.
//!
//! The editor core never fails: malformed line limits map to defined values
//! and guarded write-backs drop silently. Everything here belongs to the
//! shell around it (configuration, logging, terminal, output).
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level error returned from the binary's main logic
//!   - [`ConfigError`](crate::config::ConfigError) - config file read/parse failures
//!   - [`LoggingError`](crate::logging::LoggingError) - tracing setup failures
//!   - [`ProviderError`] - label source failures (non-fatal inside the editor)
//!   - `std::io::Error` - terminal failures
//!   - `serde_json::Error` - failure writing the final query

use thiserror::Error;

/// Top-level application error.
///
/// All domain errors convert via `From`, so `?` works throughout `main`.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded.
    ///
    /// A missing config file is not an error; this only fires when a file
    /// exists and cannot be read or parsed.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Tracing could not be initialized.
    #[error("Logging error: {0}")]
    Logging(#[from] crate::logging::LoggingError),

    /// Terminal or TUI rendering error.
    ///
    /// Fatal: without a working terminal the editor cannot run.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),

    /// The final query could not be serialized for output.
    #[error("Failed to serialize query: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Errors from a label source.
///
/// The syntax collaborator logs these and stays "not ready"; they never reach
/// the user as a hard failure.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProviderError {
    /// The requested label key is not known to the provider.
    ///
    /// ```
    /// use lokiq::model::ProviderError;
    ///
    /// let err = ProviderError::UnknownLabel("pod".to_string());
    /// assert!(err.to_string().contains("'pod'"));
    /// ```
    #[error("Unknown label '{0}'")]
    UnknownLabel(String),

    /// The provider could not serve labels (e.g. backend unreachable).
    #[error("Label source unavailable: {0}")]
    Unavailable(String),
}
