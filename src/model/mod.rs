//! Domain model types.

pub mod datasource;
pub mod error;
pub mod key_action;
pub mod query;
pub mod time_range;

pub use datasource::{LokiDatasource, DEFAULT_MAX_LINES};
pub use error::{AppError, ProviderError};
pub use key_action::KeyAction;
pub use query::{ExploreMode, LokiQuery, UnknownExploreMode};
pub use time_range::{AbsoluteTimeRange, DataQueryRequest, PanelData, TimeRange};
