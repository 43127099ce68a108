//! Editor state machine (pure).
//!
//! All transitions are plain function calls testable without a terminal.
//! Host side effects go through the [`QueryHost`] trait.

pub mod editor;
pub mod max_lines;
pub mod syntax;
pub mod text_input;
pub mod time_range;

pub use editor::{change_query_limit, initial_max_lines_text, Propagation, QueryEditor, QueryHost};
pub use max_lines::{enter_triggers_run, normalize, NormalizedMaxLines};
pub use syntax::{LabelOption, LokiSyntax, SyntaxState};
pub use text_input::{apply_edit, TextEdit, TextInput};
pub use time_range::derive_absolute_range;
