//! Line-limit propagation (pure core around a host boundary).
//!
//! [`QueryEditor`] owns the raw line-limit text. Every accepted mutation of
//! that text immediately runs the propagation rule: normalize, then write
//! the candidate query back to the host if the query has an expression.
//! Nothing is deferred or coalesced.

use crate::model::LokiQuery;
use crate::state::max_lines::{enter_triggers_run, normalize};
use crate::state::text_input::{apply_edit, TextEdit, TextInput};
use crossterm::event::{KeyCode, KeyEvent};
use tracing::debug;

/// Callbacks and current query provided by whoever embeds the editor.
///
/// The host owns the query. The editor reads it through [`QueryHost::query`]
/// and proposes replacements through [`QueryHost::on_change`]; whether the
/// host adopts them is its business.
pub trait QueryHost {
    /// Current query snapshot.
    fn query(&self) -> &LokiQuery;

    /// Replace the query. Fire-and-forget.
    fn on_change(&mut self, query: LokiQuery);

    /// Execute the current query now. Fire-and-forget.
    fn on_run_query(&mut self);

    /// Whether this host accepts re-run requests at all.
    fn can_run_query(&self) -> bool {
        true
    }
}

/// What the propagation rule did with a line-limit value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Propagation {
    /// `on_change` was called.
    Emitted,
    /// `on_change` then `on_run_query` were called.
    EmittedAndRan,
    /// Query expression was empty; nothing was sent.
    Dropped,
}

/// Line-limit editor state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryEditor {
    max_lines: TextInput,
}

impl QueryEditor {
    /// Create the editor and push the initial line limit to the host once.
    ///
    /// The initial text comes from the query's own `max_lines`, else the
    /// datasource default, else empty.
    pub fn mount<H: QueryHost>(host: &mut H, datasource_max_lines: Option<u64>) -> Self {
        let text = initial_max_lines_text(host.query(), datasource_max_lines);
        let editor = Self {
            max_lines: TextInput::new(text),
        };
        change_query_limit(host, editor.max_lines_text(), false);
        editor
    }

    /// Raw line-limit text as shown in the field.
    pub fn max_lines_text(&self) -> &str {
        self.max_lines.text()
    }

    /// Line-limit text with its cursor, for rendering.
    pub fn max_lines_input(&self) -> &TextInput {
        &self.max_lines
    }

    /// Replace the line-limit text; propagate only if it changed.
    ///
    /// Setting the current text again returns `None` and leaves the host
    /// untouched.
    pub fn set_max_lines_text<H: QueryHost>(
        &mut self,
        host: &mut H,
        text: impl Into<String>,
    ) -> Option<Propagation> {
        let text = text.into();
        if text == self.max_lines_text() {
            return None;
        }
        self.max_lines = TextInput::new(text);
        Some(change_query_limit(host, self.max_lines.text(), false))
    }

    /// Apply one edit; propagate only if the text actually changed.
    ///
    /// Cursor-only moves return `None`.
    pub fn edit_max_lines<H: QueryHost>(
        &mut self,
        host: &mut H,
        edit: TextEdit,
    ) -> Option<Propagation> {
        let before = std::mem::take(&mut self.max_lines);
        let previous_text = before.text().to_owned();
        self.max_lines = apply_edit(before, edit);

        if self.max_lines.text() == previous_text {
            return None;
        }
        Some(change_query_limit(host, self.max_lines.text(), false))
    }

    /// Handle a key pressed while the line-limit field has focus.
    ///
    /// Enter re-runs the query when the raw text's leading integer is
    /// positive; other keys are text edits. Returns `true` if the key was
    /// consumed.
    pub fn handle_key<H: QueryHost>(&mut self, host: &mut H, key: KeyEvent) -> bool {
        if key.code == KeyCode::Enter {
            self.on_enter(host);
            return true;
        }

        match TextEdit::from_key(key) {
            Some(edit) => {
                self.edit_max_lines(host, edit);
                true
            }
            None => false,
        }
    }

    /// Enter in the line-limit field.
    ///
    /// Returns whether a re-run was requested.
    pub fn on_enter<H: QueryHost>(&self, host: &mut H) -> bool {
        // Leading-integer check on the raw text, not the normalized value:
        // "-5" stores 0 but does not re-run.
        if enter_triggers_run(self.max_lines_text()) && host.can_run_query() {
            debug!(max_lines = self.max_lines_text(), "Line limit submitted, running query");
            host.on_run_query();
            return true;
        }
        false
    }
}

/// Initial field text: query value, else datasource default, else empty.
pub fn initial_max_lines_text(query: &LokiQuery, datasource_max_lines: Option<u64>) -> String {
    query
        .max_lines
        .map(|n| n.to_string())
        .or_else(|| datasource_max_lines.map(|n| n.to_string()))
        .unwrap_or_default()
}

/// The propagation rule.
///
/// Builds `query` with `max_lines = normalize(value)` and sends it to the
/// host if the current expression is non-empty. With `override_run`, a
/// successful write is followed by a re-run request when the host supports
/// one.
pub fn change_query_limit<H: QueryHost>(host: &mut H, value: &str, override_run: bool) -> Propagation {
    let current = host.query();
    if !current.has_expr() {
        debug!(max_lines = value, "Empty expression, line limit not written");
        return Propagation::Dropped;
    }

    let next = current.with_max_lines(normalize(value).into_option());
    debug!(max_lines = ?next.max_lines, raw = value, "Writing line limit to query");
    host.on_change(next);

    if override_run && host.can_run_query() {
        host.on_run_query();
        return Propagation::EmittedAndRan;
    }
    Propagation::Emitted
}

#[cfg(test)]
#[path = "editor_tests.rs"]
mod tests;
