//! Query field: expression input, optional extra field, label/status panel.

use crate::model::AbsoluteTimeRange;
use crate::state::{SyntaxState, TextInput};
use crate::view::input_field::InputField;
use crate::view::styles::FieldStyles;
use chrono::{TimeZone, Utc};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

/// Title of the line-limit field.
pub const LINE_LIMIT_LABEL: &str = "Line limit";

/// Width of the extra field column.
const EXTRA_FIELD_WIDTH: u16 = 16;

/// Line-limit input shown next to the expression in Logs mode.
pub struct MaxLinesField<'a> {
    input: &'a TextInput,
    focused: bool,
}

impl<'a> MaxLinesField<'a> {
    /// Field over `input`, highlighted when `focused`.
    pub fn new(input: &'a TextInput, focused: bool) -> Self {
        Self { input, focused }
    }
}

/// The rendered query editor.
///
/// `extra_field` is the optional slot for the line-limit input; the caller
/// decides whether it exists.
pub struct QueryField<'a> {
    expr: &'a TextInput,
    expr_focused: bool,
    syntax: &'a SyntaxState,
    absolute_range: AbsoluteTimeRange,
    history_len: usize,
    extra_field: Option<MaxLinesField<'a>>,
    styles: FieldStyles,
}

impl<'a> QueryField<'a> {
    /// Query field with no extra field and default styles.
    pub fn new(expr: &'a TextInput, syntax: &'a SyntaxState, absolute_range: AbsoluteTimeRange) -> Self {
        Self {
            expr,
            expr_focused: false,
            syntax,
            absolute_range,
            history_len: 0,
            extra_field: None,
            styles: FieldStyles::default(),
        }
    }

    /// Mark the expression input as focused.
    pub fn expr_focused(mut self, focused: bool) -> Self {
        self.expr_focused = focused;
        self
    }

    /// Number of runs shown in the status panel.
    pub fn history_len(mut self, len: usize) -> Self {
        self.history_len = len;
        self
    }

    /// Set the extra field slot.
    pub fn extra_field(mut self, field: Option<MaxLinesField<'a>>) -> Self {
        self.extra_field = field;
        self
    }

    /// Override styles.
    pub fn styles(mut self, styles: FieldStyles) -> Self {
        self.styles = styles;
        self
    }

    fn status_lines(&self) -> Vec<Line<'static>> {
        let mut lines = vec![Line::from(vec![
            Span::styled("Range: ", self.styles.muted),
            Span::raw(format_range(self.absolute_range)),
            Span::styled("  History: ", self.styles.muted),
            Span::raw(self.history_len.to_string()),
        ])];

        if !self.syntax.is_syntax_ready {
            lines.push(Line::styled("Loading labels...", self.styles.muted));
            return lines;
        }

        let mut labels = vec![Span::styled("Labels: ", self.styles.muted)];
        if self.syntax.label_options.is_empty() {
            labels.push(Span::styled("(none)", self.styles.muted));
        }
        for option in &self.syntax.label_options {
            labels.push(Span::styled(option.label.clone(), self.styles.label_key));
            labels.push(Span::raw(" "));
        }
        lines.push(Line::from(labels));

        let active = self.syntax.active_label.as_ref().and_then(|key| {
            self.syntax
                .label_options
                .iter()
                .find(|o| &o.label == key)
                .and_then(|o| o.values.as_ref().map(|v| (key, v)))
        });
        if let Some((key, values)) = active {
            lines.push(Line::from(vec![
                Span::styled(format!("{key}: "), self.styles.label_key),
                Span::raw(values.join(", ")),
            ]));
        }

        lines
    }
}

/// `from .. to` as UTC wall-clock times.
fn format_range(range: AbsoluteTimeRange) -> String {
    let fmt = |ms: i64| {
        Utc.timestamp_millis_opt(ms)
            .single()
            .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_else(|| ms.to_string())
    };
    format!("{} .. {}", fmt(range.from), fmt(range.to))
}

impl Widget for QueryField<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Input row
                Constraint::Min(0),    // Status panel
            ])
            .split(area);

        let input_row = match &self.extra_field {
            Some(_) => Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Min(10), Constraint::Length(EXTRA_FIELD_WIDTH)])
                .split(rows[0]),
            None => Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Min(0)])
                .split(rows[0]),
        };

        InputField::new("Query", self.expr)
            .focused(self.expr_focused)
            .styles(self.styles)
            .render(input_row[0], buf);

        if let Some(extra) = &self.extra_field {
            InputField::new(LINE_LIMIT_LABEL, extra.input)
                .focused(extra.focused)
                .styles(self.styles)
                .render(input_row[1], buf);
        }

        Paragraph::new(self.status_lines())
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Labels")
                    .border_style(self.styles.unfocused_border),
            )
            .render(rows[1], buf);
    }
}
