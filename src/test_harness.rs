//! Shared helpers for rendering tests.

use crate::config::KeyBindings;
use crate::host::ExploreHost;
use crate::model::{ExploreMode, LokiDatasource, LokiQuery};
use crate::source::{LanguageProvider, StaticLanguageProvider};
use crate::view::TuiApp;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::Terminal;

/// Convert a ratatui buffer to a string representation for assertions.
///
/// Captures the visual output character by character, preserving layout.
/// Empty lines are removed.
pub fn buffer_to_string(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area();
    let mut lines = Vec::new();

    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            let cell = &buffer[(x, y)];
            line.push_str(cell.symbol());
        }
        let trimmed = line.trim_end();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }

    lines.join("\n")
}

/// App on an 80x12 test terminal with a small label table.
pub fn test_app(
    expr: &str,
    datasource_max_lines: Option<u64>,
    mode: ExploreMode,
) -> TuiApp<TestBackend, StaticLanguageProvider> {
    let terminal = Terminal::new(TestBackend::new(80, 12)).expect("test terminal");
    let provider = StaticLanguageProvider::new([
        ("app".to_string(), vec!["loki".to_string()]),
        ("job".to_string(), vec!["api".to_string(), "web".to_string()]),
    ]);
    TuiApp::with_terminal(
        terminal,
        ExploreHost::new(LokiQuery::new("A", expr)),
        LokiDatasource::new(datasource_max_lines, provider),
        mode,
        KeyBindings::default(),
    )
}

/// Press a key without modifiers.
pub fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

/// Type each char of `text`.
pub fn type_text<B, P>(app: &mut TuiApp<B, P>, text: &str)
where
    B: ratatui::backend::Backend,
    P: LanguageProvider,
{
    for c in text.chars() {
        app.handle_key(press(KeyCode::Char(c)));
    }
}

/// Render once and return the screen as text.
pub fn screen<P: LanguageProvider>(app: &mut TuiApp<TestBackend, P>) -> String {
    app.draw().expect("draw");
    buffer_to_string(app.terminal().backend().buffer())
}
