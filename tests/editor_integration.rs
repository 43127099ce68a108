//! Integration tests: the editor driven through its public API, end to end.

use chrono::{TimeZone, Utc};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use lokiq::config::KeyBindings;
use lokiq::host::ExploreHost;
use lokiq::model::{ExploreMode, LokiDatasource, LokiQuery};
use lokiq::source::StaticLanguageProvider;
use lokiq::state::{derive_absolute_range, QueryEditor, QueryHost};
use lokiq::view::{TuiApp, LINE_LIMIT_LABEL};
use ratatui::backend::TestBackend;
use ratatui::Terminal;

const EXPR: &str = "rate({job=\"x\"}[5m])";

fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn app(
    expr: &str,
    max_lines: Option<u64>,
    mode: ExploreMode,
) -> TuiApp<TestBackend, StaticLanguageProvider> {
    TuiApp::with_terminal(
        Terminal::new(TestBackend::new(80, 12)).unwrap(),
        ExploreHost::new(LokiQuery::new("A", expr)),
        LokiDatasource::new(max_lines, StaticLanguageProvider::default()),
        mode,
        KeyBindings::default(),
    )
}

fn screen(app: &mut TuiApp<TestBackend, StaticLanguageProvider>) -> String {
    app.draw().unwrap();
    let buffer = app.terminal().backend().buffer();
    let area = buffer.area();
    (area.top()..area.bottom())
        .map(|y| {
            (area.left()..area.right())
                .map(|x| buffer[(x, y)].symbol().to_string())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn ten_in_line_limit_writes_ten_once() {
    let mut host = ExploreHost::new(LokiQuery::new("A", EXPR));
    let mut editor = QueryEditor::mount(&mut host, None);
    let after_mount = host.change_count();

    editor.set_max_lines_text(&mut host, "10");

    assert_eq!(host.change_count(), after_mount + 1);
    assert_eq!(host.query().max_lines, Some(10.0));
}

#[test]
fn replacing_line_limit_text_then_enter_runs_with_new_cap() {
    let mut app = app(EXPR, Some(1000), ExploreMode::Logs);
    app.handle_key(press(KeyCode::Tab));
    for _ in 0..4 {
        app.handle_key(press(KeyCode::Backspace));
    }
    for c in "50".chars() {
        app.handle_key(press(KeyCode::Char(c)));
    }

    app.handle_key(press(KeyCode::Enter));

    assert_eq!(app.host().history().len(), 1);
    assert_eq!(app.host().history()[0].max_lines, Some(50.0));
}

#[test]
fn clearing_line_limit_defers_to_datasource_default() {
    let mut app = app(EXPR, Some(1000), ExploreMode::Logs);
    app.handle_key(press(KeyCode::Tab));
    for _ in 0..4 {
        app.handle_key(press(KeyCode::Backspace));
    }

    assert_eq!(app.editor().max_lines_text(), "");
    assert_eq!(app.host().query().max_lines, None);

    // Enter with empty text does not run
    app.handle_key(press(KeyCode::Enter));
    assert!(app.host().history().is_empty());
}

#[test]
fn line_limit_field_rendered_iff_logs_mode() {
    let mut logs = app(EXPR, Some(1000), ExploreMode::Logs);
    let mut metrics = app(EXPR, Some(1000), ExploreMode::Metrics);

    assert!(screen(&mut logs).contains(LINE_LIMIT_LABEL));
    assert!(!screen(&mut metrics).contains(LINE_LIMIT_LABEL));
}

#[test]
fn range_before_first_run_is_ten_second_fallback() {
    let host = ExploreHost::new(LokiQuery::new("A", EXPR));
    let range = derive_absolute_range(host.data(), Utc::now());
    assert_eq!(range.to - range.from, 10_000);
}

#[test]
fn range_after_run_comes_from_host_request() {
    fn fixed_now() -> chrono::DateTime<Utc> {
        Utc.timestamp_millis_opt(10_000_000).unwrap()
    }
    let mut host = ExploreHost::new(LokiQuery::new("A", EXPR)).with_clock(fixed_now);

    host.on_run_query();
    let range = derive_absolute_range(host.data(), Utc::now());

    assert_eq!(range.to, 10_000_000);
    assert_eq!(range.from, 10_000_000 - 3_600_000);
}

#[test]
fn final_query_serializes_for_output() {
    let mut host = ExploreHost::new(LokiQuery::new("A", EXPR));
    let mut editor = QueryEditor::mount(&mut host, Some(1000));
    editor.set_max_lines_text(&mut host, "3.5");

    let json = serde_json::to_string(&host.into_query()).unwrap();

    assert_eq!(
        json,
        r#"{"refId":"A","expr":"rate({job=\"x\"}[5m])","maxLines":3.5}"#
    );
}
