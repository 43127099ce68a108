//! TUI rendering and terminal management (impure shell)

pub mod input_field;
pub mod query_field;
pub mod styles;

pub use input_field::InputField;
pub use query_field::{MaxLinesField, QueryField, LINE_LIMIT_LABEL};
pub use styles::{ColorConfig, FieldStyles};

use crate::config::keybindings::KeyBindings;
use crate::host::ExploreHost;
use crate::model::{ExploreMode, KeyAction, LokiDatasource};
use crate::source::LanguageProvider;
use crate::state::{derive_absolute_range, LokiSyntax, QueryEditor, QueryHost, TextEdit, TextInput};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use thiserror::Error;
use tracing::{debug, error};

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),
}

/// Which input has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldFocus {
    /// LogQL expression input.
    #[default]
    Expression,
    /// Line-limit input (Logs mode only).
    LineLimit,
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B, P>
where
    B: ratatui::backend::Backend,
    P: LanguageProvider,
{
    terminal: Terminal<B>,
    host: ExploreHost,
    datasource: LokiDatasource<P>,
    editor: QueryEditor,
    expr: TextInput,
    syntax: LokiSyntax,
    explore_mode: ExploreMode,
    focus: FieldFocus,
    key_bindings: KeyBindings,
    styles: FieldStyles,
}

impl<P: LanguageProvider> TuiApp<CrosstermBackend<Stdout>, P> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen
    pub fn new(
        host: ExploreHost,
        datasource: LokiDatasource<P>,
        explore_mode: ExploreMode,
        styles: FieldStyles,
    ) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;

        Ok(Self::with_terminal(
            terminal,
            host,
            datasource,
            explore_mode,
            KeyBindings::default(),
        )
        .with_styles(styles))
    }

    /// Run the main event loop
    ///
    /// Returns when the user quits (Esc or Ctrl+C). Event-driven: redraws
    /// only after input or resize.
    pub fn run(&mut self) -> Result<(), TuiError> {
        self.draw()?;

        loop {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if self.handle_key(key) {
                        return Ok(());
                    }
                    self.draw()?;
                }
                Event::Resize(_, _) => self.draw()?,
                _ => {}
            }
        }
    }

    /// Restore terminal to normal mode
    pub fn restore(&mut self) -> Result<(), TuiError> {
        disable_raw_mode()?;
        self.terminal.backend_mut().execute(LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;
        Ok(())
    }
}

impl<B, P> TuiApp<B, P>
where
    B: ratatui::backend::Backend,
    P: LanguageProvider,
{
    /// Build the app on an existing terminal.
    ///
    /// Mounts the editor, which pushes the initial line limit to the host.
    pub fn with_terminal(
        terminal: Terminal<B>,
        mut host: ExploreHost,
        datasource: LokiDatasource<P>,
        explore_mode: ExploreMode,
        key_bindings: KeyBindings,
    ) -> Self {
        let editor = QueryEditor::mount(&mut host, datasource.max_lines);
        let expr = TextInput::new(host.query().expr.clone());

        Self {
            terminal,
            host,
            datasource,
            editor,
            expr,
            syntax: LokiSyntax::new(),
            explore_mode,
            focus: FieldFocus::Expression,
            key_bindings,
            styles: FieldStyles::default(),
        }
    }

    /// Override field styles.
    pub fn with_styles(mut self, styles: FieldStyles) -> Self {
        self.styles = styles;
        self
    }

    /// Handle a key event. Returns `true` if the user asked to quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if let Some(action) = self.key_bindings.get(key) {
            debug!(?action, "Key action");
            return self.handle_action(action);
        }

        match self.focus {
            FieldFocus::Expression => self.handle_expression_key(key),
            FieldFocus::LineLimit => {
                self.editor.handle_key(&mut self.host, key);
            }
        }
        false
    }

    fn handle_action(&mut self, action: KeyAction) -> bool {
        match action {
            KeyAction::Quit => return true,
            KeyAction::NextField | KeyAction::PrevField => self.cycle_focus(),
            KeyAction::ToggleMode => {
                self.explore_mode = self.explore_mode.toggled();
                if self.explore_mode != ExploreMode::Logs {
                    self.focus = FieldFocus::Expression;
                }
            }
            KeyAction::RefreshLabels => {
                let range = self.absolute_range();
                self.syntax
                    .refresh_labels(&mut self.datasource.language_provider, range);
            }
            KeyAction::NextLabel => {
                let range = self.absolute_range();
                let provider = &mut self.datasource.language_provider;
                self.syntax.sync(provider, range);
                if let Some(label) = self.syntax.next_label() {
                    self.syntax.set_active_option(provider, &[label], range);
                }
            }
        }
        false
    }

    /// Two fields only, so next and previous are the same move.
    fn cycle_focus(&mut self) {
        self.focus = match self.focus {
            FieldFocus::Expression if self.explore_mode == ExploreMode::Logs => {
                FieldFocus::LineLimit
            }
            _ => FieldFocus::Expression,
        };
    }

    fn handle_expression_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Enter {
            self.host.on_run_query();
            return;
        }

        let Some(edit) = TextEdit::from_key(key) else {
            return;
        };

        let previous = std::mem::take(&mut self.expr);
        let previous_text = previous.text().to_owned();
        self.expr = crate::state::apply_edit(previous, edit);

        if self.expr.text() != previous_text {
            let next = self.host.query().with_expr(self.expr.text());
            self.host.on_change(next);
        }
    }

    fn absolute_range(&self) -> crate::model::AbsoluteTimeRange {
        derive_absolute_range(self.host.data(), chrono::Utc::now())
    }

    /// Render one frame.
    pub fn draw(&mut self) -> Result<(), TuiError> {
        let range = self.absolute_range();
        self.syntax
            .sync(&mut self.datasource.language_provider, range);

        let extra_field = (self.explore_mode == ExploreMode::Logs).then(|| {
            MaxLinesField::new(
                self.editor.max_lines_input(),
                self.focus == FieldFocus::LineLimit,
            )
        });

        let field = QueryField::new(&self.expr, self.syntax.state(), range)
            .expr_focused(self.focus == FieldFocus::Expression)
            .history_len(self.host.history().len())
            .extra_field(extra_field)
            .styles(self.styles);

        self.terminal
            .draw(|frame| frame.render_widget(field, frame.area()))?;
        Ok(())
    }

    /// The host (query, history, run data).
    pub fn host(&self) -> &ExploreHost {
        &self.host
    }

    /// The line-limit editor.
    pub fn editor(&self) -> &QueryEditor {
        &self.editor
    }

    /// Current explore mode.
    pub fn explore_mode(&self) -> ExploreMode {
        self.explore_mode
    }

    /// Field with keyboard focus.
    pub fn focus(&self) -> FieldFocus {
        self.focus
    }

    /// The terminal, for buffer inspection in tests.
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// Consume the app, returning the host.
    pub fn into_host(self) -> ExploreHost {
        self.host
    }
}

/// Run the editor in the real terminal until the user quits.
///
/// Terminal state is restored even if the event loop fails. Returns the host
/// so the caller can report the final query.
pub fn run<P: LanguageProvider>(
    host: ExploreHost,
    datasource: LokiDatasource<P>,
    explore_mode: ExploreMode,
    styles: FieldStyles,
) -> Result<ExploreHost, TuiError> {
    let mut app = TuiApp::new(host, datasource, explore_mode, styles)?;
    let result = app.run();
    let restored = app.restore();
    exit_status(result, restored)?;
    Ok(app.into_host())
}

/// Combine the event loop's outcome with the terminal restore.
///
/// A restore failure wins, since the terminal is left unusable; an event loop
/// error behind it is logged so it is not lost.
fn exit_status(
    run_result: Result<(), TuiError>,
    restore_result: Result<(), TuiError>,
) -> Result<(), TuiError> {
    match (run_result, restore_result) {
        (Err(run_err), Err(restore_err)) => {
            error!(error = %run_err, "Event loop failed before terminal restore failed");
            Err(restore_err)
        }
        (run_result, Ok(())) => run_result,
        (Ok(()), Err(restore_err)) => Err(restore_err),
    }
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;
