//! Field styling.

use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    /// Explicitly enabled or disabled.
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self::new(true)
    }
}

// ===== FieldStyles =====

/// Styles for input fields and the status panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldStyles {
    /// Border of the focused field.
    pub focused_border: Style,
    /// Border of other fields.
    pub unfocused_border: Style,
    /// Cell under the cursor.
    pub cursor: Style,
    /// Secondary text.
    pub muted: Style,
    /// Label keys in the status panel.
    pub label_key: Style,
}

impl FieldStyles {
    /// Styles for the given color configuration.
    ///
    /// Without colors, focus is shown with bold/reverse only.
    pub fn new(colors: ColorConfig) -> Self {
        if colors.colors_enabled() {
            Self {
                focused_border: Style::default().fg(Color::Cyan),
                unfocused_border: Style::default().fg(Color::DarkGray),
                cursor: Style::default()
                    .bg(Color::White)
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD),
                muted: Style::default().fg(Color::DarkGray),
                label_key: Style::default().fg(Color::Yellow),
            }
        } else {
            Self {
                focused_border: Style::default().add_modifier(Modifier::BOLD),
                unfocused_border: Style::default(),
                cursor: Style::default().add_modifier(Modifier::REVERSED),
                muted: Style::default(),
                label_key: Style::default(),
            }
        }
    }

    /// Border style for a field.
    pub fn border(&self, focused: bool) -> Style {
        if focused {
            self.focused_border
        } else {
            self.unfocused_border
        }
    }
}

impl Default for FieldStyles {
    fn default() -> Self {
        Self::new(ColorConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_color_flag_disables_colors() {
        assert!(!ColorConfig::from_env_and_args(true).colors_enabled());
    }

    #[test]
    fn monochrome_styles_have_no_foreground_colors() {
        let styles = FieldStyles::new(ColorConfig::new(false));
        assert_eq!(styles.focused_border.fg, None);
        assert_eq!(styles.label_key.fg, None);
    }

    #[test]
    fn focused_border_differs_from_unfocused() {
        let styles = FieldStyles::default();
        assert_ne!(styles.border(true), styles.border(false));
    }
}
