//! Domain-level keyboard actions independent of key bindings.

/// Actions that can be mapped to configurable key bindings.
///
/// Text editing keys (characters, Backspace, arrows) and Enter are not
/// actions; they are routed to whichever field has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    /// Move focus to the next field. Default: Tab
    NextField,
    /// Move focus to the previous field. Default: Shift+Tab
    PrevField,
    /// Re-fetch label keys for the current range. Default: Ctrl+r
    RefreshLabels,
    /// Activate the next label key and load its values. Default: Ctrl+n
    NextLabel,
    /// Switch between Logs and Metrics mode. Default: Ctrl+t
    ToggleMode,
    /// Exit the editor. Default: Esc/Ctrl+c
    Quit,
}
