//! Domain-level keyboard actions independent of key bindings.

/// Demo actions that can be mapped to key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// `crossterm::event::KeyEvent` to `KeyAction` is handled by `KeyBindings`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Scrolling (user gestures)
    /// Scroll up by one line. Default: k/↑
    ScrollUp,
    /// Scroll down by one line. Default: j/↓
    ScrollDown,
    /// Scroll up by one page. Default: Ctrl+u/Page Up
    PageUp,
    /// Scroll down by one page. Default: Ctrl+d/Page Down
    PageDown,
    /// Jump to the top. Default: g/Home
    ScrollToTop,
    /// Jump to the bottom. Default: G/End
    ScrollToBottom,

    // Streaming controls
    /// Start streaming a new message. Default: s
    Start,
    /// Stop streaming and archive the current message. Default: x
    Stop,
    /// Archive the current message (if streaming) and start a new one. Default: n
    Next,
    /// Next now, and again after a random delay. Default: a
    Auto,

    // Application
    /// Quit. Default: q
    Quit,
}

impl KeyAction {
    /// Whether this action is a user scroll gesture.
    pub fn is_scroll(self) -> bool {
        matches!(
            self,
            KeyAction::ScrollUp
                | KeyAction::ScrollDown
                | KeyAction::PageUp
                | KeyAction::PageDown
                | KeyAction::ScrollToTop
                | KeyAction::ScrollToBottom
        )
    }
}
