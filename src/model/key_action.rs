//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// `crossterm::event::KeyEvent` to `KeyAction` is handled by
/// [`KeyBindings`](crate::config::KeyBindings). Printable characters that
/// have no binding are typed into the search field instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Carousel
    /// Swipe to the previous page; stops at the first page. Default: ←/Shift+Tab
    PrevPage,
    /// Swipe to the next page; stops at the last page. Default: →/Tab
    NextPage,

    // Entry list
    /// Scroll the entry list up one row. Default: ↑
    ScrollUp,
    /// Scroll the entry list down one row. Default: ↓
    ScrollDown,
    /// Scroll up by one list height. Default: Page Up
    PageUp,
    /// Scroll down by one list height. Default: Page Down
    PageDown,
    /// Jump to the first entry. Default: Home
    ScrollToTop,

    // Search field
    /// Delete the character before the cursor. Default: Backspace
    DeleteBack,
    /// Delete the character under the cursor. Default: Delete
    DeleteForward,
    /// Move the cursor one character left. Default: Ctrl+←
    CursorLeft,
    /// Move the cursor one character right. Default: Ctrl+→
    CursorRight,
    /// Clear the whole query. Default: Ctrl+u
    ClearQuery,

    // Application
    /// Exit the application. Default: Esc/Ctrl+c
    Quit,
}
