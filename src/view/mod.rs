//! TUI rendering and terminal management (impure shell)

mod carousel;
mod entry_list;
pub mod layout;
mod search_input;
pub mod styles;

pub use carousel::{Carousel, PageIndicator};
pub use entry_list::EntryList;
pub use layout::{render_screen, screen_areas, ScreenAreas};
pub use search_input::SearchInput;
pub use styles::{ColorConfig, Palette};

use crate::config::KeyBindings;
use crate::model::KeyAction;
use crate::state::search::{
    clear_query, handle_backspace, handle_char_input, handle_cursor_left, handle_cursor_right,
    handle_delete,
};
use crate::state::{handle_scroll_action, AppState, ScreenEvent, SearchState, Update};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    app_state: AppState,
    key_bindings: KeyBindings,
    palette: Palette,
    /// List height from the last draw, used for page-wise scrolling.
    list_height: u16,
    /// Raw mode and alternate screen, held only on a real terminal.
    terminal_guard: Option<TerminalGuard>,
}

/// Raw mode plus alternate screen for as long as the guard lives.
///
/// Dropping the guard (early return, panic unwind) restores the terminal on a
/// best-effort basis; [`TerminalGuard::restore`] does the same but reports
/// failures.
struct TerminalGuard {
    active: bool,
}

impl TerminalGuard {
    fn enter() -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let guard = Self { active: true };
        io::stdout().execute(EnterAlternateScreen)?;
        Ok(guard)
    }

    fn restore(mut self) -> Result<(), TuiError> {
        self.active = false;
        restore_terminal()
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if self.active {
            let _ = restore_terminal();
        }
    }
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create a new TUI application on the real terminal.
    ///
    /// Sets up terminal in raw mode with alternate screen.
    /// The terminal is put back if any later setup step fails.
    pub fn new(app_state: AppState, palette: Palette) -> Result<Self, TuiError> {
        let guard = TerminalGuard::enter()?;
        let terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
        let mut app = Self::with_terminal(terminal, app_state, palette);
        app.terminal_guard = Some(guard);
        Ok(app)
    }

    /// Run the main event loop
    ///
    /// Returns when user quits (Esc or Ctrl+C). Blocks on terminal events;
    /// nothing changes on screen without input, so there is no tick.
    pub fn run(&mut self) -> Result<(), TuiError> {
        self.draw()?;

        loop {
            match event::read()? {
                Event::Key(key) => {
                    if self.handle_key(key) {
                        return Ok(());
                    }
                    self.draw()?;
                }
                Event::Resize(width, height) => {
                    debug!(width, height, "terminal resized");
                    self.draw()?;
                }
                _ => {}
            }
        }
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Build an app around an existing terminal (e.g. `TestBackend`).
    pub fn with_terminal(terminal: Terminal<B>, app_state: AppState, palette: Palette) -> Self {
        Self {
            terminal,
            app_state,
            key_bindings: KeyBindings::default(),
            palette,
            list_height: 0,
            terminal_guard: None,
        }
    }

    /// Current screen state.
    pub fn app_state(&self) -> &AppState {
        &self.app_state
    }

    /// Underlying terminal, e.g. to inspect a `TestBackend` buffer.
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// Leave raw mode and the alternate screen. No-op for terminals passed
    /// to [`TuiApp::with_terminal`] and on repeated calls.
    pub fn restore(&mut self) -> Result<(), TuiError> {
        match self.terminal_guard.take() {
            Some(guard) => guard.restore(),
            None => Ok(()),
        }
    }

    /// Apply a screen event from outside the keyboard path (e.g. a page
    /// select from a pointer device).
    pub fn dispatch(&mut self, event: ScreenEvent) -> Update {
        let update = self.app_state.update(event);
        log_update(&update);
        update
    }

    fn edit_search(&mut self, edit: impl FnOnce(SearchState) -> SearchState) {
        let update = self.app_state.edit_search(edit);
        log_update(&update);
    }

    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.kind == KeyEventKind::Release {
            return false;
        }

        if let Some(action) = self.key_bindings.get(key) {
            return self.handle_action(action);
        }

        // Unbound printable input goes to the search field
        if let KeyCode::Char(ch) = key.code {
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
            {
                self.edit_search(|s| handle_char_input(s, ch));
            }
        }
        false
    }

    fn handle_action(&mut self, action: KeyAction) -> bool {
        let current = self.app_state.current_page().index();
        match action {
            KeyAction::Quit => return true,

            KeyAction::PrevPage => {
                self.dispatch(ScreenEvent::SwipeTo(current.saturating_sub(1)));
            }
            KeyAction::NextPage => {
                self.dispatch(ScreenEvent::SwipeTo(current.saturating_add(1)));
            }

            KeyAction::ScrollUp
            | KeyAction::ScrollDown
            | KeyAction::PageUp
            | KeyAction::PageDown
            | KeyAction::ScrollToTop => {
                let rows = self.app_state.view().rows.len();
                self.app_state.list_scroll = handle_scroll_action(
                    self.app_state.list_scroll,
                    action,
                    rows,
                    self.list_height as usize,
                );
            }

            KeyAction::DeleteBack => self.edit_search(handle_backspace),
            KeyAction::DeleteForward => self.edit_search(handle_delete),
            KeyAction::CursorLeft => self.edit_search(handle_cursor_left),
            KeyAction::CursorRight => self.edit_search(handle_cursor_right),
            KeyAction::ClearQuery => self.edit_search(clear_query),
        }
        false
    }

    /// Render the current frame
    pub fn draw(&mut self) -> Result<(), TuiError> {
        let state = &self.app_state;
        let palette = &self.palette;
        let mut list_height = self.list_height;
        self.terminal.draw(|frame| {
            let areas = render_screen(frame, state, palette);
            list_height = areas.list.height;
        })?;
        self.list_height = list_height;
        Ok(())
    }
}

fn log_update(update: &Update) {
    if let Some(change) = update.page_change {
        debug!(
            from = %change.from,
            to = %change.to,
            cause = ?change.cause,
            "carousel moved"
        );
    }
    if let Some(reaction) = &update.reaction {
        debug!(?reaction, "search committed");
    }
}

/// Initialize and run the TUI on the real terminal.
///
/// The terminal is restored on every exit path, including setup failures and
/// panics in the loop. An error from the loop wins over a restore error.
pub fn run(app_state: AppState, palette: Palette) -> Result<(), TuiError> {
    info!(
        page = %app_state.current_page(),
        query = app_state.query(),
        "starting screen"
    );
    let mut app = TuiApp::new(app_state, palette)?;
    let result = app.run();
    let restored = app.restore();
    settle(result, restored)
}

fn settle(result: Result<(), TuiError>, restored: Result<(), TuiError>) -> Result<(), TuiError> {
    if let Err(err) = &restored {
        debug!(%err, "terminal restore failed");
    }
    result.and(restored)
}

/// Attempts both steps even if the first fails.
fn restore_terminal() -> Result<(), TuiError> {
    let raw = disable_raw_mode();
    let screen = io::stdout().execute(LeaveAlternateScreen).map(|_| ());
    raw?;
    screen?;
    Ok(())
}

/// Convert a ratatui buffer to a string representation for snapshot testing.
///
/// Captures the visual output character by character, preserving layout.
/// Empty lines and trailing spaces are removed to keep snapshots clean.
pub fn buffer_to_string(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area();
    let mut lines = Vec::new();

    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            line.push_str(buffer[(x, y)].symbol());
        }
        let trimmed = line.trim_end();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }

    lines.join("\n")
}
