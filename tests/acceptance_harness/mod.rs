//! Acceptance test harness.
//!
//! Drives a `TuiApp` over ratatui's `TestBackend` with synthetic key events,
//! so scenarios run against the real key handling and rendering code.

#![allow(dead_code)] // each test binary uses a different subset

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pagesift::model::ContentTable;
use pagesift::state::{AppState, ScreenEvent, Update};
use pagesift::view::{buffer_to_string, Palette, TuiApp};
use ratatui::backend::TestBackend;
use ratatui::Terminal;

pub const DEFAULT_WIDTH: u16 = 80;
pub const DEFAULT_HEIGHT: u16 = 24;

pub struct AcceptanceTestHarness {
    app: TuiApp<TestBackend>,
    running: bool,
}

impl AcceptanceTestHarness {
    /// Fresh screen on the built-in table: first page, empty query.
    pub fn new() -> Self {
        Self::with_size(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }

    pub fn with_size(width: u16, height: u16) -> Self {
        Self::with_state(AppState::new(ContentTable::builtin()), width, height)
    }

    /// Start from a prepared state, e.g. one built with `AppState::with_start`.
    pub fn with_state(state: AppState, width: u16, height: u16) -> Self {
        let terminal =
            Terminal::new(TestBackend::new(width, height)).expect("TestBackend never fails");
        Self {
            app: TuiApp::with_terminal(terminal, state, Palette::default()),
            running: true,
        }
    }

    /// Send a key without modifiers. Returns true if the app quit.
    pub fn send_key(&mut self, code: KeyCode) -> bool {
        self.send_key_with_mods(code, KeyModifiers::NONE)
    }

    pub fn send_key_with_mods(&mut self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        if !self.running {
            return true;
        }
        let quit = self.app.handle_key(KeyEvent::new(code, modifiers));
        if quit {
            self.running = false;
        }
        quit
    }

    /// Type each character of `text` into the search field.
    pub fn type_text(&mut self, text: &str) {
        for ch in text.chars() {
            self.send_key(KeyCode::Char(ch));
        }
    }

    /// Replace the whole query at once, as a paste would.
    pub fn set_query(&mut self, query: &str) -> Update {
        self.app.dispatch(ScreenEvent::SetQuery(query.to_string()))
    }

    pub fn swipe_to(&mut self, index: usize) -> Update {
        self.app.dispatch(ScreenEvent::SwipeTo(index))
    }

    pub fn state(&self) -> &AppState {
        self.app.app_state()
    }

    pub fn current_page(&self) -> usize {
        self.state().current_page().index()
    }

    /// Texts of the currently visible entries.
    pub fn visible_entries(&self) -> Vec<String> {
        self.state()
            .view()
            .entry_texts()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Draw a frame and return the screen as text.
    pub fn render_to_string(&mut self) -> String {
        self.app.draw().expect("TestBackend draw never fails");
        buffer_to_string(self.app.terminal().backend().buffer())
    }
}
