//! Screen layout.
//!
//! Top to bottom: carousel, page indicator, search field, entry list,
//! status line. Only the list grows with the terminal.

use crate::state::AppState;
use crate::view::carousel::{Carousel, PageIndicator};
use crate::view::entry_list::EntryList;
use crate::view::search_input::SearchInput;
use crate::view::styles::Palette;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Carousel height including borders.
pub const CAROUSEL_HEIGHT: u16 = 7;

const HINTS: &str = "←/→ page  ↑/↓ scroll  ^U clear  Esc quit";

/// Rectangles of each screen region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenAreas {
    /// Image slide.
    pub carousel: Rect,
    /// Page dots.
    pub indicator: Rect,
    /// Search field.
    pub search: Rect,
    /// Entry list, the only region that grows.
    pub list: Rect,
    /// Key hints and row count.
    pub status: Rect,
}

/// Split `area` into the screen regions.
pub fn screen_areas(area: Rect) -> ScreenAreas {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(CAROUSEL_HEIGHT),
            Constraint::Length(1), // Page indicator
            Constraint::Length(3), // Search field
            Constraint::Min(0),    // Entry list
            Constraint::Length(1), // Status line
        ])
        .split(area);

    ScreenAreas {
        carousel: chunks[0],
        indicator: chunks[1],
        search: chunks[2],
        list: chunks[3],
        status: chunks[4],
    }
}

/// Render the whole screen for `state`. Returns the areas used.
pub fn render_screen(frame: &mut Frame, state: &AppState, palette: &Palette) -> ScreenAreas {
    let areas = screen_areas(frame.area());
    let view = state.view();
    let table = state.table();

    frame.render_widget(Carousel::new(view.page, table.len(), palette), areas.carousel);
    frame.render_widget(PageIndicator::new(&view.indicator, palette), areas.indicator);
    frame.render_widget(SearchInput::new(state.search(), palette), areas.search);

    let offset = state
        .list_scroll
        .clamped(view.rows.len(), areas.list.height as usize);
    frame.render_widget(
        EntryList::new(&view.rows, offset, view.query, palette),
        areas.list,
    );

    let total = view.page.map(|p| p.entries().len()).unwrap_or(0);
    let status = Line::from(vec![
        Span::styled(HINTS, palette.status),
        Span::raw("  "),
        Span::styled(
            format!("{}/{} entries", view.rows.len(), total),
            palette.status,
        ),
    ]);
    frame.render_widget(Paragraph::new(status), areas.status);

    areas
}
