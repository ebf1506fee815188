//! Search input widget for rendering the search bar.

use crate::state::SearchState;
use crate::view::styles::Palette;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

const PLACEHOLDER: &str = "Search";

/// Search input widget.
///
/// Always shown: the field sits pinned between the page indicator and the
/// entry list and has the keyboard at all times.
pub struct SearchInput<'a> {
    search: &'a SearchState,
    palette: &'a Palette,
}

impl<'a> SearchInput<'a> {
    /// Field showing `search`.
    pub fn new(search: &'a SearchState, palette: &'a Palette) -> Self {
        Self { search, palette }
    }
}

/// Drop leading characters of `before` until it plus a one-cell cursor fit
/// in `width` columns.
fn visible_tail(before: &str, width: usize) -> &str {
    let mut start = 0;
    let mut rest = before;
    while rest.width() + 1 > width && !rest.is_empty() {
        let step = rest.chars().next().map(char::len_utf8).unwrap_or(rest.len());
        start += step;
        rest = &before[start..];
    }
    rest
}

impl Widget for SearchInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .style(self.palette.search_field);
        let inner = block.inner(area);
        block.render(area, buf);

        let line = if self.search.is_empty() {
            Line::from(vec![
                Span::styled(" ", self.palette.cursor),
                Span::styled(PLACEHOLDER, self.palette.placeholder),
            ])
        } else {
            let before = visible_tail(self.search.before_cursor(), inner.width as usize);
            let mut after = self.search.after_cursor().chars();
            let cursor_char = after.next().map(String::from).unwrap_or_else(|| " ".into());

            Line::from(vec![
                Span::raw(before.to_string()),
                Span::styled(cursor_char, self.palette.cursor),
                Span::raw(after.as_str().to_string()),
            ])
        };

        Paragraph::new(line).render(inner, buf);
    }
}
