//! Filtered entry list widget.

use crate::state::ListRow;
use crate::view::styles::Palette;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// Rows of the filtered view, each prefixed with the page image badge.
pub struct EntryList<'a> {
    rows: &'a [ListRow<'a>],
    offset: usize,
    query: &'a str,
    palette: &'a Palette,
}

impl<'a> EntryList<'a> {
    /// `offset` must already be clamped to the row count.
    pub fn new(rows: &'a [ListRow<'a>], offset: usize, query: &'a str, palette: &'a Palette) -> Self {
        Self {
            rows,
            offset,
            query,
            palette,
        }
    }
}

impl Widget for EntryList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        if self.rows.is_empty() {
            let notice = format!("No entries match \"{}\"", self.query);
            Paragraph::new(Line::from(Span::styled(notice, self.palette.empty_notice)).centered())
                .render(area, buf);
            return;
        }

        let lines: Vec<Line> = self
            .rows
            .iter()
            .skip(self.offset)
            .take(area.height as usize)
            .map(|row| {
                Line::from(vec![
                    Span::styled(format!("[{}]", row.image.stem()), self.palette.badge),
                    Span::raw("  "),
                    Span::styled(row.entry.as_str(), self.palette.entry),
                ])
            })
            .collect();

        Paragraph::new(lines).render(area, buf);
    }
}
