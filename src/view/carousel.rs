//! Carousel panel and page indicator widgets.

use crate::model::Page;
use crate::state::IndicatorDot;
use crate::view::styles::Palette;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

const ARROW_LEFT: &str = "◀";
const ARROW_RIGHT: &str = "▶";
const DOT_ACTIVE: &str = "●";
const DOT_INACTIVE: &str = "○";

/// The image slide of the active page.
///
/// Terminals can't show the bitmap, so the slide shows the image handle
/// instead, with arrows hinting at neighbouring pages.
pub struct Carousel<'a> {
    page: Option<&'a Page>,
    page_count: usize,
    palette: &'a Palette,
}

impl<'a> Carousel<'a> {
    /// Slide for `page`, or a placeholder when the table is empty.
    pub fn new(page: Option<&'a Page>, page_count: usize, palette: &'a Palette) -> Self {
        Self {
            page,
            page_count,
            palette,
        }
    }
}

impl Widget for Carousel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.palette.carousel_border);

        let Some(page) = self.page else {
            let inner = block.inner(area);
            block.render(area, buf);
            Paragraph::new(Line::from("No pages").centered()).render(inner, buf);
            return;
        };

        let position = page.id().index() + 1;
        block = block
            .title(Span::styled(
                format!(" {} ", page.title()),
                self.palette.carousel_title,
            ))
            .title_top(Line::from(format!(" {}/{} ", position, self.page_count)).right_aligned());

        let inner = block.inner(area);
        block.render(area, buf);
        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let lines = vec![
            Line::from(Span::styled(
                format!("[ {} ]", page.image().stem()),
                self.palette.image_label,
            ))
            .centered(),
            Line::from(page.image().as_str()).centered(),
        ];
        let top = inner.height.saturating_sub(lines.len() as u16) / 2;
        let text_area = Rect {
            y: inner.y + top,
            height: inner.height - top,
            ..inner
        };
        Paragraph::new(lines).render(text_area, buf);

        if inner.width >= 3 {
            let mid = inner.y + (inner.height.saturating_sub(1)) / 2;
            if position > 1 {
                buf.set_string(inner.x, mid, ARROW_LEFT, self.palette.arrow);
            }
            if position < self.page_count {
                buf.set_string(inner.right() - 1, mid, ARROW_RIGHT, self.palette.arrow);
            }
        }
    }
}

/// Row of dots, one per page, the active one highlighted.
pub struct PageIndicator<'a> {
    dots: &'a [IndicatorDot],
    palette: &'a Palette,
}

impl<'a> PageIndicator<'a> {
    /// Indicator row for `dots`.
    pub fn new(dots: &'a [IndicatorDot], palette: &'a Palette) -> Self {
        Self { dots, palette }
    }

    fn line(&self) -> Line<'static> {
        let mut spans = Vec::with_capacity(self.dots.len() * 2);
        for (i, dot) in self.dots.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            spans.push(if dot.active {
                Span::styled(DOT_ACTIVE, self.palette.dot_active)
            } else {
                Span::styled(DOT_INACTIVE, self.palette.dot_inactive)
            });
        }
        Line::from(spans).centered()
    }
}

impl Widget for PageIndicator<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.line()).render(area, buf);
    }
}
