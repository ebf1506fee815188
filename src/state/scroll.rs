//! Entry list scrolling (pure).

use crate::model::KeyAction;

/// Vertical offset of the entry list, in rows.
///
/// The offset is clamped against the row count and viewport height on every
/// move, so a shrinking list never leaves it pointing past the end.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListScroll {
    offset: usize,
}

impl ListScroll {
    /// First visible row.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Back to the first row.
    pub fn reset(&mut self) {
        self.offset = 0;
    }

    fn max_offset(rows: usize, viewport: usize) -> usize {
        rows.saturating_sub(viewport.max(1))
    }

    /// Offset to use for rendering `rows` rows in a viewport of `viewport` rows.
    pub fn clamped(&self, rows: usize, viewport: usize) -> usize {
        self.offset.min(Self::max_offset(rows, viewport))
    }

    /// Move up by `amount` rows, stopping at the top.
    pub fn scroll_up(&mut self, amount: usize) {
        self.offset = self.offset.saturating_sub(amount);
    }

    /// Move down by `amount` rows, stopping at the last full page.
    pub fn scroll_down(&mut self, amount: usize, rows: usize, viewport: usize) {
        self.offset = self
            .offset
            .saturating_add(amount)
            .min(Self::max_offset(rows, viewport));
    }
}

/// Apply a scroll action. Non-scroll actions leave the offset untouched.
///
/// # Arguments
/// * `scroll` - Current list scroll
/// * `action` - The key action to apply
/// * `rows` - Number of visible (filtered) rows
/// * `viewport` - Height of the list area in rows
pub fn handle_scroll_action(
    mut scroll: ListScroll,
    action: KeyAction,
    rows: usize,
    viewport: usize,
) -> ListScroll {
    match action {
        KeyAction::ScrollUp => scroll.scroll_up(1),
        KeyAction::ScrollDown => scroll.scroll_down(1, rows, viewport),
        KeyAction::PageUp => scroll.scroll_up(viewport.max(1)),
        KeyAction::PageDown => scroll.scroll_down(viewport.max(1), rows, viewport),
        KeyAction::ScrollToTop => scroll.reset(),
        _ => {}
    }
    scroll
}
