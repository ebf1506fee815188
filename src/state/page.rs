//! Active carousel page.

use crate::model::{ContentTable, PageId};
use tracing::debug;

/// How a page change came about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageChangeCause {
    /// The user swiped or stepped the carousel.
    Swipe,
    /// Programmatic navigation, e.g. search-driven auto-navigation.
    Navigate,
}

/// Change signal emitted when the active page actually moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageChange {
    /// Page active before the change.
    pub from: PageId,
    /// Page active after the change.
    pub to: PageId,
    /// What moved the carousel.
    pub cause: PageChangeCause,
}

/// Holds the active page index.
///
/// The index is only ever set from a `PageId` issued by the table or from a
/// clamped raw index, so it is always in range. `revision` increases by one
/// per actual change; observers compare it to detect updates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageState {
    current: PageId,
    revision: u64,
}

impl Default for PageState {
    fn default() -> Self {
        Self::new(PageId::FIRST)
    }
}

impl PageState {
    /// Start on `start` at revision 0.
    pub fn new(start: PageId) -> Self {
        Self {
            current: start,
            revision: 0,
        }
    }

    /// Active page.
    pub fn current(&self) -> PageId {
        self.current
    }

    /// Number of actual page changes so far.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn set(&mut self, to: PageId, cause: PageChangeCause) -> Option<PageChange> {
        if to == self.current {
            return None;
        }
        let change = PageChange {
            from: self.current,
            to,
            cause,
        };
        self.current = to;
        self.revision += 1;
        debug!(from = %change.from, to = %change.to, ?cause, "active page changed");
        Some(change)
    }

    /// Navigate to `target`. Returns `None` without touching the revision
    /// when `target` is already active.
    pub fn navigate_to(&mut self, target: PageId) -> Option<PageChange> {
        self.set(target, PageChangeCause::Navigate)
    }

    /// Swipe to a raw index. Out-of-range indexes are clamped to the last page.
    pub fn swipe_to(&mut self, table: &ContentTable, index: usize) -> Option<PageChange> {
        let target = table.clamp(index);
        self.set(target, PageChangeCause::Swipe)
    }
}
