//! Derived view model.
//!
//! Recomputed from scratch after every update. The table is tiny, so there
//! is no cache to invalidate.

use crate::model::{ContentTable, Entry, ImageHandle, Page, PageId};
use crate::state::filter::filter_entries;

/// One dot in the page indicator row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndicatorDot {
    /// Page the dot stands for.
    pub page: PageId,
    /// Whether it is the active page.
    pub active: bool,
}

/// A visible list row: entry text plus the active page's image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListRow<'a> {
    /// Matching entry.
    pub entry: &'a Entry,
    /// Image of the page the entry belongs to.
    pub image: &'a ImageHandle,
}

/// Everything the renderer needs for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewModel<'a> {
    /// Active page, `None` only for an empty table.
    pub page: Option<&'a Page>,
    /// One dot per page, in page order.
    pub indicator: Vec<IndicatorDot>,
    /// Query the rows were filtered with.
    pub query: &'a str,
    /// Filtered entries of the active page.
    pub rows: Vec<ListRow<'a>>,
}

impl ViewModel<'_> {
    /// Entry texts in display order.
    pub fn entry_texts(&self) -> Vec<&str> {
        self.rows.iter().map(|row| row.entry.as_str()).collect()
    }

    /// Whether no entry survived the filter.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Build the view for `active` under `query`.
pub fn derive_view<'a>(table: &'a ContentTable, active: PageId, query: &'a str) -> ViewModel<'a> {
    let page = table.page(active);
    let rows = match page {
        Some(page) => filter_entries(table.entries_for(active), query)
            .into_iter()
            .map(|entry| ListRow {
                entry,
                image: page.image(),
            })
            .collect(),
        None => Vec::new(),
    };
    let indicator = table
        .pages()
        .iter()
        .map(|p| IndicatorDot {
            page: p.id(),
            active: p.id() == active,
        })
        .collect();

    ViewModel {
        page,
        indicator,
        query,
        rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> &'static ContentTable {
        ContentTable::builtin()
    }

    fn id(index: usize) -> PageId {
        table().page_id(index).unwrap()
    }

    #[test]
    fn blank_query_shows_whole_page() {
        let view = derive_view(table(), id(1), "");
        assert_eq!(
            view.entry_texts(),
            vec!["Second image item 1", "Second image item 2"]
        );
    }

    #[test]
    fn rows_carry_active_page_image() {
        let view = derive_view(table(), id(2), "");
        assert!(view
            .rows
            .iter()
            .all(|row| row.image.as_str() == "images/third_image.png"));
    }

    #[test]
    fn query_filters_active_page_only() {
        let view = derive_view(table(), id(3), "item 2");
        assert_eq!(view.entry_texts(), vec!["Fourth image item 2"]);
    }

    #[test]
    fn unmatched_query_gives_empty_view() {
        let view = derive_view(table(), id(0), "nonexistent-xyz");
        assert!(view.is_empty());
        assert_eq!(view.page.map(Page::title), Some("First image"));
    }

    #[test]
    fn indicator_marks_exactly_one_active_dot() {
        let view = derive_view(table(), id(4), "");
        assert_eq!(view.indicator.len(), 5);
        let active: Vec<usize> = view
            .indicator
            .iter()
            .filter(|dot| dot.active)
            .map(|dot| dot.page.index())
            .collect();
        assert_eq!(active, vec![4]);
    }

    #[test]
    fn first_page_filter_keeps_order() {
        let view = derive_view(table(), id(0), "item 2");
        assert_eq!(
            view.entry_texts(),
            vec![
                "First image item 2",
                "First image item 20",
                "First image item 21",
                "First image item 22",
                "First image item 23",
                "First image item 24",
                "First image item 25",
                "First image item 26",
                "First image item 27",
                "First image item 28",
                "First image item 29",
            ]
        );
    }
}
