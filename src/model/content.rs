//! Static page → entries registry.
//!
//! The table is built once per process and never mutated. Every lookup is
//! total: unknown page ids read as an empty entry list.

use crate::model::identifiers::{Entry, ImageHandle, InvalidPageIndex, PageId};
use std::sync::LazyLock;

/// One carousel slide: a title, its image, and the entries listed under it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    id: PageId,
    title: String,
    image: ImageHandle,
    entries: Vec<Entry>,
}

impl Page {
    /// Position in the carousel.
    pub fn id(&self) -> PageId {
        self.id
    }

    /// Slide title, e.g. "Second image".
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Image shown on the slide.
    pub fn image(&self) -> &ImageHandle {
        &self.image
    }

    /// Entries in display order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }
}

/// Ordered, immutable set of pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentTable {
    pages: Vec<Page>,
}

fn numbered(prefix: &str, numbers: impl IntoIterator<Item = u32>) -> Vec<String> {
    numbers.into_iter().map(|n| format!("{prefix} {n}")).collect()
}

static BUILTIN: LazyLock<ContentTable> = LazyLock::new(|| {
    ContentTable::from_pages([
        (
            "First image",
            "images/first_image.png",
            numbered("First image item", 1..=30),
        ),
        (
            "Second image",
            "images/second_image.png",
            numbered("Second image item", [1, 2]),
        ),
        (
            "Third image",
            "images/third_image.png",
            numbered("Third image item", [1, 2]),
        ),
        (
            "Fourth image",
            "images/fourth_image.png",
            numbered("Fourth image item", [1, 2]),
        ),
        (
            "Fifth image",
            "images/fifth_image.png",
            numbered("Fifth image item", [1, 3]),
        ),
    ])
});

impl ContentTable {
    /// The hardcoded five-page table the application ships with.
    pub fn builtin() -> &'static ContentTable {
        &BUILTIN
    }

    /// Build a table from `(title, image path, entries)` triples.
    /// Page ids are assigned in iteration order starting at 0.
    pub fn from_pages<T, I, E, S>(pages: I) -> Self
    where
        I: IntoIterator<Item = (T, S, E)>,
        T: Into<String>,
        S: Into<String>,
        E: IntoIterator,
        E::Item: Into<String>,
    {
        let pages = pages
            .into_iter()
            .enumerate()
            .map(|(index, (title, image, entries))| Page {
                id: PageId::from_index(index),
                title: title.into(),
                image: ImageHandle::new(image),
                entries: entries.into_iter().map(Entry::new).collect(),
            })
            .collect();
        Self { pages }
    }

    /// Number of pages.
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Whether the table has no pages.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Pages in ascending id order.
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// Page for `id`, if the table has one.
    pub fn page(&self, id: PageId) -> Option<&Page> {
        self.pages.get(id.index())
    }

    /// Entries for `id`, or an empty slice if the table has no such page.
    pub fn entries_for(&self, id: PageId) -> &[Entry] {
        self.page(id).map(Page::entries).unwrap_or(&[])
    }

    /// Validate a raw index coming from outside the screen.
    pub fn page_id(&self, index: usize) -> Result<PageId, InvalidPageIndex> {
        if index < self.pages.len() {
            Ok(PageId::from_index(index))
        } else {
            Err(InvalidPageIndex {
                index,
                len: self.pages.len(),
            })
        }
    }

    /// Clamp a raw index into `0..len`. An empty table clamps to the first page.
    pub fn clamp(&self, index: usize) -> PageId {
        PageId::from_index(index.min(self.pages.len().saturating_sub(1)))
    }

    /// Last valid page id.
    pub fn last(&self) -> PageId {
        self.clamp(usize::MAX)
    }
}
