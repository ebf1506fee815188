//! Core identifier newtypes.
//!
//! `PageId` has no public raw constructor. Ids are handed out by the
//! [`ContentTable`](crate::model::ContentTable), which is the only place
//! that knows how many pages exist.

use std::fmt;
use thiserror::Error;

/// Index of a carousel page.
///
/// Ordering follows page order, which is also the auto-navigation scan order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageId(usize);

impl PageId {
    /// First page. Every non-empty table has it.
    pub const FIRST: PageId = PageId(0);

    pub(crate) fn from_index(index: usize) -> Self {
        Self(index)
    }

    /// Zero-based position of the page in the carousel.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Page index outside of `0..len` was offered at a boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("page index {index} is out of range (table has {len} pages)")]
pub struct InvalidPageIndex {
    /// Index that was rejected.
    pub index: usize,
    /// Number of pages in the table.
    pub len: usize,
}

/// Opaque handle to a page image (a resource path).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageHandle(String);

impl ImageHandle {
    /// Wrap a resource path.
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// The path as given.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// File name without directories or extension, e.g. `second_image`.
    pub fn stem(&self) -> &str {
        let name = self.0.rsplit('/').next().unwrap_or(&self.0);
        match name.rsplit_once('.') {
            Some((stem, _)) if !stem.is_empty() => stem,
            _ => name,
        }
    }
}

impl fmt::Display for ImageHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single searchable text line belonging to one page.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Entry(String);

impl Entry {
    /// Wrap entry text.
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Entry text as displayed and searched.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
