//! Domain model types (pure).
//!
//! All types in this module are immutable data. Page ids are only handed
//! out by the content table.

pub mod content;
pub mod error;
pub mod identifiers;
pub mod key_action;

// Re-export for convenience
pub use content::{ContentTable, Page};
pub use error::AppError;
pub use identifiers::{Entry, ImageHandle, InvalidPageIndex, PageId};
pub use key_action::KeyAction;
