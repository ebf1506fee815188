//! Screen state machine (pure).
//!
//! All state transitions are plain functions and methods testable without a
//! terminal.

pub mod app_state;
pub mod auto_nav;
pub mod filter;
pub mod page;
pub mod scroll;
pub mod search;
pub mod view_model;

// Re-export for convenience
pub use app_state::{AppState, ScreenEvent, Update};
pub use auto_nav::{auto_navigation_target, AutoNavigator, Reaction};
pub use filter::filter_entries;
pub use page::{PageChange, PageChangeCause, PageState};
pub use scroll::{handle_scroll_action, ListScroll};
pub use search::SearchState;
pub use view_model::{derive_view, IndicatorDot, ListRow, ViewModel};
