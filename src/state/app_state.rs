//! Screen state and transitions.
//!
//! `AppState` owns the two mutable inputs of the screen, the active page and
//! the search field, and applies [`ScreenEvent`]s to them. The filtered list
//! is never stored; [`AppState::view`] derives it on demand.

use crate::model::{ContentTable, PageId};
use crate::state::auto_nav::{AutoNavigator, Reaction};
use crate::state::filter::is_blank;
use crate::state::page::{PageChange, PageState};
use crate::state::scroll::ListScroll;
use crate::state::search::SearchState;
use crate::state::view_model::{derive_view, ViewModel};
use tracing::debug;

/// Discrete inputs to the screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenEvent {
    /// The search field now holds this text.
    SetQuery(String),
    /// The carousel settled on this raw page index (clamped on entry).
    SwipeTo(usize),
}

/// What an update changed. Used to decide on re-render and logging.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Update {
    /// The search text differs from before the update.
    pub query_changed: bool,
    /// Set when the active page moved.
    pub page_change: Option<PageChange>,
    /// Reactor outcome, present for `SetQuery` events only.
    pub reaction: Option<Reaction>,
}

impl Update {
    /// Whether anything the renderer shows has changed.
    pub fn is_visible(&self) -> bool {
        self.query_changed || self.page_change.is_some()
    }
}

/// Application state. Pure data, no side effects.
///
/// # State Machine
///
/// The screen has no named modes; its state is the pair
/// (active page, query). Transitions:
///
/// - `SetQuery(q)`: commit the query, then run auto-navigation once for a
///   new value of `q`.
/// - `SwipeTo(i)`: set the page directly. The query is untouched and
///   auto-navigation does not run.
#[derive(Debug, Clone)]
pub struct AppState {
    table: &'static ContentTable,

    /// Active carousel page.
    page: PageState,

    /// Search field contents and cursor.
    search: SearchState,

    /// Guarded search → page reactor.
    navigator: AutoNavigator,

    /// Entry list scroll position. Reset whenever the list content changes.
    pub list_scroll: ListScroll,
}

impl AppState {
    /// Fresh screen: first page, empty query.
    pub fn new(table: &'static ContentTable) -> Self {
        Self::with_start(table, PageId::FIRST, "")
    }

    /// Screen starting on `start` with `query` already typed.
    ///
    /// A non-blank query runs auto-navigation immediately and may move off
    /// `start`. A blank query only primes the reactor, so `start` is kept.
    pub fn with_start(table: &'static ContentTable, start: PageId, query: &str) -> Self {
        let start = table.clamp(start.index());
        let mut state = Self {
            table,
            page: PageState::new(start),
            search: SearchState::with_query(query),
            navigator: AutoNavigator::new(),
            list_scroll: ListScroll::default(),
        };

        if is_blank(query) {
            state.navigator = AutoNavigator::primed(query);
        } else {
            let reaction = state.navigator.react(query, table, &mut state.page);
            debug!(query, ?reaction, "initial query applied");
        }
        state
    }

    /// Content the screen browses.
    pub fn table(&self) -> &'static ContentTable {
        self.table
    }

    /// Active carousel page.
    pub fn current_page(&self) -> PageId {
        self.page.current()
    }

    /// Page state with its change revision.
    pub fn page_state(&self) -> &PageState {
        &self.page
    }

    /// Committed search text.
    pub fn query(&self) -> &str {
        self.search.query()
    }

    /// Search field contents and cursor.
    pub fn search(&self) -> &SearchState {
        &self.search
    }

    /// Apply one event.
    pub fn update(&mut self, event: ScreenEvent) -> Update {
        let update = match event {
            ScreenEvent::SetQuery(query) => {
                let query_changed = query != self.search.query();
                if query_changed {
                    self.search = SearchState::with_query(query);
                }
                self.commit_query(query_changed)
            }
            ScreenEvent::SwipeTo(index) => Update {
                query_changed: false,
                page_change: self.page.swipe_to(self.table, index),
                reaction: None,
            },
        };

        if update.is_visible() {
            self.list_scroll.reset();
        }
        update
    }

    /// Edit the search field in place and commit the result.
    ///
    /// Keeps the cursor the editor produced, unlike `SetQuery` which places it
    /// at the end.
    pub fn edit_search(&mut self, edit: impl FnOnce(SearchState) -> SearchState) -> Update {
        let edited = edit(self.search.clone());
        let query_changed = edited.query() != self.search.query();
        self.search = edited;

        let update = self.commit_query(query_changed);
        if update.is_visible() {
            self.list_scroll.reset();
        }
        update
    }

    fn commit_query(&mut self, query_changed: bool) -> Update {
        let reaction = self
            .navigator
            .react(self.search.query(), self.table, &mut self.page);
        let page_change = match &reaction {
            Reaction::Navigated(change) => Some(*change),
            _ => None,
        };
        Update {
            query_changed,
            page_change,
            reaction: Some(reaction),
        }
    }

    /// Derived view for the current (page, query) pair.
    pub fn view(&self) -> ViewModel<'_> {
        derive_view(self.table, self.page.current(), self.search.query())
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
