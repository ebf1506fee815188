//! Search-driven auto-navigation.
//!
//! When the committed query takes a new value, the carousel jumps to the
//! first page (lowest id) whose entries survive the filter. Ties are not
//! resolved by distance from the active page.

use crate::model::{ContentTable, PageId};
use crate::state::filter::has_match;
use crate::state::page::{PageChange, PageState};
use tracing::debug;

/// First page, in ascending id order, with at least one entry matching `query`.
///
/// `None` means no page matches; callers must leave the active page alone.
pub fn auto_navigation_target(table: &ContentTable, query: &str) -> Option<PageId> {
    table
        .pages()
        .iter()
        .find(|page| has_match(page.entries(), query))
        .map(|page| page.id())
}

/// Outcome of one reactor call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reaction {
    /// Query equals the last one reacted to; nothing was evaluated.
    Suppressed,
    /// No page matches the query.
    NoTarget,
    /// The first matching page is already active.
    AlreadyThere(PageId),
    /// The carousel moved.
    Navigated(PageChange),
}

/// Runs auto-navigation once per distinct query value.
///
/// The guard is the last query that triggered an evaluation. Page changes
/// never feed back into it, so navigation cannot re-trigger the reactor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AutoNavigator {
    last_query: Option<String>,
}

impl AutoNavigator {
    /// Reactor that has not seen any query yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reactor whose guard already holds `query`, so the first commit of that
    /// same value is suppressed.
    pub fn primed(query: impl Into<String>) -> Self {
        Self {
            last_query: Some(query.into()),
        }
    }

    /// Last query that triggered an evaluation, if any.
    pub fn last_query(&self) -> Option<&str> {
        self.last_query.as_deref()
    }

    /// React to a committed query.
    pub fn react(&mut self, query: &str, table: &ContentTable, page: &mut PageState) -> Reaction {
        if self.last_query.as_deref() == Some(query) {
            return Reaction::Suppressed;
        }
        self.last_query = Some(query.to_owned());

        let Some(target) = auto_navigation_target(table, query) else {
            debug!(query, "auto-navigation: no page matches");
            return Reaction::NoTarget;
        };

        match page.navigate_to(target) {
            Some(change) => {
                debug!(query, to = %target, "auto-navigation: moved carousel");
                Reaction::Navigated(change)
            }
            None => Reaction::AlreadyThere(target),
        }
    }
}

#[cfg(test)]
#[path = "auto_nav_tests.rs"]
mod tests;
