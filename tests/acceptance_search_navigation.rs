//! Acceptance tests: search-driven page navigation.
//!
//! Each scenario drives the screen through key events or whole-query
//! commits and checks the active page and the visible list.

mod acceptance_harness;

use acceptance_harness::{AcceptanceTestHarness, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crossterm::event::{KeyCode, KeyModifiers};
use pagesift::model::ContentTable;
use pagesift::state::{AppState, Reaction};

// ===== Scenario 1: Query matching a later page jumps there =====

#[test]
fn typing_second_page_entry_jumps_to_second_page() {
    let mut harness = AcceptanceTestHarness::new();

    harness.type_text("second image item 1");

    assert_eq!(harness.current_page(), 1);
    assert_eq!(harness.visible_entries(), vec!["Second image item 1"]);
}

#[test]
fn matching_is_case_insensitive() {
    let mut harness = AcceptanceTestHarness::new();

    harness.type_text("FIFTH IMAGE ITEM 3");

    assert_eq!(harness.current_page(), 4);
    assert_eq!(harness.visible_entries(), vec!["Fifth image item 3"]);
}

// ===== Scenario 2: Several pages match, lowest id wins =====

#[test]
fn query_matching_every_page_selects_first_page_from_elsewhere() {
    let mut harness = AcceptanceTestHarness::new();
    for _ in 0..3 {
        harness.send_key(KeyCode::Right);
    }
    assert_eq!(harness.current_page(), 3);

    harness.set_query("item 1");

    assert_eq!(harness.current_page(), 0);
    let visible = harness.visible_entries();
    assert_eq!(visible[0], "First image item 1");
    // item 1 and item 10..=19
    assert_eq!(visible.len(), 11);
}

#[test]
fn query_matching_later_pages_skips_pages_without_match() {
    let mut harness = AcceptanceTestHarness::new();

    harness.set_query("item 3");

    // First page has "item 3" and "item 30"
    assert_eq!(harness.current_page(), 0);

    harness.set_query("e item 3");
    // "First image item 3", still the first page
    assert_eq!(harness.current_page(), 0);

    harness.set_query("fth image item 3");
    assert_eq!(harness.current_page(), 4);
}

// ===== Scenario 3: No page matches =====

#[test]
fn query_without_match_keeps_page_and_empties_list() {
    let mut harness = AcceptanceTestHarness::new();
    harness.swipe_to(2);

    let update = harness.set_query("nonexistent-xyz");

    assert_eq!(update.reaction, Some(Reaction::NoTarget));
    assert_eq!(harness.current_page(), 2);
    assert!(harness.visible_entries().is_empty());

    let output = harness.render_to_string();
    assert!(
        output.contains("No entries match \"nonexistent-xyz\""),
        "got:\n{output}"
    );
}

// ===== Scenario 4: Swiping keeps the query =====

#[test]
fn swiping_keeps_query_and_refilters_for_new_page() {
    let mut harness = AcceptanceTestHarness::new();
    harness.type_text("item 2");
    assert_eq!(harness.current_page(), 0);

    for _ in 0..3 {
        harness.send_key(KeyCode::Right);
    }

    assert_eq!(harness.current_page(), 3);
    assert_eq!(harness.state().query(), "item 2");
    assert_eq!(harness.visible_entries(), vec!["Fourth image item 2"]);
}

#[test]
fn swiping_does_not_rerun_navigation() {
    let mut harness = AcceptanceTestHarness::new();
    harness.set_query("item 1");
    harness.swipe_to(4);

    // Same query again: the reactor already saw it
    let update = harness.set_query("item 1");

    assert_eq!(update.reaction, Some(Reaction::Suppressed));
    assert_eq!(harness.current_page(), 4);
}

#[test]
fn swiping_to_page_without_match_shows_empty_list() {
    let mut harness = AcceptanceTestHarness::new();
    harness.set_query("item 3");

    harness.swipe_to(1);

    assert_eq!(harness.current_page(), 1);
    assert!(harness.visible_entries().is_empty());
}

// ===== Scenario 5: Navigating to the current page is silent =====

#[test]
fn query_matching_current_page_reports_already_there() {
    let mut harness = AcceptanceTestHarness::new();
    harness.swipe_to(1);

    let update = harness.set_query("second");

    assert!(matches!(update.reaction, Some(Reaction::AlreadyThere(_))));
    assert!(update.page_change.is_none());
    assert_eq!(harness.current_page(), 1);
}

#[test]
fn cursor_moves_do_not_rerun_navigation() {
    let mut harness = AcceptanceTestHarness::new();
    harness.type_text("third");
    assert_eq!(harness.current_page(), 2);
    harness.swipe_to(0);

    harness.send_key_with_mods(KeyCode::Left, KeyModifiers::CONTROL);
    harness.send_key_with_mods(KeyCode::Right, KeyModifiers::CONTROL);

    assert_eq!(harness.current_page(), 0);
}

// ===== Editing =====

#[test]
fn backspace_widens_the_match() {
    let mut harness = AcceptanceTestHarness::new();
    harness.type_text("item 30");
    assert_eq!(harness.visible_entries(), vec!["First image item 30"]);

    harness.send_key(KeyCode::Backspace);

    assert_eq!(harness.state().query(), "item 3");
    assert_eq!(
        harness.visible_entries(),
        vec!["First image item 3", "First image item 30"]
    );
}

#[test]
fn clearing_query_jumps_back_to_first_page() {
    let mut harness = AcceptanceTestHarness::new();
    harness.type_text("fourth");
    assert_eq!(harness.current_page(), 3);

    harness.send_key_with_mods(KeyCode::Char('u'), KeyModifiers::CONTROL);

    // A blank query matches everything, so the first page is the target
    assert_eq!(harness.state().query(), "");
    assert_eq!(harness.current_page(), 0);
    assert_eq!(harness.visible_entries().len(), 30);
}

// ===== Start-up options =====

#[test]
fn initial_query_navigates_before_first_frame() {
    let table = ContentTable::builtin();
    let state = AppState::with_start(table, table.page_id(0).unwrap(), "third image item 2");
    let mut harness = AcceptanceTestHarness::with_state(state, DEFAULT_WIDTH, DEFAULT_HEIGHT);

    assert_eq!(harness.current_page(), 2);
    let output = harness.render_to_string();
    assert!(output.contains("Third image item 2"), "got:\n{output}");
}

#[test]
fn start_page_is_kept_without_initial_query() {
    let table = ContentTable::builtin();
    let state = AppState::with_start(table, table.page_id(3).unwrap(), "");
    let harness = AcceptanceTestHarness::with_state(state, DEFAULT_WIDTH, DEFAULT_HEIGHT);

    assert_eq!(harness.current_page(), 3);
    assert_eq!(harness.visible_entries().len(), 2);
}

// ===== Scrolling =====

#[test]
fn list_scroll_resets_when_query_changes() {
    let mut harness = AcceptanceTestHarness::new();
    harness.render_to_string();
    harness.send_key(KeyCode::PageDown);
    assert!(harness.state().list_scroll.offset() > 0);

    harness.type_text("1");

    assert_eq!(harness.state().list_scroll.offset(), 0);
}

#[test]
fn home_returns_list_to_top() {
    let mut harness = AcceptanceTestHarness::new();
    harness.render_to_string();
    harness.send_key(KeyCode::Down);
    harness.send_key(KeyCode::Down);
    assert_eq!(harness.state().list_scroll.offset(), 2);

    harness.send_key(KeyCode::Home);

    assert_eq!(harness.state().list_scroll.offset(), 0);
}
