//! Tests for AcceptanceTestHarness
//!
//! These tests verify the harness itself works correctly before using it
//! for the search and navigation acceptance tests.

mod acceptance_harness;

use acceptance_harness::AcceptanceTestHarness;
use crossterm::event::{KeyCode, KeyModifiers};

#[test]
fn test_new_harness_is_running_on_first_page() {
    let harness = AcceptanceTestHarness::new();

    assert!(harness.is_running(), "Harness should be running after creation");
    assert_eq!(harness.current_page(), 0);
    assert_eq!(harness.state().query(), "");
}

#[test]
fn test_send_key_esc_quits() {
    let mut harness = AcceptanceTestHarness::new();

    let quit = harness.send_key(KeyCode::Esc);

    assert!(quit, "send_key(Esc) should return true (quit)");
    assert!(!harness.is_running());
}

#[test]
fn test_send_key_ctrl_c_quits() {
    let mut harness = AcceptanceTestHarness::new();

    assert!(harness.send_key_with_mods(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert!(!harness.is_running());
}

#[test]
fn test_keys_after_quit_are_ignored() {
    let mut harness = AcceptanceTestHarness::new();
    harness.send_key(KeyCode::Esc);

    harness.type_text("abc");

    assert_eq!(harness.state().query(), "");
}

#[test]
fn test_type_text_fills_search_field() {
    let mut harness = AcceptanceTestHarness::new();

    harness.type_text("item 7");

    assert_eq!(harness.state().query(), "item 7");
    assert!(harness.is_running());
}

#[test]
fn test_render_to_string_shows_screen() {
    let mut harness = AcceptanceTestHarness::new();

    let output = harness.render_to_string();

    assert!(output.contains("First image"), "got:\n{output}");
    assert!(output.contains("Search"), "got:\n{output}");
    assert!(output.contains("First image item 1"), "got:\n{output}");
}

#[test]
fn test_with_size_respects_dimensions() {
    let mut harness = AcceptanceTestHarness::with_size(40, 14);

    let output = harness.render_to_string();

    assert!(output.lines().all(|line| line.chars().count() <= 40));
    assert!(output.lines().count() <= 14);
}
