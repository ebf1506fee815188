//! Search field state.
//!
//! The field is always editable. `cursor` counts characters, not bytes, so
//! multi-byte input never splits a code point.

/// Current query text and edit cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchState {
    query: String,
    cursor: usize,
}

impl SearchState {
    /// Field pre-filled with `query`, cursor at the end.
    pub fn with_query(query: impl Into<String>) -> Self {
        let query = query.into();
        let cursor = query.chars().count();
        Self { query, cursor }
    }

    /// Current text.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Cursor position in characters, `0..=query.chars().count()`.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Whether nothing has been typed.
    pub fn is_empty(&self) -> bool {
        self.query.is_empty()
    }

    fn byte_offset(&self, char_index: usize) -> usize {
        self.query
            .char_indices()
            .nth(char_index)
            .map(|(offset, _)| offset)
            .unwrap_or(self.query.len())
    }

    /// Text left of the cursor.
    pub fn before_cursor(&self) -> &str {
        &self.query[..self.byte_offset(self.cursor)]
    }

    /// Text from the cursor to the end.
    pub fn after_cursor(&self) -> &str {
        &self.query[self.byte_offset(self.cursor)..]
    }
}

// ===== Input handlers =====
//
// Pure transitions. Each returns the new field; the caller commits the
// query to the screen as a `ScreenEvent::SetQuery`.

/// Insert `ch` at the cursor and advance it.
pub fn handle_char_input(mut state: SearchState, ch: char) -> SearchState {
    let at = state.byte_offset(state.cursor);
    state.query.insert(at, ch);
    state.cursor += 1;
    state
}

/// Delete the character before the cursor. No-op at position 0.
pub fn handle_backspace(mut state: SearchState) -> SearchState {
    if state.cursor == 0 {
        return state;
    }
    let at = state.byte_offset(state.cursor - 1);
    state.query.remove(at);
    state.cursor -= 1;
    state
}

/// Delete the character under the cursor. No-op at the end.
pub fn handle_delete(mut state: SearchState) -> SearchState {
    if state.cursor >= state.query.chars().count() {
        return state;
    }
    let at = state.byte_offset(state.cursor);
    state.query.remove(at);
    state
}

/// Move cursor left by one character. Saturates at 0.
pub fn handle_cursor_left(mut state: SearchState) -> SearchState {
    state.cursor = state.cursor.saturating_sub(1);
    state
}

/// Move cursor right by one character. Saturates at the end.
pub fn handle_cursor_right(mut state: SearchState) -> SearchState {
    let max = state.query.chars().count();
    state.cursor = (state.cursor + 1).min(max);
    state
}

/// Empty the field.
pub fn clear_query(_state: SearchState) -> SearchState {
    SearchState::default()
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
