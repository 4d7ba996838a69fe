use crate::reading::token::split_words;
use crate::reading::window::{compute_window, Window};
use serde::Serialize;
use std::ops::RangeInclusive;
use thiserror::Error;
use unicode_segmentation::UnicodeSegmentation;

pub const DISPLAY_COUNT_RANGE: RangeInclusive<usize> = 1..=5;
pub const PAD_COUNT_RANGE: RangeInclusive<usize> = 0..=5;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CountError {
    #[error("Expected a whole number, received {0:?}")]
    NotANumber(String),
}

/// Reading position over a piece of text.
///
/// Owns the raw text and the cursor into its word list. The word list itself
/// is never stored; it is re-derived from the text whenever it is needed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReadingState {
    text: String,
    position: usize,
    display_count: usize,
    pad_count: usize,
}

fn clamp_count(value: i64, range: &RangeInclusive<usize>) -> usize {
    value.clamp(*range.start() as i64, *range.end() as i64) as usize
}

fn parse_count(input: &str) -> Result<i64, CountError> {
    input
        .trim()
        .parse::<i64>()
        .map_err(|_| CountError::NotANumber(input.to_string()))
}

impl ReadingState {
    pub fn new(display_count: usize, pad_count: usize) -> Self {
        let mut state = Self {
            text: String::new(),
            position: 0,
            display_count: *DISPLAY_COUNT_RANGE.start(),
            pad_count: *PAD_COUNT_RANGE.start(),
        };
        state.set_display_count(display_count as i64);
        state.set_pad_count(pad_count as i64);
        state
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn display_count(&self) -> usize {
        self.display_count
    }

    pub fn pad_count(&self) -> usize {
        self.pad_count
    }

    pub fn words(&self) -> Vec<&str> {
        split_words(&self.text)
    }

    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }

    pub fn window(&self) -> Window<'_> {
        compute_window(
            &self.words(),
            self.position,
            self.display_count,
            self.pad_count,
        )
    }

    /// Replace the whole text and start again from the first word.
    pub fn set_text(&mut self, text: String) {
        self.text = text;
        self.position = 0;
    }

    pub fn insert_char(&mut self, c: char) {
        self.text.push(c);
        self.clamp_position();
    }

    /// Remove the last grapheme cluster of the text, if any.
    pub fn delete_last_grapheme(&mut self) {
        if let Some((index, _)) = self.text.grapheme_indices(true).next_back() {
            self.text.truncate(index);
        }
        self.clamp_position();
    }

    fn clamp_position(&mut self) {
        let last = self.word_count().saturating_sub(1);
        if self.position > last {
            self.position = last;
        }
    }

    /// Step forward one full chunk.
    ///
    /// The step is only taken when it can move by exactly `display_count`
    /// without running past the last word; otherwise the position is kept.
    /// Returns whether the position moved.
    pub fn advance(&mut self) -> bool {
        let len = self.word_count();
        if len == 0 {
            return false;
        }

        let next = (self.position + self.display_count).min(len - 1);
        if next - self.position == self.display_count {
            self.position = next;
            true
        } else {
            false
        }
    }

    /// Step back one chunk, stopping at the first word.
    pub fn retreat(&mut self) -> bool {
        let previous = self.position;
        self.position = self.position.saturating_sub(self.display_count);
        self.position != previous
    }

    /// Jump back to the first word. Returns whether the position changed.
    pub fn reset(&mut self) -> bool {
        let moved = self.position != 0;
        self.position = 0;
        moved
    }

    pub fn set_display_count(&mut self, count: i64) {
        self.display_count = clamp_count(count, &DISPLAY_COUNT_RANGE);
    }

    pub fn set_pad_count(&mut self, count: i64) {
        self.pad_count = clamp_count(count, &PAD_COUNT_RANGE);
    }

    /// Parse and store a display count typed by the user.
    ///
    /// Numbers outside 1..=5 are clamped; anything else leaves the stored
    /// value untouched.
    pub fn set_display_count_input(&mut self, input: &str) -> Result<usize, CountError> {
        let count = parse_count(input)?;
        self.set_display_count(count);
        Ok(self.display_count)
    }

    pub fn set_pad_count_input(&mut self, input: &str) -> Result<usize, CountError> {
        let count = parse_count(input)?;
        self.set_pad_count(count);
        Ok(self.pad_count)
    }
}

impl Default for ReadingState {
    fn default() -> Self {
        Self::new(2, 2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FOX: &str = "the quick brown fox jumps";

    fn state_with(text: &str, display: usize, pad: usize) -> ReadingState {
        let mut state = ReadingState::new(display, pad);
        state.set_text(text.to_string());
        state
    }

    #[test]
    fn test_readingstate_initialization() {
        let state = ReadingState::default();
        assert_eq!(state.position(), 0);
        assert_eq!(state.display_count(), 2);
        assert_eq!(state.pad_count(), 2);
        assert_eq!(state.text(), "");
    }

    #[test]
    fn test_new_clamps_counts() {
        let state = ReadingState::new(0, 9);
        assert_eq!(state.display_count(), 1);
        assert_eq!(state.pad_count(), 5);
    }

    #[test]
    fn test_window_at_start() {
        let state = state_with(FOX, 2, 1);
        let window = state.window();
        assert_eq!(window.focus_text(), "the quick");
        assert_eq!(window.lead_text(), "");
        assert_eq!(window.trail_text(), "brown");
    }

    #[test]
    fn test_advance_full_steps() {
        let mut state = state_with(FOX, 2, 1);
        assert!(state.advance());
        assert_eq!(state.position(), 2);
        assert!(state.advance());
        assert_eq!(state.position(), 4);
        assert_eq!(state.window().focus_text(), "jumps");
        assert!(!state.advance());
        assert_eq!(state.position(), 4);
    }

    #[test]
    fn test_window_at_position_three() {
        let mut state = state_with(FOX, 3, 1);
        assert!(state.advance());
        state.set_display_count(2);
        assert_eq!(state.position(), 3);

        let window = state.window();
        assert_eq!(window.focus_text(), "fox jumps");
        assert_eq!(window.lead_text(), "brown");
        assert_eq!(window.trail_text(), "");
    }

    #[test]
    fn test_advance_refuses_clipped_step() {
        let mut state = state_with(FOX, 3, 1);
        state.advance();
        state.set_display_count(2);

        // min(3 + 2, 4) = 4, a step of 1, not 2
        assert!(!state.advance());
        assert_eq!(state.position(), 3);
    }

    #[test]
    fn test_advance_then_retreat_round_trips() {
        let mut state = state_with("a b c d e f g h i j k", 3, 0);
        for _ in 0..5 {
            let before = state.position();
            if state.advance() {
                state.retreat();
                assert_eq!(state.position(), before);
                state.advance();
            }
        }
    }

    #[test]
    fn test_retreat_from_zero_is_noop() {
        let mut state = state_with(FOX, 2, 1);
        assert!(!state.retreat());
        assert_eq!(state.position(), 0);
    }

    #[test]
    fn test_retreat_clamps_at_zero() {
        let mut state = state_with(FOX, 3, 0);
        state.advance();
        state.set_display_count(5);
        state.retreat();
        assert_eq!(state.position(), 0);
    }

    #[test]
    fn test_reset_returns_to_start() {
        let mut state = state_with(FOX, 2, 1);
        state.advance();
        state.advance();
        assert!(state.reset());
        assert_eq!(state.position(), 0);
        assert!(!state.reset());
    }

    #[test]
    fn test_empty_text_never_moves() {
        let mut state = state_with("", 2, 1);
        assert!(!state.advance());
        assert_eq!(state.position(), 0);
        assert!(!state.retreat());
        assert_eq!(state.position(), 0);

        let window = state.window();
        assert!(window.lead.is_empty());
        assert!(window.focus.is_empty());
        assert!(window.trail.is_empty());
    }

    #[test]
    fn test_single_word_never_moves() {
        let mut state = state_with("alone", 1, 0);
        assert!(!state.advance());
        assert_eq!(state.position(), 0);
    }

    #[test]
    fn test_position_stays_in_bounds() {
        let mut state = state_with("a b c d e f g", 1, 2);
        for step in 0..30 {
            if step % 7 == 3 {
                state.retreat();
            } else {
                state.advance();
            }
            state.set_display_count((step % 6) as i64);
            assert!(state.position() <= state.word_count().saturating_sub(1));
        }
    }

    #[test]
    fn test_set_display_count_clamps() {
        let mut state = ReadingState::default();
        state.set_display_count(0);
        assert_eq!(state.display_count(), 1);
        state.set_display_count(99);
        assert_eq!(state.display_count(), 5);
        state.set_display_count(-4);
        assert_eq!(state.display_count(), 1);
    }

    #[test]
    fn test_set_pad_count_clamps() {
        let mut state = ReadingState::default();
        state.set_pad_count(-1);
        assert_eq!(state.pad_count(), 0);
        state.set_pad_count(6);
        assert_eq!(state.pad_count(), 5);
        state.set_pad_count(3);
        assert_eq!(state.pad_count(), 3);
    }

    #[test]
    fn test_count_input_rejects_non_numeric() {
        let mut state = ReadingState::new(3, 4);
        assert_eq!(
            state.set_display_count_input("abc"),
            Err(CountError::NotANumber("abc".to_string()))
        );
        assert_eq!(state.display_count(), 3);
        assert!(state.set_pad_count_input("").is_err());
        assert!(state.set_pad_count_input("2.5").is_err());
        assert_eq!(state.pad_count(), 4);
    }

    #[test]
    fn test_count_input_clamps_numbers() {
        let mut state = ReadingState::default();
        assert_eq!(state.set_display_count_input(" 12 "), Ok(5));
        assert_eq!(state.set_pad_count_input("-3"), Ok(0));
        assert_eq!(state.set_display_count_input("4"), Ok(4));
    }

    #[test]
    fn test_set_text_resets_position() {
        let mut state = state_with(FOX, 2, 1);
        state.advance();
        state.set_text("new words here".to_string());
        assert_eq!(state.position(), 0);
    }

    #[test]
    fn test_deleting_text_clamps_position() {
        let mut state = state_with("one two three", 2, 0);
        state.advance();
        assert_eq!(state.position(), 2);
        for _ in 0.."three".len() {
            state.delete_last_grapheme();
        }
        assert_eq!(state.words(), vec!["one", "two"]);
        assert_eq!(state.position(), 1);
    }

    #[test]
    fn test_delete_last_grapheme_handles_unicode() {
        let mut state = state_with("hi😊", 1, 0);
        state.delete_last_grapheme();
        assert_eq!(state.text(), "hi");
        state.delete_last_grapheme();
        state.delete_last_grapheme();
        state.delete_last_grapheme();
        assert_eq!(state.text(), "");
    }

    #[test]
    fn test_insert_char_builds_words() {
        let mut state = ReadingState::default();
        for c in "ab cd\nef".chars() {
            state.insert_char(c);
        }
        assert_eq!(state.words(), vec!["ab", "cd", "ef"]);
    }
}
