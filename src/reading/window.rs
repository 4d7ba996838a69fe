/// The three visible slices of the word list around the current position.
///
/// `lead` and `trail` are context only; `focus` is the chunk that gets
/// highlighted and spoken.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Window<'a> {
    pub lead: Vec<&'a str>,
    pub focus: Vec<&'a str>,
    pub trail: Vec<&'a str>,
}

impl Window<'_> {
    pub fn lead_text(&self) -> String {
        self.lead.join(" ")
    }

    /// Focused words joined with single spaces, as they are spoken.
    pub fn focus_text(&self) -> String {
        self.focus.join(" ")
    }

    pub fn trail_text(&self) -> String {
        self.trail.join(" ")
    }
}

/// Slice `words[start..end]`, clamped to the list bounds.
fn clamped<'a>(words: &[&'a str], start: usize, end: usize) -> Vec<&'a str> {
    let end = end.min(words.len());
    let start = start.min(end);
    words[start..end].to_vec()
}

/// Derive the visible window for a position.
///
/// Pure function of its inputs. Out-of-range positions and counts yield
/// empty slices rather than panicking.
pub fn compute_window<'a>(
    words: &[&'a str],
    position: usize,
    display_count: usize,
    pad_count: usize,
) -> Window<'a> {
    let focus_end = position.saturating_add(display_count);

    Window {
        lead: clamped(words, position.saturating_sub(pad_count), position),
        focus: clamped(words, position, focus_end),
        trail: clamped(words, focus_end, focus_end.saturating_add(pad_count)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WORDS: [&str; 5] = ["the", "quick", "brown", "fox", "jumps"];

    #[test]
    fn test_window_at_start() {
        let window = compute_window(&WORDS, 0, 2, 1);
        assert_eq!(window.lead_text(), "");
        assert_eq!(window.focus_text(), "the quick");
        assert_eq!(window.trail_text(), "brown");
    }

    #[test]
    fn test_window_at_end_has_no_trail() {
        let window = compute_window(&WORDS, 3, 2, 1);
        assert_eq!(window.lead_text(), "brown");
        assert_eq!(window.focus_text(), "fox jumps");
        assert_eq!(window.trail_text(), "");
    }

    #[test]
    fn test_window_lead_clamps_at_zero() {
        let window = compute_window(&WORDS, 1, 1, 5);
        assert_eq!(window.lead, vec!["the"]);
        assert_eq!(window.focus, vec!["quick"]);
        assert_eq!(window.trail, vec!["brown", "fox", "jumps"]);
    }

    #[test]
    fn test_window_zero_padding() {
        let window = compute_window(&WORDS, 2, 2, 0);
        assert!(window.lead.is_empty());
        assert_eq!(window.focus, vec!["brown", "fox"]);
        assert!(window.trail.is_empty());
    }

    #[test]
    fn test_window_focus_shrinks_near_end() {
        let window = compute_window(&WORDS, 4, 3, 2);
        assert_eq!(window.focus, vec!["jumps"]);
        assert_eq!(window.lead, vec!["brown", "fox"]);
        assert!(window.trail.is_empty());
    }

    #[test]
    fn test_window_out_of_range_is_empty() {
        let window = compute_window(&WORDS, 40, 2, 2);
        assert!(window.focus.is_empty());
        assert!(window.trail.is_empty());
        assert!(window.lead.is_empty());
    }

    #[test]
    fn test_window_empty_word_list() {
        let window = compute_window(&[], 0, 2, 2);
        assert_eq!(window, Window::default());
    }

    #[test]
    fn test_window_lengths_are_bounded() {
        for position in 0..WORDS.len() {
            for display in 1..=5 {
                for pad in 0..=5 {
                    let window = compute_window(&WORDS, position, display, pad);
                    assert_eq!(window.focus.len(), display.min(WORDS.len() - position));
                    assert!(window.lead.len() <= pad);
                    assert!(window.trail.len() <= pad);
                }
            }
        }
    }
}
