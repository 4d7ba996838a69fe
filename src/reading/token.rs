/// Splits raw text into its word list.
///
/// Words are the non-empty runs between whitespace, in document order.
/// Leading, trailing and repeated whitespace (spaces, tabs, newlines) never
/// produce empty entries.
pub fn split_words(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}
