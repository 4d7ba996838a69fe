#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// Stepping through the text; keys drive navigation and settings
    Reading,
    /// Keystrokes go into the text
    Editing,
    /// Typing into the command deck
    Command,
    Quit,
}
