use ratatui::style::Color;

/// Midnight theme colors
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub background: Color,
    pub surface: Color,
    pub text: Color,
    /// Background of the focused chunk
    pub focus: Color,
    pub focus_text: Color,
    /// Padding words
    pub dimmed: Color,
    pub accent: Color,
    pub error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme::midnight()
    }
}

impl Theme {
    pub fn midnight() -> Self {
        Self {
            background: Color::Rgb(26, 27, 38),  // #1A1B26
            surface: Color::Rgb(36, 40, 59),     // #24283B
            text: Color::Rgb(169, 177, 214),     // #A9B1D6
            focus: Color::Rgb(224, 175, 104),    // #E0AF68
            focus_text: Color::Rgb(26, 27, 38),  // #1A1B26
            dimmed: Color::Rgb(100, 110, 150),   // #646E96
            accent: Color::Rgb(122, 162, 247),   // #7AA2F7
            error: Color::Rgb(247, 118, 142),    // #F7768E
        }
    }

    pub fn current() -> Self {
        Self::midnight()
    }
}

/// Convenience access to current theme colors
pub mod colors {
    use super::Theme;
    use ratatui::style::Color;

    pub fn background() -> Color {
        Theme::current().background
    }
    pub fn surface() -> Color {
        Theme::current().surface
    }
    pub fn text() -> Color {
        Theme::current().text
    }
    pub fn focus() -> Color {
        Theme::current().focus
    }
    pub fn focus_text() -> Color {
        Theme::current().focus_text
    }
    pub fn dimmed() -> Color {
        Theme::current().dimmed
    }
    pub fn accent() -> Color {
        Theme::current().accent
    }
    pub fn error() -> Color {
        Theme::current().error
    }
}
