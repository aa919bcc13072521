//! Centralized theme and color scheme for the TUI.
//!
//! Provides consistent styling across all TUI screens.

use crate::scoring::ScoreLevel;
use ratatui::style::Color;

/// Color scheme for the TUI application.
/// Provides semantic colors for different UI elements.
#[derive(Debug, Clone, Copy)]
pub struct ColorScheme {
    // Score bucket colors
    pub low: Color,
    pub medium: Color,
    pub high: Color,

    // UI element colors
    pub primary: Color,
    pub accent: Color,
    pub muted: Color,
    pub border: Color,
    pub border_focused: Color,
    pub text: Color,
    pub text_muted: Color,
    pub selection: Color,

    // Status colors
    pub success: Color,
    pub warning: Color,
    pub error: Color,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::dark()
    }
}

impl ColorScheme {
    /// Dark theme (default)
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            low: Color::Red,
            medium: Color::Yellow,
            high: Color::Green,

            primary: Color::Cyan,
            accent: Color::Yellow,
            muted: Color::DarkGray,
            border: Color::DarkGray,
            border_focused: Color::Cyan,
            text: Color::White,
            text_muted: Color::Gray,
            selection: Color::DarkGray,

            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,
        }
    }

    /// Light theme for bright terminals
    #[must_use]
    pub const fn light() -> Self {
        Self {
            low: Color::Red,
            medium: Color::Rgb(180, 120, 0),
            high: Color::Rgb(0, 120, 0),

            primary: Color::Blue,
            accent: Color::Magenta,
            muted: Color::Gray,
            border: Color::Gray,
            border_focused: Color::Blue,
            text: Color::Black,
            text_muted: Color::DarkGray,
            selection: Color::Rgb(200, 200, 220),

            success: Color::Rgb(0, 120, 0),
            warning: Color::Rgb(180, 120, 0),
            error: Color::Red,
        }
    }

    /// Resolve a theme by name, falling back to dark.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "light" => Self::light(),
            _ => Self::dark(),
        }
    }

    /// Color for a score bucket.
    #[must_use]
    pub const fn level_color(&self, level: ScoreLevel) -> Color {
        match level {
            ScoreLevel::Low => self.low,
            ScoreLevel::Medium => self.medium,
            ScoreLevel::High => self.high,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_theme_falls_back_to_dark() {
        let scheme = ColorScheme::from_name("sepia");
        assert_eq!(scheme.text, ColorScheme::dark().text);
    }
}
