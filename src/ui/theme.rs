//! Color themes for the UI.

use crate::app::Theme;
use ratatui::style::Color;

/// Theme color palette.
#[derive(Debug, Clone)]
pub struct ThemeColors {
    /// Background color.
    pub bg: Color,
    /// Axis and tick color.
    pub axis: Color,
    /// Plotted curve color.
    pub curve: Color,
    /// Pendulum arm and pivot color.
    pub arm: Color,
    /// Pendulum ball color.
    pub ball: Color,
    /// Border color.
    pub border: Color,
    /// Status bar foreground color.
    pub status_fg: Color,
    /// Status bar background color.
    pub status_bg: Color,
    /// Keymap bar foreground color.
    pub keymap_fg: Color,
    /// Keymap bar background color.
    pub keymap_bg: Color,
    /// Pause marker color.
    pub warning: Color,
}

impl ThemeColors {
    /// Create color palette from theme.
    pub fn from_theme(theme: &Theme) -> Self {
        match theme {
            Theme::Classic => Self {
                bg: Color::Black,
                axis: Color::Rgb(245, 245, 245),
                curve: Color::Rgb(230, 41, 55),
                arm: Color::Rgb(245, 245, 245),
                ball: Color::Rgb(230, 41, 55),
                border: Color::DarkGray,
                status_fg: Color::White,
                status_bg: Color::Rgb(40, 40, 40),
                keymap_fg: Color::Gray,
                keymap_bg: Color::Black,
                warning: Color::Yellow,
            },
            Theme::GruvboxDark => Self {
                bg: Color::Rgb(40, 40, 40),
                axis: Color::Rgb(235, 219, 178),
                curve: Color::Rgb(251, 73, 52),
                arm: Color::Rgb(142, 192, 124),
                ball: Color::Rgb(251, 184, 108),
                border: Color::Rgb(102, 92, 84),
                status_fg: Color::Rgb(235, 219, 178),
                status_bg: Color::Rgb(60, 56, 54),
                keymap_fg: Color::Rgb(235, 219, 178),
                keymap_bg: Color::Rgb(40, 40, 40),
                warning: Color::Rgb(250, 189, 47),
            },
            Theme::GruvboxLight => Self {
                bg: Color::Rgb(251, 245, 234),
                axis: Color::Rgb(60, 56, 54),
                curve: Color::Rgb(157, 0, 6),
                arm: Color::Rgb(121, 116, 14),
                ball: Color::Rgb(175, 58, 3),
                border: Color::Rgb(213, 196, 161),
                status_fg: Color::Rgb(60, 56, 54),
                status_bg: Color::Rgb(235, 219, 178),
                keymap_fg: Color::Rgb(60, 56, 54),
                keymap_bg: Color::Rgb(251, 245, 234),
                warning: Color::Rgb(181, 118, 20),
            },
        }
    }
}
