//! Terminal color theme system
//!
//! Provides adaptive color palettes for dark and light terminal backgrounds.
//! Auto-detects via COLORFGBG env var, or manual override with the
//! PC_LIGHT_BG=1 environment variable.

use pc_core::Cell;
use ratatui::style::Color;

/// Color theme for terminal UI.
/// All UI code should use theme colors instead of hardcoded Color:: values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    // General UI text
    /// Primary foreground text
    pub text: Color,
    /// Secondary/hint text (footers, key help)
    pub text_dim: Color,

    // Borders
    pub border: Color,
    /// Border while the last generation failed
    pub border_danger: Color,

    // Semantic colors
    pub accent: Color,
    pub good: Color,
    pub bad: Color,

    // Grid cells
    pub cell_empty: Color,
    pub cell_corridor: Color,
    pub cell_joint: Color,
    pub cell_start: Color,
    pub cell_end: Color,
}

impl Theme {
    /// Dark terminal background theme (default)
    pub fn dark() -> Self {
        Self {
            text: Color::White,
            text_dim: Color::DarkGray,
            border: Color::White,
            border_danger: Color::Red,
            accent: Color::Cyan,
            good: Color::Green,
            bad: Color::Red,
            cell_empty: Color::DarkGray,
            cell_corridor: Color::Gray,
            cell_joint: Color::Yellow,
            cell_start: Color::LightGreen,
            cell_end: Color::LightRed,
        }
    }

    /// Light terminal background theme
    pub fn light() -> Self {
        Self {
            text: Color::Black,
            text_dim: Color::DarkGray,
            border: Color::DarkGray,
            border_danger: Color::Red,
            accent: Color::Blue,
            good: Color::Green,
            bad: Color::Red,
            cell_empty: Color::Gray,
            cell_corridor: Color::Black,
            cell_joint: Color::Magenta,
            cell_start: Color::Green,
            cell_end: Color::Red,
        }
    }

    /// Auto-detect terminal background and return appropriate theme.
    /// Checks COLORFGBG env var and PC_LIGHT_BG override.
    pub fn detect() -> Self {
        if Self::is_light_background() {
            Self::light()
        } else {
            Self::dark()
        }
    }

    pub fn cell_color(&self, cell: Cell) -> Color {
        match cell {
            Cell::Empty => self.cell_empty,
            Cell::Corridor => self.cell_corridor,
            Cell::Joint => self.cell_joint,
        }
    }

    fn is_light_background() -> bool {
        // Explicit override via environment variable
        if let Ok(val) = std::env::var("PC_LIGHT_BG") {
            return val == "1" || val.eq_ignore_ascii_case("true");
        }

        std::env::var("COLORFGBG")
            .map(|v| colorfgbg_is_light(&v))
            .unwrap_or(false)
    }
}

/// COLORFGBG is set by many terminals (xterm, rxvt, iTerm2, etc.)
/// Format: "fg;bg" where values are color indices (0-15).
/// Light backgrounds have bg index 7 or 9..=15 (8 is bright black).
fn colorfgbg_is_light(value: &str) -> bool {
    value
        .rsplit(';')
        .next()
        .and_then(|bg| bg.parse::<u8>().ok())
        .is_some_and(|bg| matches!(bg, 7 | 9..=15))
}

impl Default for Theme {
    fn default() -> Self {
        Self::detect()
    }
}
