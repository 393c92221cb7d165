//! Color tables for the diary screen
//!
//! Provides:
//! - StyleSet struct with every color the screen uses
//! - One table per ThemeMode (light, dark)
//! - 256-color fallback

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

use crate::screen::ThemeMode;

/// Blue behind the time labels, shared by both modes
const TIME_CELL_BLUE: Color = Color::Rgb(74, 144, 226); // #4a90e2
const WHITE: Color = Color::Rgb(255, 255, 255); // #ffffff

/// Colors for one theme mode. Layout never depends on these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleSet {
    /// Area outside the form
    pub screen_background: Color,
    /// Form container
    pub container_background: Color,
    /// "Daily Diary" title
    pub title_text: Color,
    /// Date label in the header
    pub date_text: Color,
    /// "Light Mode" / "Dark Mode" label
    pub switch_text: Color,
    /// Background of a slot row
    pub row_background: Color,
    /// Time label cell background
    pub time_cell_background: Color,
    /// Time label text
    pub time_cell_text: Color,
    /// Text typed into a slot
    pub description_text: Color,
    /// Interval banner background
    pub interval_background: Color,
    /// Interval banner text
    pub interval_text: Color,
    /// "Write description" placeholder
    pub placeholder_text: Color,
    /// Border of the focused control
    pub focus_accent: Color,
}

impl Default for StyleSet {
    fn default() -> Self {
        Self::light()
    }
}

impl StyleSet {
    pub fn light() -> Self {
        Self {
            screen_background: Color::Rgb(249, 249, 249),    // #f9f9f9
            container_background: Color::Rgb(249, 249, 249), // #f9f9f9
            title_text: Color::Rgb(51, 51, 51),              // #333333
            date_text: Color::Rgb(102, 102, 102),            // #666666
            switch_text: Color::Rgb(51, 51, 51),             // #333333
            row_background: Color::Rgb(255, 255, 255),       // #ffffff
            time_cell_background: TIME_CELL_BLUE,
            time_cell_text: WHITE,
            description_text: Color::Rgb(34, 34, 34),     // #222222
            interval_background: Color::Rgb(255, 235, 59), // #ffeb3b
            interval_text: Color::Rgb(68, 68, 68),        // #444444
            placeholder_text: Color::Rgb(102, 102, 102),  // #666666
            focus_accent: TIME_CELL_BLUE,
        }
    }

    pub fn dark() -> Self {
        Self {
            screen_background: Color::Rgb(18, 18, 18),    // #121212
            container_background: Color::Rgb(18, 18, 18), // #121212
            title_text: WHITE,
            date_text: Color::Rgb(187, 187, 187),   // #bbbbbb
            switch_text: WHITE,
            row_background: Color::Rgb(30, 30, 30), // #1e1e1e
            time_cell_background: TIME_CELL_BLUE,
            time_cell_text: WHITE,
            description_text: Color::Rgb(221, 221, 221),  // #dddddd
            interval_background: Color::Rgb(51, 51, 51),  // #333333
            interval_text: Color::Rgb(187, 187, 187),     // #bbbbbb
            placeholder_text: Color::Rgb(170, 170, 170),  // #aaaaaa
            focus_accent: Color::Rgb(255, 235, 59),       // #ffeb3b
        }
    }

    /// The table for a mode. Total and fixed.
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
        }
    }

    /// Convert to 256-color approximation for limited terminals
    pub fn to_256_color(&self) -> Self {
        Self {
            screen_background: approximate_256(self.screen_background),
            container_background: approximate_256(self.container_background),
            title_text: approximate_256(self.title_text),
            date_text: approximate_256(self.date_text),
            switch_text: approximate_256(self.switch_text),
            row_background: approximate_256(self.row_background),
            time_cell_background: approximate_256(self.time_cell_background),
            time_cell_text: approximate_256(self.time_cell_text),
            description_text: approximate_256(self.description_text),
            interval_background: approximate_256(self.interval_background),
            interval_text: approximate_256(self.interval_text),
            placeholder_text: approximate_256(self.placeholder_text),
            focus_accent: approximate_256(self.focus_accent),
        }
    }
}

/// Terminal color capability, from config
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Truecolor when `COLORTERM` says so, 256 colors otherwise
    #[default]
    Auto,
    #[serde(alias = "24bit")]
    Truecolor,
    #[serde(rename = "256")]
    Indexed,
}

impl ColorMode {
    /// Whether RGB colors can be sent as-is
    pub fn supports_truecolor(self) -> bool {
        match self {
            ColorMode::Truecolor => true,
            ColorMode::Indexed => false,
            ColorMode::Auto => colorterm_is_truecolor(std::env::var("COLORTERM").ok().as_deref()),
        }
    }

    /// Resolve the style set for a mode under this capability
    pub fn styles(self, mode: ThemeMode) -> StyleSet {
        let styles = StyleSet::for_mode(mode);
        if self.supports_truecolor() {
            styles
        } else {
            styles.to_256_color()
        }
    }
}

fn colorterm_is_truecolor(value: Option<&str>) -> bool {
    matches!(value, Some("truecolor") | Some("24bit"))
}

/// Approximate RGB color to nearest 256-color palette entry
fn approximate_256(color: Color) -> Color {
    match color {
        Color::Rgb(r, g, b) => {
            let max = r.max(g).max(b);
            let min = r.min(g).min(b);
            if max - min <= GRAY_SPREAD {
                return Color::Indexed(gray_index(r, g, b));
            }
            // 6x6x6 color cube starts at index 16
            // Each axis: 0, 95, 135, 175, 215, 255 -> indices 0-5
            let r_idx = if r < 48 { 0 } else { (r - 35) / 40 };
            let g_idx = if g < 48 { 0 } else { (g - 35) / 40 };
            let b_idx = if b < 48 { 0 } else { (b - 35) / 40 };
            let idx = 16 + 36 * r_idx + 6 * g_idx + b_idx;
            Color::Indexed(idx)
        }
        c => c,
    }
}

/// Channels this close together count as gray
const GRAY_SPREAD: u8 = 10;

/// Nearest entry on the 24-step grayscale ramp (232-255, levels 8..238),
/// with pure black and white taken from the cube corners
fn gray_index(r: u8, g: u8, b: u8) -> u8 {
    let level = (r as u16 + g as u16 + b as u16) / 3;
    match level {
        0..=3 => 16,
        250..=u16::MAX => 231,
        _ => 232 + ((level - 3) / 10).min(23) as u8,
    }
}
