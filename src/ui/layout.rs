//! Row layout for the diary list
//!
//! Provides:
//! - The fixed row sequence (4 slots, interval banner, 4 slots)
//! - Row heights that grow with wrapped, multiline descriptions
//! - Scrolling so the focused row stays fully visible
//! - The 1:2 time/description column split
//! - Platform top padding

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use std::ops::Range;
use unicode_width::UnicodeWidthChar;

use crate::screen::{SLOTS_BEFORE_INTERVAL, SLOT_COUNT};

/// Rows in the list: every slot plus the interval banner
pub const ROW_COUNT: usize = SLOT_COUNT + 1;

/// One text line framed by a top and bottom border
pub const MIN_ROW_HEIGHT: u16 = 3;

/// Time cell : description cell width ratio
const TIME_WEIGHT: u32 = 1;
const DESCRIPTION_WEIGHT: u32 = 2;

/// What a list row shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    /// Time label + description input for slot `i`
    Slot(usize),
    /// Static break banner
    Interval,
}

/// The fixed row sequence, top to bottom
pub fn rows() -> [RowKind; ROW_COUNT] {
    std::array::from_fn(|row| match row {
        r if r < SLOTS_BEFORE_INTERVAL => RowKind::Slot(r),
        r if r == SLOTS_BEFORE_INTERVAL => RowKind::Interval,
        r => RowKind::Slot(r - 1),
    })
}

/// List row index that shows `slot`
pub fn row_of_slot(slot: usize) -> usize {
    if slot < SLOTS_BEFORE_INTERVAL {
        slot
    } else {
        slot + 1
    }
}

/// Host platform, consulted once for the top padding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Android,
    Other,
}

impl Platform {
    pub fn detect() -> Self {
        Self::from_os(std::env::consts::OS)
    }

    pub fn from_os(os: &str) -> Self {
        if os == "android" {
            Self::Android
        } else {
            Self::Other
        }
    }

    /// Blank rows above the header
    pub fn top_padding(self) -> u16 {
        match self {
            Self::Android => 2,
            Self::Other => 1,
        }
    }
}

/// Row sizing and scrolling for the list area
#[derive(Debug, Clone, Copy)]
pub struct DiaryLayout {
    /// Tallest a slot row may grow to, borders included
    pub max_row_height: u16,
}

impl Default for DiaryLayout {
    fn default() -> Self {
        Self { max_row_height: 6 }
    }
}

impl DiaryLayout {
    pub fn new(max_row_height: u16) -> Self {
        Self {
            max_row_height: max_row_height.clamp(MIN_ROW_HEIGHT, 20),
        }
    }

    /// Height of one row whose description wraps at `text_width`.
    /// The banner is always the minimum height.
    pub fn row_height(&self, kind: RowKind, description: &str, text_width: u16) -> u16 {
        match kind {
            RowKind::Interval => MIN_ROW_HEIGHT,
            RowKind::Slot(_) => {
                let lines = description_lines(description, text_width).min(u16::MAX as usize) as u16;
                lines
                    .saturating_add(2)
                    .clamp(MIN_ROW_HEIGHT, self.max_row_height)
            }
        }
    }

    /// Range of rows to draw so that `focused` is fully visible.
    ///
    /// Keeps as many leading rows as possible; scrolls only once the
    /// focused row would fall below the area.
    pub fn visible_rows(&self, heights: &[u16], focused: usize, available: u16) -> Range<usize> {
        if heights.is_empty() || available == 0 {
            return 0..0;
        }
        let focused = focused.min(heights.len() - 1);

        // Smallest start where start..=focused fits
        let mut start = 0;
        while start < focused && total(&heights[start..=focused]) > available {
            start += 1;
        }

        let mut used = 0u16;
        let mut end = start;
        while end < heights.len() {
            let next = used.saturating_add(heights[end]);
            if next > available && end > start {
                break;
            }
            used = next;
            end += 1;
        }
        start..end
    }

    /// Split a row into time cell and description cell (1:2)
    pub fn split_columns(&self, area: Rect) -> (Rect, Rect) {
        let weights = TIME_WEIGHT + DESCRIPTION_WEIGHT;
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Ratio(TIME_WEIGHT, weights),
                Constraint::Ratio(DESCRIPTION_WEIGHT, weights),
            ])
            .split(area);
        (chunks[0], chunks[1])
    }

    /// Text width inside the bordered description cell of a row `row_width` wide
    pub fn description_width(&self, row_width: u16) -> u16 {
        let (_, desc) = self.split_columns(Rect::new(0, 0, row_width, 1));
        desc.width.saturating_sub(2)
    }
}

/// Break a description into display lines no wider than `width` columns.
///
/// Hard newlines always start a new line; long lines break at the column
/// limit. A zero width only splits on newlines.
pub fn wrap_description(text: &str, width: u16) -> Vec<String> {
    let width = width as usize;
    let mut lines = Vec::new();
    for logical in text.split('\n') {
        let mut current = String::new();
        let mut used = 0;
        for c in logical.chars() {
            let w = c.width().unwrap_or(0);
            if width > 0 && used + w > width && !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                used = 0;
            }
            current.push(c);
            used += w;
        }
        lines.push(current);
    }
    lines
}

/// Number of display lines in a description wrapped at `width`; empty text
/// still takes one
pub fn description_lines(text: &str, width: u16) -> usize {
    wrap_description(text, width).len()
}

fn total(heights: &[u16]) -> u16 {
    heights.iter().fold(0u16, |acc, h| acc.saturating_add(*h))
}
