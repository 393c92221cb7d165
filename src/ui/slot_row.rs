//! Row widget for the diary list
//!
//! Renders either:
//! - a slot: time label cell (1 part) + description cell (2 parts)
//! - the interval banner: one centered label on the accent background

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Text},
    widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap},
};

use super::layout::{wrap_description, DiaryLayout, RowKind};
use super::theme::StyleSet;
use crate::screen::SLOT_LABELS;

/// Text of the break banner
pub const INTERVAL_LABEL: &str = "Break / Interval (30 mins)";

/// Default placeholder for an empty description
pub const DEFAULT_PLACEHOLDER: &str = "Write description";

/// One list row
pub struct SlotRow<'a> {
    kind: RowKind,
    description: &'a str,
    styles: &'a StyleSet,
    layout: DiaryLayout,
    placeholder: &'a str,
    focused: bool,
    editing: bool,
}

impl<'a> SlotRow<'a> {
    pub fn slot(slot: usize, description: &'a str, styles: &'a StyleSet) -> Self {
        Self {
            kind: RowKind::Slot(slot),
            description,
            styles,
            layout: DiaryLayout::default(),
            placeholder: DEFAULT_PLACEHOLDER,
            focused: false,
            editing: false,
        }
    }

    pub fn interval(styles: &'a StyleSet) -> Self {
        Self {
            kind: RowKind::Interval,
            description: "",
            styles,
            layout: DiaryLayout::default(),
            placeholder: DEFAULT_PLACEHOLDER,
            focused: false,
            editing: false,
        }
    }

    pub fn layout(mut self, layout: DiaryLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = placeholder;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn editing(mut self, editing: bool) -> Self {
        self.editing = editing;
        self
    }

    fn render_interval(&self, area: Rect, buf: &mut Buffer) {
        let style = Style::default()
            .fg(self.styles.interval_text)
            .bg(self.styles.interval_background);
        let block = Block::default().style(style);
        let inner = center_vertically(area, 1);
        block.render(area, buf);
        Paragraph::new(INTERVAL_LABEL)
            .style(style.add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .render(inner, buf);
    }

    fn render_slot(&self, slot: usize, area: Rect, buf: &mut Buffer) {
        let (time_area, desc_area) = self.layout.split_columns(area);

        // Time cell
        let time_style = Style::default()
            .fg(self.styles.time_cell_text)
            .bg(self.styles.time_cell_background);
        Block::default().style(time_style).render(time_area, buf);
        let label = SLOT_LABELS.get(slot).copied().unwrap_or_default();
        Paragraph::new(label)
            .style(time_style.add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .render(center_vertically(time_area, 1), buf);

        // Description cell
        let row_style = Style::default().bg(self.styles.row_background);
        let border_color = if self.focused {
            self.styles.focus_accent
        } else {
            self.styles.row_background
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(if self.editing {
                BorderType::Thick
            } else {
                BorderType::Rounded
            })
            .border_style(row_style.fg(border_color))
            .style(row_style);
        let inner = block.inner(desc_area);
        block.render(desc_area, buf);

        let paragraph = if self.description.is_empty() {
            Paragraph::new(self.placeholder).style(row_style.fg(self.styles.placeholder_text))
        } else {
            let lines = wrap_description(self.description, inner.width);
            // Keep the last line in view while typing
            let overflow = lines.len().saturating_sub(inner.height as usize);
            let text: Text = lines.into_iter().map(Line::from).collect();
            Paragraph::new(text)
                .style(row_style.fg(self.styles.description_text))
                .wrap(Wrap { trim: false })
                .scroll((overflow.min(u16::MAX as usize) as u16, 0))
        };
        paragraph.render(inner, buf);
    }
}

impl Widget for SlotRow<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        match self.kind {
            RowKind::Interval => self.render_interval(area, buf),
            RowKind::Slot(slot) => self.render_slot(slot, area, buf),
        }
    }
}

/// One-line-high rect in the vertical middle of `area`
fn center_vertically(area: Rect, height: u16) -> Rect {
    let height = height.min(area.height);
    Rect {
        x: area.x,
        y: area.y + (area.height - height) / 2,
        width: area.width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol())
            .collect::<String>()
    }

    #[test]
    fn test_empty_slot_shows_placeholder() {
        let styles = StyleSet::light();
        let area = Rect::new(0, 0, 60, 3);
        let mut buf = Buffer::empty(area);
        SlotRow::slot(0, "", &styles).render(area, &mut buf);

        let middle = row_text(&buf, 1);
        assert!(middle.contains("8:00 AM - 9:00 AM"));
        assert!(middle.contains(DEFAULT_PLACEHOLDER));

        // Placeholder color on the first placeholder cell (after the border)
        let cell = &buf[(21, 1)];
        assert_eq!(cell.fg, styles.placeholder_text);
    }

    #[test]
    fn test_filled_slot_shows_text() {
        let styles = StyleSet::dark();
        let area = Rect::new(0, 0, 60, 4);
        let mut buf = Buffer::empty(area);
        SlotRow::slot(4, "Lunch\nwith team", &styles).render(area, &mut buf);

        assert!(row_text(&buf, 1).contains("Lunch"));
        assert!(row_text(&buf, 2).contains("with team"));
        assert!(!row_text(&buf, 1).contains(DEFAULT_PLACEHOLDER));
        assert!(row_text(&buf, 1).contains("12:30 PM - 1:30 PM"));
    }

    #[test]
    fn test_time_cell_colors() {
        let styles = StyleSet::dark();
        let area = Rect::new(0, 0, 60, 3);
        let mut buf = Buffer::empty(area);
        SlotRow::slot(1, "", &styles).render(area, &mut buf);

        let cell = &buf[(0, 0)];
        assert_eq!(cell.bg, styles.time_cell_background);
    }

    #[test]
    fn test_interval_banner() {
        let styles = StyleSet::light();
        let area = Rect::new(0, 0, 60, 3);
        let mut buf = Buffer::empty(area);
        SlotRow::interval(&styles).render(area, &mut buf);

        assert!(row_text(&buf, 1).contains(INTERVAL_LABEL));
        assert_eq!(buf[(0, 0)].bg, styles.interval_background);
    }

    #[test]
    fn test_long_text_scrolls_to_last_line() {
        let styles = StyleSet::light();
        let area = Rect::new(0, 0, 60, 3);
        let mut buf = Buffer::empty(area);
        SlotRow::slot(2, "first\nsecond\nthird", &styles).render(area, &mut buf);

        assert!(row_text(&buf, 1).contains("third"));
    }

    #[test]
    fn test_long_single_line_wraps() {
        let styles = StyleSet::light();
        // Description cell is 40 wide, 38 inside the border
        let area = Rect::new(0, 0, 60, 4);
        let mut buf = Buffer::empty(area);
        let text = format!("{}TAIL", "a".repeat(40));
        SlotRow::slot(0, &text, &styles).render(area, &mut buf);

        assert!(row_text(&buf, 1).contains(&"a".repeat(38)));
        assert!(row_text(&buf, 2).contains("aaTAIL"));
    }

    #[test]
    fn test_wrapped_text_scrolls_to_last_line() {
        let styles = StyleSet::dark();
        let area = Rect::new(0, 0, 60, 3);
        let mut buf = Buffer::empty(area);
        let text = format!("{}END", "b".repeat(76));
        SlotRow::slot(3, &text, &styles).render(area, &mut buf);

        assert!(row_text(&buf, 1).contains("END"));
    }

    #[test]
    fn test_center_vertically() {
        assert_eq!(center_vertically(Rect::new(0, 2, 10, 5), 1), Rect::new(0, 4, 10, 1));
        assert_eq!(center_vertically(Rect::new(0, 0, 10, 0), 1).height, 0);
    }
}
