//! Diary rows and status bar

use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::App;
use crate::ui::layout::{self, RowKind};
use crate::ui::slot_row::SlotRow;
use crate::ui::theme::StyleSet;

/// Blank lines between rows
const ROW_GAP: u16 = 1;

/// Draw the visible part of the nine-row list
pub(super) fn draw_list(f: &mut Frame, app: &App, area: Rect, styles: &StyleSet) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let entries = app.screen().entries();
    let diary_layout = app.diary_layout();
    let rows = layout::rows();
    let text_width = diary_layout.description_width(area.width);

    let heights: Vec<u16> = rows
        .iter()
        .map(|kind| {
            let text = match kind {
                RowKind::Slot(i) => entries.get(*i).unwrap_or_default(),
                RowKind::Interval => "",
            };
            diary_layout.row_height(*kind, text, text_width)
        })
        .collect();
    let with_gaps: Vec<u16> = heights.iter().map(|h| h + ROW_GAP).collect();

    let focused_row = app.focused_row();
    let visible = diary_layout.visible_rows(&with_gaps, focused_row.unwrap_or(0), area.height);

    let bottom = area.y + area.height;
    let mut y = area.y;
    for row in visible {
        if y >= bottom {
            break;
        }
        let row_area = Rect {
            x: area.x,
            y,
            width: area.width,
            height: heights[row].min(bottom - y),
        };
        y = y.saturating_add(with_gaps[row]);

        let focused = focused_row == Some(row);
        let widget = match rows[row] {
            RowKind::Interval => SlotRow::interval(styles),
            RowKind::Slot(slot) => {
                SlotRow::slot(slot, entries.get(slot).unwrap_or_default(), styles)
                    .layout(diary_layout)
                    .placeholder(&app.config().appearance.placeholder)
                    .focused(focused)
                    .editing(focused && app.is_editing())
            }
        };
        f.render_widget(widget, row_area);

        if focused && app.is_editing() {
            place_cursor(f, app, row_area, rows[row]);
        }
    }
}

/// Put the terminal cursor after the last character of the edited text,
/// following the same wrapping the row widget renders with
fn place_cursor(f: &mut Frame, app: &App, row_area: Rect, kind: RowKind) {
    let RowKind::Slot(slot) = kind else {
        return;
    };
    let (_, desc_area) = app.diary_layout().split_columns(row_area);
    let inner = Block::default().borders(Borders::ALL).inner(desc_area);
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let text = app.screen().entry(slot).unwrap_or_default();
    let lines = layout::wrap_description(text, inner.width);
    let last_width = lines.last().map(|line| line.width()).unwrap_or(0);
    // Rows above the viewport are scrolled away, as in the widget
    let line_index = (lines.len() - 1).min(inner.height as usize - 1) as u16;

    let cursor_x = inner.x + (last_width as u16).min(inner.width - 1);
    let cursor_y = inner.y + line_index;
    f.set_cursor_position((cursor_x, cursor_y));
}

/// Draw the status bar
pub(super) fn draw_status_bar(f: &mut Frame, app: &App, area: Rect, styles: &StyleSet) {
    if area.height == 0 {
        return;
    }

    let status = if app.is_editing() {
        " Editing | Enter: new line | Backspace: delete | ESC: done".to_string()
    } else {
        format!(
            " {} | ↑↓/jk: move | Enter: edit | t: theme | n: new page | q: quit",
            app.screen().theme_mode().label()
        )
    };

    let status_bar = Paragraph::new(status).style(Style::default().fg(styles.date_text));
    f.render_widget(status_bar, area);
}
