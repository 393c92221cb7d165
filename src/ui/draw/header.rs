//! Header and theme switch rows
//!
//! Both rows put one item on the left edge and one on the right edge.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::{App, Focus};
use crate::ui::theme::StyleSet;

/// Switch knob positions
const SWITCH_OFF: &str = "(●    )";
const SWITCH_ON: &str = "(    ●)";
const FOCUS_MARKER: &str = "▸ ";

/// Split a row into a flexible left part and a right part `right_width` wide
fn split_opposed(area: Rect, right_width: u16) -> [Rect; 2] {
    Layout::horizontal([Constraint::Min(0), Constraint::Length(right_width)]).areas(area)
}

/// Title on the left, date label on the right
pub(super) fn draw_header(f: &mut Frame, app: &App, area: Rect, styles: &StyleSet) {
    if area.height == 0 {
        return;
    }

    let date_label = app.screen().date_label();
    let [left, right] = split_opposed(area, date_label.width() as u16);

    let title = Paragraph::new(app.config().appearance.title.as_str()).style(
        Style::default()
            .fg(styles.title_text)
            .add_modifier(Modifier::BOLD),
    );
    f.render_widget(title, left);

    let date = Paragraph::new(date_label)
        .style(Style::default().fg(styles.date_text))
        .alignment(Alignment::Right);
    f.render_widget(date, right);
}

/// Mode label on the left, switch control on the right
pub(super) fn draw_switch_row(f: &mut Frame, app: &App, area: Rect, styles: &StyleSet) {
    if area.height == 0 {
        return;
    }

    let mode = app.screen().theme_mode();
    let focused = app.focus() == Focus::ThemeSwitch;

    let knob = if app.screen().is_dark() { SWITCH_ON } else { SWITCH_OFF };
    let knob_style = if focused {
        Style::default()
            .fg(styles.focus_accent)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(styles.switch_text)
    };

    let mut spans = Vec::with_capacity(2);
    if focused {
        spans.push(Span::styled(FOCUS_MARKER, knob_style));
    }
    spans.push(Span::styled(knob, knob_style));
    let switch = Line::from(spans);

    let [left, right] = split_opposed(area, switch.width() as u16);

    let label = Paragraph::new(mode.label()).style(Style::default().fg(styles.switch_text));
    f.render_widget(label, left);
    f.render_widget(Paragraph::new(switch).alignment(Alignment::Right), right);
}
