//! Drawing functions for the TUI
//!
//! The screen is one fixed stack, split by area:
//! - `header` - title, date label and the theme switch row
//! - `list` - the nine diary rows and the status bar

mod header;
mod list;

use ratatui::{
    layout::{Constraint, Direction, Layout, Margin},
    style::Style,
    widgets::Block,
    Frame,
};

use crate::app::App;

use header::{draw_header, draw_switch_row};
use list::{draw_list, draw_status_bar};

/// Columns of padding left and right of the form
const HORIZONTAL_PADDING: u16 = 2;

/// Main draw function
pub fn draw(f: &mut Frame, app: &App) {
    let styles = app.styles();

    // Fill background with theme color
    let area = f.area();
    f.render_widget(
        Block::default().style(Style::default().bg(styles.screen_background)),
        area,
    );

    let container = area.inner(Margin {
        horizontal: HORIZONTAL_PADDING,
        vertical: 0,
    });
    f.render_widget(
        Block::default().style(Style::default().bg(styles.container_background)),
        container,
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(app.platform().top_padding()), // Top padding
            Constraint::Length(1),                            // Header
            Constraint::Length(1),                            // Gap
            Constraint::Length(1),                            // Theme switch
            Constraint::Length(1),                            // Gap
            Constraint::Min(1),                               // Diary rows
            Constraint::Length(1),                            // Status bar
        ])
        .split(container);

    draw_header(f, app, chunks[1], &styles);
    draw_switch_row(f, app, chunks[3], &styles);
    draw_list(f, app, chunks[5], &styles);
    draw_status_bar(f, app, chunks[6], &styles);
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    use crate::config::Config;
    use crate::date::DateLocale;
    use crate::screen::{Screen, SLOT_LABELS};
    use crate::ui::layout::Platform;
    use crate::ui::slot_row::INTERVAL_LABEL;
    use crate::ui::theme::{ColorMode, StyleSet};

    fn app() -> App {
        let mut config = Config::default();
        config.appearance.color_mode = ColorMode::Truecolor;
        let screen = Screen::mount_on(
            DateLocale::default(),
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        );
        App::with_screen(screen, config, Platform::Other)
    }

    fn render(app: &App, width: u16, height: u16) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn screen_text(buf: &Buffer) -> String {
        (0..buf.area.height)
            .map(|y| {
                (0..buf.area.width)
                    .map(|x| buf[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
            .unwrap();
    }

    #[test]
    fn test_header_shows_title_and_date() {
        let text = screen_text(&render(&app(), 80, 50));
        assert!(text.contains("Daily Diary"));
        assert!(text.contains("Mon, Jan 1, 2024"));
        assert!(text.contains("Light Mode"));
    }

    #[test]
    fn test_renders_nine_rows() {
        let text = screen_text(&render(&app(), 80, 50));
        assert_eq!(text.matches("Write description").count(), 8);
        assert_eq!(text.matches(INTERVAL_LABEL).count(), 1);
        for label in SLOT_LABELS {
            assert!(text.contains(label), "missing {}", label);
        }
    }

    #[test]
    fn test_row_count_independent_of_content_and_theme() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        for c in "Standup meeting".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Esc);
        press(&mut app, KeyCode::Char('t'));

        let text = screen_text(&render(&app, 80, 50));
        assert!(text.contains("Standup meeting"));
        assert!(text.contains("Dark Mode"));
        assert_eq!(text.matches("Write description").count(), 7);
        assert_eq!(text.matches(INTERVAL_LABEL).count(), 1);
    }

    #[test]
    fn test_dark_mode_background() {
        let mut app = app();
        let light = render(&app, 80, 50);
        assert_eq!(light[(0, 0)].bg, StyleSet::light().screen_background);

        press(&mut app, KeyCode::Char('t'));
        let dark = render(&app, 80, 50);
        assert_eq!(dark[(0, 0)].bg, StyleSet::dark().screen_background);
        for label in SLOT_LABELS {
            assert!(screen_text(&dark).contains(label));
        }
    }

    #[test]
    fn test_small_terminal_keeps_focus_visible() {
        let mut app = app();
        press(&mut app, KeyCode::End);
        let text = screen_text(&render(&app, 80, 16));
        assert!(text.contains("3:30 PM - 4:30 PM"));
        assert!(!text.contains("8:00 AM - 9:00 AM"));
    }

    #[test]
    fn test_long_entry_wraps_inside_its_row() {
        let mut app = app();
        let entry = "Quarterly planning review with finance and product leads, ENDMARK";
        assert_eq!(entry.chars().count(), 65);
        press(&mut app, KeyCode::Enter);
        for c in entry.chars() {
            press(&mut app, KeyCode::Char(c));
        }

        let mut terminal = Terminal::new(TestBackend::new(80, 50)).unwrap();
        terminal.draw(|f| draw(f, &app)).unwrap();
        let buf = terminal.backend().buffer().clone();
        let text = screen_text(&buf);
        assert!(text.contains("Quarterly planning"));
        assert!(text.contains("ENDMARK"));

        // Cursor sits right after the tail on the wrapped line
        let cursor = terminal.get_cursor_position().unwrap();
        let cells: Vec<&str> = (0..buf.area.width)
            .map(|x| buf[(x, cursor.y)].symbol())
            .collect();
        let tail_end = (0..cells.len())
            .find(|&x| cells[x..].concat().starts_with("ENDMARK"))
            .map(|x| x + "ENDMARK".len());
        assert_eq!(tail_end, Some(cursor.x as usize));

        // Leaving edit mode keeps the whole entry on screen
        press(&mut app, KeyCode::Esc);
        assert!(screen_text(&render(&app, 80, 50)).contains("ENDMARK"));
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        render(&app(), 10, 4);
        render(&app(), 1, 1);
    }
}
