use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use unicode_segmentation::UnicodeSegmentation;

use crate::config::Config;
use crate::date::DateLocale;
use crate::error::DiaryResult;
use crate::screen::{Screen, SLOT_COUNT};
use crate::ui::layout::{row_of_slot, DiaryLayout, Platform};
use crate::ui::theme::StyleSet;

/// Control that receives keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// The light/dark switch
    ThemeSwitch,
    /// Description input of slot `i`
    Slot(usize),
}

impl Focus {
    /// Move down, stopping at the last slot
    pub fn next(self) -> Self {
        match self {
            Focus::ThemeSwitch => Focus::Slot(0),
            Focus::Slot(i) => Focus::Slot((i + 1).min(SLOT_COUNT - 1)),
        }
    }

    /// Move up, stopping at the switch
    pub fn previous(self) -> Self {
        match self {
            Focus::ThemeSwitch | Focus::Slot(0) => Focus::ThemeSwitch,
            Focus::Slot(i) => Focus::Slot(i - 1),
        }
    }

    /// Tab navigation (next with wrap)
    pub fn cycle_next(self) -> Self {
        match self {
            Focus::Slot(i) if i + 1 >= SLOT_COUNT => Focus::ThemeSwitch,
            other => other.next(),
        }
    }

    /// Shift+Tab navigation (previous with wrap)
    pub fn cycle_previous(self) -> Self {
        match self {
            Focus::ThemeSwitch => Focus::Slot(SLOT_COUNT - 1),
            other => other.previous(),
        }
    }
}

/// What the event loop should do after a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Continue,
    Quit,
}

/// Application state
pub struct App {
    /// The diary page
    screen: Screen,
    /// Focused control
    focus: Focus,
    /// Whether keys go into the focused slot's text
    editing: bool,
    /// Configuration
    config: Config,
    /// Locale the page was mounted with, reused on remount
    locale: DateLocale,
    /// Page date when not today
    date: Option<NaiveDate>,
    /// Host platform for top padding
    platform: Platform,
}

impl App {
    /// Mount a page for `date`, or for today when `None`
    pub fn new(
        config: Config,
        locale: DateLocale,
        date: Option<NaiveDate>,
        platform: Platform,
    ) -> Self {
        let mut app = Self::with_screen(mount(locale, date), config, platform);
        app.date = date;
        app
    }

    /// Build around an already mounted screen
    pub fn with_screen(screen: Screen, config: Config, platform: Platform) -> Self {
        Self {
            locale: *screen.locale(),
            date: None,
            screen,
            focus: Focus::Slot(0),
            editing: false,
            config,
            platform,
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    pub fn diary_layout(&self) -> DiaryLayout {
        self.config.diary_layout()
    }

    /// Colors for the current theme mode
    pub fn styles(&self) -> StyleSet {
        self.config.styles(self.screen.theme_mode())
    }

    /// List row holding the focus; the switch sits above row 0
    pub fn focused_row(&self) -> Option<usize> {
        match self.focus {
            Focus::Slot(i) => Some(row_of_slot(i)),
            Focus::ThemeSwitch => None,
        }
    }

    /// Flip the theme switch
    pub fn toggle_theme(&mut self) {
        let next = self.screen.theme_mode().toggled();
        self.screen.toggle_theme(next.is_dark());
    }

    /// Throw the page away and mount a fresh one
    pub fn remount(&mut self) {
        self.screen = mount(self.locale, self.date);
        self.focus = Focus::Slot(0);
        self.editing = false;
    }

    /// Dispatch one key press
    pub fn handle_key(&mut self, key: KeyEvent) -> DiaryResult<KeyOutcome> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Ok(KeyOutcome::Quit);
        }

        if self.editing {
            self.handle_editing_key(key)?;
            return Ok(KeyOutcome::Continue);
        }

        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => return Ok(KeyOutcome::Quit),
            KeyCode::Up | KeyCode::Char('k') => self.focus = self.focus.previous(),
            KeyCode::Down | KeyCode::Char('j') => self.focus = self.focus.next(),
            KeyCode::Tab => self.focus = self.focus.cycle_next(),
            KeyCode::BackTab => self.focus = self.focus.cycle_previous(),
            KeyCode::Home => self.focus = Focus::ThemeSwitch,
            KeyCode::End => self.focus = Focus::Slot(SLOT_COUNT - 1),
            KeyCode::Char('t') => self.toggle_theme(),
            KeyCode::Char('n') => self.remount(),
            KeyCode::Enter | KeyCode::Char(' ') if self.focus == Focus::ThemeSwitch => {
                self.toggle_theme();
            }
            KeyCode::Enter | KeyCode::Char('i') => {
                if let Focus::Slot(_) = self.focus {
                    self.editing = true;
                }
            }
            _ => {}
        }
        Ok(KeyOutcome::Continue)
    }

    fn handle_editing_key(&mut self, key: KeyEvent) -> DiaryResult<()> {
        let Focus::Slot(slot) = self.focus else {
            self.editing = false;
            return Ok(());
        };

        match key.code {
            KeyCode::Esc | KeyCode::Tab => self.editing = false,
            KeyCode::Enter => self.edit(slot, |text| text.push('\n'))?,
            KeyCode::Backspace => self.edit(slot, pop_grapheme)?,
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.edit(slot, |text| text.push(c))?
            }
            _ => {}
        }
        Ok(())
    }

    /// Apply `change` to a copy of the slot text and store it back
    fn edit(&mut self, slot: usize, change: impl FnOnce(&mut String)) -> DiaryResult<()> {
        let mut text = self.screen.entry(slot).unwrap_or_default().to_string();
        change(&mut text);
        self.screen.set_entry(slot, text)
    }
}

/// Drop the last user-perceived character, combining marks included
fn pop_grapheme(text: &mut String) {
    if let Some((start, _)) = text.grapheme_indices(true).next_back() {
        text.truncate(start);
    }
}

fn mount(locale: DateLocale, date: Option<NaiveDate>) -> Screen {
    match date {
        Some(date) => Screen::mount_on(locale, date),
        None => Screen::mount(locale),
    }
}
