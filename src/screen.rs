//! Diary screen state
//!
//! Owns everything the form shows:
//! - the date label, computed once per mount
//! - eight slot descriptions, reset to empty on every mount
//! - the light/dark theme flag
//!
//! Entries are copy-on-write: each update builds a new array and swaps the
//! handle, so a snapshot taken earlier keeps seeing the old contents.

use chrono::NaiveDate;
use std::sync::Arc;

use crate::date::{self, DateLocale};
use crate::error::{DiaryError, DiaryResult};

/// Number of time slots on a diary page
pub const SLOT_COUNT: usize = 8;

/// Slots shown before the interval banner
pub const SLOTS_BEFORE_INTERVAL: usize = 4;

/// Time-slot labels, index-aligned with the entries
pub const SLOT_LABELS: [&str; SLOT_COUNT] = [
    "8:00 AM - 9:00 AM",
    "9:00 AM - 10:00 AM",
    "10:00 AM - 11:00 AM",
    "11:00 AM - 12:00 PM",
    // 30 minute break here
    "12:30 PM - 1:30 PM",
    "1:30 PM - 2:30 PM",
    "2:30 PM - 3:30 PM",
    "3:30 PM - 4:30 PM",
];

/// Display mode of the screen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn from_dark(dark: bool) -> Self {
        if dark {
            Self::Dark
        } else {
            Self::Light
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// The other mode
    pub fn toggled(self) -> Self {
        Self::from_dark(!self.is_dark())
    }

    /// Text shown next to the theme switch
    pub fn label(self) -> &'static str {
        match self {
            Self::Light => "Light Mode",
            Self::Dark => "Dark Mode",
        }
    }
}

/// Immutable snapshot of the eight slot descriptions
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiaryEntries {
    slots: Arc<[String; SLOT_COUNT]>,
}

impl DiaryEntries {
    /// Eight empty entries
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.slots.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.slots.iter().map(String::as_str)
    }

    /// A new snapshot with `index` replaced; `self` is left untouched
    pub fn with_entry(&self, index: usize, text: String) -> DiaryResult<Self> {
        if index >= SLOT_COUNT {
            return Err(DiaryError::SlotOutOfRange { index });
        }
        let mut slots = (*self.slots).clone();
        slots[index] = text;
        Ok(Self {
            slots: Arc::new(slots),
        })
    }
}

/// Screen controller: date label, entries and theme mode
#[derive(Debug, Clone)]
pub struct Screen {
    date_label: String,
    entries: DiaryEntries,
    theme_mode: ThemeMode,
    locale: DateLocale,
}

impl Screen {
    /// Create and activate a screen for today
    pub fn mount(locale: DateLocale) -> Self {
        let mut screen = Self::unmounted(locale);
        screen.initialize();
        screen
    }

    /// Create and activate a screen for a fixed date
    pub fn mount_on(locale: DateLocale, date: NaiveDate) -> Self {
        let mut screen = Self::unmounted(locale);
        screen.initialize_on(date);
        screen
    }

    fn unmounted(locale: DateLocale) -> Self {
        Self {
            date_label: String::new(),
            entries: DiaryEntries::empty(),
            theme_mode: ThemeMode::default(),
            locale,
        }
    }

    /// Activation hook: compute today's label and start a fresh page
    pub fn initialize(&mut self) {
        self.date_label = date::today_label(&self.locale);
        self.entries = DiaryEntries::empty();
        tracing::info!("Mounted diary page for {}", self.date_label);
    }

    /// Same as [`Screen::initialize`] with the date supplied by the caller
    pub fn initialize_on(&mut self, date: NaiveDate) {
        self.date_label = self.locale.format(date);
        self.entries = DiaryEntries::empty();
        tracing::info!("Mounted diary page for {}", self.date_label);
    }

    /// Replace the description of one slot.
    ///
    /// Fails for an index outside `0..SLOT_COUNT`, leaving state unchanged.
    pub fn set_entry(&mut self, index: usize, text: impl Into<String>) -> DiaryResult<()> {
        self.entries = self.entries.with_entry(index, text.into())?;
        Ok(())
    }

    /// Set the theme from the switch value (`true` = dark)
    pub fn toggle_theme(&mut self, dark: bool) {
        let mode = ThemeMode::from_dark(dark);
        if mode != self.theme_mode {
            tracing::debug!("Theme switched to {:?}", mode);
        }
        self.theme_mode = mode;
    }

    pub fn date_label(&self) -> &str {
        &self.date_label
    }

    /// Description of one slot, `None` for an out-of-range index
    pub fn entry(&self, index: usize) -> Option<&str> {
        self.entries.get(index)
    }

    /// Snapshot of all entries
    pub fn entries(&self) -> DiaryEntries {
        self.entries.clone()
    }

    pub fn theme_mode(&self) -> ThemeMode {
        self.theme_mode
    }

    pub fn is_dark(&self) -> bool {
        self.theme_mode.is_dark()
    }

    pub fn locale(&self) -> &DateLocale {
        &self.locale
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screen() -> Screen {
        Screen::mount_on(
            DateLocale::default(),
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        )
    }

    #[test]
    fn test_mount_state() {
        let s = screen();
        assert_eq!(s.date_label(), "Mon, Jan 1, 2024");
        assert_eq!(s.entries().iter().count(), SLOT_COUNT);
        assert!(s.entries().iter().all(str::is_empty));
        assert_eq!(s.theme_mode(), ThemeMode::Light);
    }

    #[test]
    fn test_set_entry_reads_back_without_aliasing() {
        for index in 0..SLOT_COUNT {
            let mut s = screen();
            s.set_entry(index, "line one\nline two").unwrap();
            for other in 0..SLOT_COUNT {
                let expected = if other == index { "line one\nline two" } else { "" };
                assert_eq!(s.entry(other), Some(expected));
            }
        }
    }

    #[test]
    fn test_standup_scenario() {
        let mut s = screen();
        s.set_entry(0, "Standup meeting").unwrap();
        assert_eq!(s.entry(0), Some("Standup meeting"));
        assert_eq!(s.entry(1), Some(""));
    }

    #[test]
    fn test_overwrite_with_empty() {
        let mut s = screen();
        s.set_entry(3, "Lunch prep").unwrap();
        s.set_entry(3, "").unwrap();
        assert_eq!(s.entry(3), Some(""));
    }

    #[test]
    fn test_out_of_range_is_rejected() {
        let mut s = screen();
        s.set_entry(2, "kept").unwrap();
        let before = s.entries();

        assert_eq!(
            s.set_entry(SLOT_COUNT, "nope"),
            Err(DiaryError::SlotOutOfRange { index: SLOT_COUNT })
        );
        assert_eq!(s.entries(), before);
        assert_eq!(s.entry(SLOT_COUNT), None);
    }

    #[test]
    fn test_snapshot_not_affected_by_later_update() {
        let mut s = screen();
        s.set_entry(5, "Code review").unwrap();
        let snapshot = s.entries();

        s.set_entry(5, "Design sync").unwrap();
        assert_eq!(snapshot.get(5), Some("Code review"));
        assert_eq!(s.entry(5), Some("Design sync"));
    }

    #[test]
    fn test_initialize_resets_entries() {
        let mut s = screen();
        for i in 0..SLOT_COUNT {
            s.set_entry(i, format!("entry {}", i)).unwrap();
        }

        s.initialize_on(NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
        assert_eq!(s.date_label(), "Tue, Jan 2, 2024");
        assert_eq!(s.entries().iter().count(), SLOT_COUNT);
        assert!(s.entries().iter().all(str::is_empty));

        // Idempotent
        s.initialize_on(NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
        assert_eq!(s.entries(), DiaryEntries::empty());
    }

    #[test]
    fn test_remount_drops_entries() {
        let mut s = screen();
        s.set_entry(0, "Standup meeting").unwrap();
        s.initialize();
        assert_eq!(s.entry(0), Some(""));
        assert!(!s.date_label().is_empty());
    }

    #[test]
    fn test_toggle_theme_idempotent() {
        let mut s = screen();
        s.toggle_theme(true);
        s.toggle_theme(true);
        assert!(s.is_dark());
        s.toggle_theme(false);
        assert_eq!(s.theme_mode(), ThemeMode::Light);
    }

    #[test]
    fn test_theme_mode_labels() {
        assert_eq!(ThemeMode::Light.label(), "Light Mode");
        assert_eq!(ThemeMode::Dark.label(), "Dark Mode");
        assert_eq!(ThemeMode::Light.toggled().toggled(), ThemeMode::Light);
    }

    #[test]
    fn test_slot_labels_split_around_break() {
        assert_eq!(SLOT_LABELS[SLOTS_BEFORE_INTERVAL - 1], "11:00 AM - 12:00 PM");
        assert_eq!(SLOT_LABELS[SLOTS_BEFORE_INTERVAL], "12:30 PM - 1:30 PM");
    }
}
