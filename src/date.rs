//! Date label for the diary header
//!
//! Today's date is rendered once per mount as short weekday, short month,
//! day and year, ordered and named the way the active locale writes them.
//!
//! Locale resolution:
//! - explicit name (CLI flag or config)
//! - `LC_ALL`, `LC_TIME`, `LANG` (first non-empty wins)
//! - `en_US` fallback
//!
//! Locales without a dedicated pattern still get localized names through
//! chrono, written in the generic `Mon, 1 Jan 2024` order.

use chrono::{Local, Locale, NaiveDate, NaiveTime, TimeZone, Utc};

use crate::error::{DiaryError, DiaryResult};

/// Locales we carry a date pattern for: (name, chrono locale, strftime pattern)
const SUPPORTED: &[(&str, Locale, &str)] = &[
    ("en_US", Locale::en_US, "%a, %b %-d, %Y"),
    ("en_GB", Locale::en_GB, "%a, %-d %b %Y"),
    ("en_AU", Locale::en_AU, "%a, %-d %b %Y"),
    ("en_IE", Locale::en_IE, "%a, %-d %b %Y"),
    ("de_DE", Locale::de_DE, "%a, %-d. %b %Y"),
    ("fr_FR", Locale::fr_FR, "%a %-d %b %Y"),
    ("es_ES", Locale::es_ES, "%a, %-d %b %Y"),
    ("it_IT", Locale::it_IT, "%a %-d %b %Y"),
    ("nl_NL", Locale::nl_NL, "%a %-d %b %Y"),
    ("pt_BR", Locale::pt_BR, "%a, %-d de %b de %Y"),
    ("ja_JP", Locale::ja_JP, "%Y年%-m月%-d日(%a)"),
];

/// Pattern for chrono locales that have no entry in `SUPPORTED`
const GENERIC_PATTERN: &str = "%a, %-d %b %Y";

/// Environment variables consulted for the time locale, in priority order
const LOCALE_ENV_VARS: [&str; 3] = ["LC_ALL", "LC_TIME", "LANG"];

/// A locale together with the date pattern used for the header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateLocale {
    locale: Locale,
    pattern: &'static str,
}

impl Default for DateLocale {
    fn default() -> Self {
        let (_, locale, pattern) = SUPPORTED[0];
        Self { locale, pattern }
    }
}

impl DateLocale {
    /// Look up a locale by POSIX-style name.
    ///
    /// Accepts `en_US`, `en-US`, `en_US.UTF-8` and `de_DE@euro` forms.
    /// Any other locale chrono knows uses the generic pattern.
    pub fn parse(name: &str) -> DiaryResult<Self> {
        let normalized = normalize(name);
        if let Some(&(_, locale, pattern)) = SUPPORTED.iter().find(|(n, _, _)| *n == normalized) {
            return Ok(Self { locale, pattern });
        }
        Locale::try_from(normalized.as_str())
            .map(|locale| Self {
                locale,
                pattern: GENERIC_PATTERN,
            })
            .map_err(|_| DiaryError::UnknownLocale(name.to_string()))
    }

    /// Resolve the locale to use, preferring an explicit name over the
    /// environment. Never fails; unknown names fall back to `en_US`.
    pub fn resolve(explicit: Option<&str>) -> Self {
        let from_env = LOCALE_ENV_VARS
            .iter()
            .map(|var| std::env::var(var).ok());
        resolve_from(explicit, from_env)
    }

    pub fn name(&self) -> String {
        format!("{:?}", self.locale)
    }

    /// Format a calendar date for the header
    pub fn format(&self, date: NaiveDate) -> String {
        let midnight = Utc.from_utc_datetime(&date.and_time(NaiveTime::default()));
        midnight
            .format_localized(self.pattern, self.locale)
            .to_string()
    }
}

/// Pick the first usable locale from an explicit name, then environment values
fn resolve_from<I>(explicit: Option<&str>, env_values: I) -> DateLocale
where
    I: IntoIterator<Item = Option<String>>,
{
    if let Some(name) = explicit {
        match DateLocale::parse(name) {
            Ok(locale) => return locale,
            Err(e) => tracing::warn!("{}, falling back to environment", e),
        }
    }

    // The first non-empty variable decides, as with POSIX setlocale
    let first = env_values
        .into_iter()
        .flatten()
        .find(|value| !value.is_empty());

    match first {
        Some(value) => DateLocale::parse(&value).unwrap_or_else(|_| {
            tracing::debug!("Unknown locale {:?}, using en_US", value);
            DateLocale::default()
        }),
        None => DateLocale::default(),
    }
}

/// Strip encoding and modifier suffixes, unify the separator and case
/// (`ja-jp.utf8` -> `ja_JP`)
fn normalize(name: &str) -> String {
    let base = name
        .split(['.', '@'])
        .next()
        .unwrap_or_default()
        .trim();
    let mut parts = base.split(['_', '-']);
    let language = parts.next().unwrap_or_default().to_ascii_lowercase();
    parts.fold(language, |acc, part| {
        format!("{}_{}", acc, part.to_ascii_uppercase())
    })
}

/// The date label shown in the header for today
pub fn today_label(locale: &DateLocale) -> String {
    locale.format(Local::now().date_naive())
}
