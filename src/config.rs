use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::screen::ThemeMode;
use crate::ui::layout::DiaryLayout;
use crate::ui::slot_row::DEFAULT_PLACEHOLDER;
use crate::ui::theme::{ColorMode, StyleSet};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Locale for the header date, e.g. "en_GB". Environment when unset.
    pub locale: Option<String>,
    pub appearance: AppearanceConfig,
    pub layout: LayoutConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppearanceConfig {
    /// Header title
    pub title: String,
    /// Shown in an empty slot
    pub placeholder: String,
    /// "auto", "truecolor" or "256"
    pub color_mode: ColorMode,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Tallest a slot row may grow to, in lines including borders
    pub max_row_height: u16,
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        Self {
            title: "Daily Diary".to_string(),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            color_mode: ColorMode::default(),
        }
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self { max_row_height: 6 }
    }
}

impl Config {
    /// `$XDG_CONFIG_HOME/daily-diary/config.toml`, or `~/.config/...`
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
            .unwrap_or_else(|| PathBuf::from("."))
            .join("daily-diary")
            .join("config.toml")
    }

    pub fn load(path: &str) -> Result<Self> {
        let expanded = shellexpand::tilde(path);
        let path = Path::new(expanded.as_ref());

        if path.exists() {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            tracing::info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    pub fn diary_layout(&self) -> DiaryLayout {
        DiaryLayout::new(self.layout.max_row_height)
    }

    /// Colors for a theme mode, reduced to 256 colors if needed
    pub fn styles(&self, mode: ThemeMode) -> StyleSet {
        self.appearance.color_mode.styles(mode)
    }
}
