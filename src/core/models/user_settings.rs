use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::global_constants;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeMode::Dark => write!(f, "Dark"),
            ThemeMode::Light => write!(f, "Light"),
        }
    }
}

fn default_search_url_template() -> String {
    global_constants::DEFAULT_SEARCH_URL_TEMPLATE.to_string()
}

fn default_page_size() -> usize {
    global_constants::DEFAULT_PAGE_SIZE
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserSettings {
    #[serde(default = "default_search_url_template")]
    pub search_url_template: String,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default)]
    pub theme_mode: ThemeMode,
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            search_url_template: default_search_url_template(),
            page_size: default_page_size(),
            theme_mode: ThemeMode::default(),
            request_timeout_secs: None,
        }
    }
}

impl UserSettings {
    pub fn load() -> anyhow::Result<Self> {
        let settings_path = Self::get_settings_file_path()?;
        Self::load_from(&settings_path)
    }

    pub fn load_from(settings_path: &Path) -> anyhow::Result<Self> {
        if !settings_path.exists() {
            log::info!("[SETTINGS] No settings file found, using defaults");
            let default_settings = Self::default();
            default_settings.save_to(settings_path)?;
            return Ok(default_settings);
        }

        let contents = std::fs::read_to_string(settings_path)?;
        let settings: UserSettings = serde_json::from_str(&contents)?;

        log::info!("[SETTINGS] Loaded settings from {:?}", settings_path);
        log::debug!(
            "[SETTINGS] Search URL template: {}",
            settings.search_url_template
        );
        log::debug!("[SETTINGS] Page size: {}", settings.page_size);

        Ok(settings)
    }

    pub fn save_to(&self, settings_path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = settings_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(settings_path, contents)?;

        log::info!("[SETTINGS] Saved settings to {:?}", settings_path);
        Ok(())
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    fn get_settings_file_path() -> anyhow::Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?
            .join(global_constants::SETTINGS_DIRECTORY_NAME);

        Ok(config_dir.join(global_constants::SETTINGS_FILE_NAME))
    }
}
