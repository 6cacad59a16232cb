use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable overriding the page loaded into the bar.
pub const URL_ENV: &str = "HOSTBAR_URL";

/// Bar configuration, loaded from ~/.config/hostbar/config.json
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostConfig {
    pub url: String,
    /// Logical width of the bar.
    pub width: f64,
    /// Logical height of the collapsed bar.
    pub height: f64,
    /// Logical height with the settings panel open.
    pub expanded_height: f64,
    /// Distance from the top of the monitor, as a fraction of its height.
    pub top_offset_ratio: f64,
    pub always_on_top: bool,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            url: "http://localhost:5173".to_string(),
            width: 800.0,
            height: 60.0,
            expanded_height: 200.0,
            top_offset_ratio: 0.20,
            always_on_top: true,
        }
    }
}

impl HostConfig {
    /// Load config from the standard config path, falling back to defaults.
    pub fn load() -> Self {
        let mut config = Self::load_from(&config_path());
        if let Ok(url) = std::env::var(URL_ENV) {
            config.apply_url_override(&url);
        }
        config
    }

    /// Load config from `path`. Missing or unreadable files yield defaults.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match std::fs::read_to_string(path) {
            Ok(content) => match serde_json::from_str::<Self>(&content) {
                Ok(config) => return config.sanitized(),
                Err(e) => {
                    tracing::warn!("Failed to parse config {:?}: {}", path, e);
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config {:?}: {}", path, e);
            }
        }
        Self::default()
    }

    /// Save config to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    fn apply_url_override(&mut self, url: &str) {
        let url = url.trim();
        if !url.is_empty() {
            tracing::info!("Using {} from {}", url, URL_ENV);
            self.url = url.to_string();
        }
    }

    /// Replace nonsensical geometry with defaults.
    fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if self.width.is_nan() || self.width <= 0.0 {
            self.width = defaults.width;
        }
        if self.height.is_nan() || self.height <= 0.0 {
            self.height = defaults.height;
        }
        if self.expanded_height.is_nan() || self.expanded_height <= self.height {
            let fallback = defaults.expanded_height.max(self.height * 2.0);
            tracing::warn!(
                "expanded_height {} must exceed height {}; using {}",
                self.expanded_height,
                self.height,
                fallback
            );
            self.expanded_height = fallback;
        }
        self.top_offset_ratio = if self.top_offset_ratio.is_finite() {
            self.top_offset_ratio.clamp(0.0, 1.0)
        } else {
            defaults.top_offset_ratio
        };
        self
    }
}

pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("~/.config"))
        .join("hostbar")
        .join("config.json")
}
