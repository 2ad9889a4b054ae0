use chrono::format::{Item, StrftimeItems};
use review_models::SortMode;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// How the review list and statistics are presented
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DisplayConfig {
    /// Sort order applied when a session starts
    #[serde(default = "default_sort_mode")]
    pub default_sort: SortMode,

    /// chrono strftime pattern for the card date
    #[serde(default = "default_date_format")]
    pub date_format: String,

    #[serde(default = "default_filled_glyph")]
    pub filled_glyph: String,

    #[serde(default = "default_empty_glyph")]
    pub empty_glyph: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Unset means JSON whenever stdout is not a terminal
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub json: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

fn default_sort_mode() -> SortMode {
    SortMode::Newest
}

fn default_date_format() -> String {
    "%B %-d, %Y".to_string() // October 16, 2026
}

fn default_filled_glyph() -> String {
    "★".to_string()
}

fn default_empty_glyph() -> String {
    "☆".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            default_sort: default_sort_mode(),
            date_format: default_date_format(),
            filled_glyph: default_filled_glyph(),
            empty_glyph: default_empty_glyph(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: None,
            file: None,
        }
    }
}

impl LoggingConfig {
    /// Resolve `json` against the current stdout
    pub fn json_enabled(&self) -> bool {
        use std::io::IsTerminal;
        self.json.unwrap_or_else(|| !std::io::stdout().is_terminal())
    }
}

impl Config {
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load the config at `path`, falling back to defaults when the file does not exist
    pub fn load_or_default(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let config = Self::load_from_file(path)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save_to_file(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.display.filled_glyph.is_empty() {
            return Err(anyhow::anyhow!("display.filled_glyph cannot be empty"));
        }
        if self.display.empty_glyph.is_empty() {
            return Err(anyhow::anyhow!("display.empty_glyph cannot be empty"));
        }
        if self.display.date_format.trim().is_empty() {
            return Err(anyhow::anyhow!("display.date_format cannot be empty"));
        }
        if StrftimeItems::new(&self.display.date_format).any(|item| matches!(item, Item::Error)) {
            return Err(anyhow::anyhow!(
                "display.date_format is not a valid strftime pattern: {}",
                self.display.date_format
            ));
        }

        let valid_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_levels.contains(&self.logging.level.to_lowercase().as_str()) {
            return Err(anyhow::anyhow!("Invalid logging.level: {}", self.logging.level));
        }

        Ok(())
    }
}
