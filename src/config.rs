use std::path::Path;

use crate::error::ConfigError;

/// Top-level application configuration, loadable from TOML.
///
/// Board dimensions and the win length are compile-time constants and
/// deliberately absent here; only presentation concerns are tunable.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub display: DisplayConfig,
    pub input: InputConfig,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Label shown for the first player
    pub red_label: String,
    /// Label shown for the second player
    pub blue_label: String,
    /// Highlight the four winning cells when the game is decided
    pub highlight_wins: bool,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// How long to wait for a key event per loop iteration
    pub poll_interval_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            display: DisplayConfig::default(),
            input: InputConfig::default(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            red_label: "Red".to_string(),
            blue_label: "Blue".to_string(),
            highlight_wins: true,
        }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        InputConfig {
            poll_interval_ms: 100,
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if
    /// the file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            eprintln!(
                "Warning: config file '{}' not found, using defaults",
                path.display()
            );
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.display.red_label.trim().is_empty() {
            return Err(ConfigError::Validation(
                "display.red_label must not be empty".into(),
            ));
        }
        if self.display.blue_label.trim().is_empty() {
            return Err(ConfigError::Validation(
                "display.blue_label must not be empty".into(),
            ));
        }
        if self.display.red_label == self.display.blue_label {
            return Err(ConfigError::Validation(
                "display labels must differ".into(),
            ));
        }
        if self.input.poll_interval_ms == 0 {
            return Err(ConfigError::Validation(
                "input.poll_interval_ms must be > 0".into(),
            ));
        }
        Ok(())
    }
}
