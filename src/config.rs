use std::path::Path;

use crate::error::ConfigError;

/// Search tuning.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Plies searched per computer move.
    pub depth: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig { depth: 4 }
    }
}

/// Board display symbols.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub human_chip: char,
    pub computer_chip: char,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            human_chip: 'P',
            computer_chip: 'C',
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub search: SearchConfig,
    pub display: DisplayConfig,
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

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.search.depth == 0 {
            return Err(ConfigError::Validation("search.depth must be > 0".into()));
        }
        if self.search.depth > 12 {
            return Err(ConfigError::Validation(
                "search.depth must be <= 12".into(),
            ));
        }
        if self.display.human_chip == self.display.computer_chip {
            return Err(ConfigError::Validation(
                "display chips must be distinct".into(),
            ));
        }
        for chip in [self.display.human_chip, self.display.computer_chip] {
            if chip == ' ' || chip == '_' || chip == '|' {
                return Err(ConfigError::Validation(format!(
                    "display chip {chip:?} collides with board markup"
                )));
            }
        }
        Ok(())
    }
}
