//! Configuration file support for markweave.
//!
//! ```toml
//! [extensions]
//! preset = "common"
//! hard_line_break = true
//! ```
//!
//! The preset (if any) is the starting set; each `true` flag adds to it.

use markweave_engine::Extensions;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Names accepted for `extensions.preset`.
pub const PRESETS: &[&str] = &["basic", "common"];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Failed to parse config: {0}")]
    InvalidToml(#[from] toml::de::Error),

    #[error("Unknown extensions preset {preset:?}, expected one of {PRESETS:?}")]
    UnknownPreset { preset: String },

    #[error("Failed to write config file at {config_path}: {source}")]
    ConfigWriteError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to serialize config: {0}")]
    ConfigSerializeError(#[from] toml::ser::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub extensions: ExtensionsConfig,
}

/// One switch per extension flag, on top of an optional preset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtensionsConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preset: Option<String>,
    pub no_intra_emphasis: bool,
    pub tables: bool,
    pub fenced_code: bool,
    pub autolink: bool,
    pub strikethrough: bool,
    pub lax_html_blocks: bool,
    pub space_headers: bool,
    pub hard_line_break: bool,
    pub no_expand_tabs: bool,
    pub tab_size_eight: bool,
}

impl ExtensionsConfig {
    fn flags(&self) -> [(bool, Extensions); 10] {
        [
            (self.no_intra_emphasis, Extensions::NO_INTRA_EMPHASIS),
            (self.tables, Extensions::TABLES),
            (self.fenced_code, Extensions::FENCED_CODE),
            (self.autolink, Extensions::AUTOLINK),
            (self.strikethrough, Extensions::STRIKETHROUGH),
            (self.lax_html_blocks, Extensions::LAX_HTML_BLOCKS),
            (self.space_headers, Extensions::SPACE_HEADERS),
            (self.hard_line_break, Extensions::HARD_LINE_BREAK),
            (self.no_expand_tabs, Extensions::NO_EXPAND_TABS),
            (self.tab_size_eight, Extensions::TAB_SIZE_EIGHT),
        ]
    }
}

fn preset_extensions(name: &str) -> Option<Extensions> {
    match name {
        "basic" => Some(Extensions::basic()),
        "common" => Some(Extensions::common()),
        _ => None,
    }
}

impl Config {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        let config_path = Self::expand_path(config_path).unwrap_or_else(|| config_path.to_path_buf());
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.clone(),
                source,
            }
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.clone(),
                source,
            })?;
        config.validate()?;

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> Result<(), ConfigError> {
        let config_path = config_path.as_ref();
        let write_error = |source| ConfigError::ConfigWriteError {
            config_path: config_path.to_path_buf(),
            source,
        };
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).map_err(write_error)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content).map_err(write_error)
    }

    pub fn save(&self) -> Result<(), ConfigError> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/markweave");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// The extension set this configuration selects.
    ///
    /// An unrecognised preset contributes nothing; loading rejects one.
    pub fn extensions(&self) -> Extensions {
        let base = self
            .extensions
            .preset
            .as_deref()
            .and_then(preset_extensions)
            .unwrap_or_else(Extensions::empty);
        self.extensions
            .flags()
            .into_iter()
            .filter(|(on, _)| *on)
            .fold(base, |acc, (_, flag)| acc | flag)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        match self.extensions.preset.as_deref() {
            Some(preset) if preset_extensions(preset).is_none() => Err(ConfigError::UnknownPreset {
                preset: preset.to_string(),
            }),
            _ => Ok(()),
        }
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}
