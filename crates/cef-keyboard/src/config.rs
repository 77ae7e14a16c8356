//! TOML-based translator configuration.
//!
//! Everything the translator used to infer at runtime (which windowing
//! backend is active, which script releases the on-screen keyboard) is set
//! here and injected at construction time.
//!
//! ```toml
//! separate_text_input = true
//! key_down_allow_list = [8, 27]
//! escape_script = "__kivy__on_escape()"
//! alt_release = "symmetric"
//! log_events = true
//! ```
//!
//! # Serde default values
//!
//! Every field has a `#[serde(default = "...")]` helper, so an empty file or a
//! file written by an older version still yields a complete configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::modifiers::AltReleasePolicy;
use crate::keymap::host;

/// Error type for configuration file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A file system I/O error occurred.
    #[error("I/O error accessing config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed.
    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// The config could not be serialized to TOML.
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Settings for one [`InputTranslator`](crate::InputTranslator).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TranslatorConfig {
    /// The host delivers decoded characters through separate text-input
    /// notifications (SDL2-style windowing backends).  When set, the gated
    /// key-down entry point drops every code not in `key_down_allow_list`.
    #[serde(default)]
    pub separate_text_input: bool,
    /// Host codes still accepted by the gated key-down entry point.
    #[serde(default = "default_key_down_allow_list")]
    pub key_down_allow_list: Vec<u32>,
    /// Script executed in the focused frame when Escape is pressed.
    #[serde(default = "default_escape_script")]
    pub escape_script: String,
    /// How held Alt keys contribute to key-up flags.
    #[serde(default)]
    pub alt_release: AltReleasePolicy,
    /// Log every emitted synthetic event at `debug` level.
    #[serde(default = "default_true")]
    pub log_events: bool,
}

fn default_key_down_allow_list() -> Vec<u32> {
    host::TEXT_INPUT_KEY_DOWN_ALLOW_LIST.to_vec()
}
fn default_escape_script() -> String {
    "__kivy__on_escape()".to_string()
}
fn default_true() -> bool {
    true
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            separate_text_input: false,
            key_down_allow_list: default_key_down_allow_list(),
            escape_script: default_escape_script(),
            alt_release: AltReleasePolicy::default(),
            log_events: default_true(),
        }
    }
}

impl TranslatorConfig {
    /// Default configuration for a host with separate text-input delivery.
    pub fn with_separate_text_input() -> Self {
        Self {
            separate_text_input: true,
            ..Self::default()
        }
    }

    /// Parses a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the TOML is malformed.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Serializes the configuration to pretty-printed TOML.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Serialize`] if serialization fails.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Returns `true` if the gated key-down entry point forwards `host_code`.
    pub fn accepts_key_down(&self, host_code: u32) -> bool {
        !self.separate_text_input || self.key_down_allow_list.contains(&host_code)
    }
}

/// Loads a [`TranslatorConfig`] from `path`, returning the default
/// configuration if the file does not exist.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] for file-system errors other than "not found",
/// and [`ConfigError::Parse`] if the TOML is malformed.
pub fn load_config(path: &Path) -> Result<TranslatorConfig, ConfigError> {
    match std::fs::read_to_string(path) {
        Ok(content) => TranslatorConfig::from_toml_str(&content),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(TranslatorConfig::default()),
        Err(e) => Err(ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

/// Persists `config` to `path`, creating the parent directory if needed.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] for file-system failures or
/// [`ConfigError::Serialize`] if serialization fails.
pub fn save_config(path: &Path, config: &TranslatorConfig) -> Result<(), ConfigError> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(|source| ConfigError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
    }

    let content = config.to_toml_string()?;
    std::fs::write(path, content).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}
