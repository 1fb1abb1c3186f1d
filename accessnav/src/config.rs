//! Engine configuration.
//!
//! Configuration is usually stored in a TOML file next to the host's own
//! settings. Every field has a default, so an empty file is valid.
//!
//! # Configuration File Format
//!
//! ```toml
//! cues = true
//!
//! [announce]
//! position = true
//! hints = true
//! separator = ", "
//!
//! [messages]
//! nothing_available = "Nothing available"
//! not_available = "Not available"
//! subject_lost = "No longer available"
//! ```

use std::{fs, path::Path};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Root engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(default)]
pub struct NavConfig {
    /// Whether audio cues are played at all.
    pub cues: bool,
    /// Announcement verbosity.
    pub announce: AnnounceConfig,
    /// Fixed spoken messages.
    pub messages: Messages,
}

/// Which optional lines an announcement carries.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(default)]
pub struct AnnounceConfig {
    /// Speak the "Setting 2 of 3" position line.
    pub position: bool,
    /// Speak the per-level call-to-action line.
    pub hints: bool,
    /// Separator used when a list of facts is spoken on one line.
    pub separator: String,
}

/// Messages spoken by the engine itself rather than by a provider.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(default)]
pub struct Messages {
    /// A level would be empty.
    pub nothing_available: String,
    /// A catalog entry has no eligible target.
    pub not_available: String,
    /// The subject of the menu disappeared while the menu was open.
    pub subject_lost: String,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            cues: true,
            announce: AnnounceConfig::default(),
            messages: Messages::default(),
        }
    }
}

impl Default for AnnounceConfig {
    fn default() -> Self {
        Self {
            position: true,
            hints: true,
            separator: ", ".to_string(),
        }
    }
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            nothing_available: "Nothing available".to_string(),
            not_available: "Not available".to_string(),
            subject_lost: "No longer available".to_string(),
        }
    }
}

impl NavConfig {
    /// Parse a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns the TOML error when the text is malformed or a field has the
    /// wrong type.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] when the file cannot be read and
    /// [`ConfigError::Parse`] when it is not a valid configuration.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("loaded navigation config from {}", path.display());
        Ok(config)
    }

    /// JSON Schema of the configuration file.
    pub fn json_schema() -> serde_json::Value {
        serde_json::to_value(schemars::schema_for!(NavConfig)).unwrap_or_default()
    }
}
