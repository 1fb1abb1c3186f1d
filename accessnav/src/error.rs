use std::path::PathBuf;

/// A domain action was refused.
///
/// The reason is spoken to the user as-is, so it must read as a sentence
/// ("Already first in the queue"), not as a diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{reason}")]
pub struct ApplyError {
    reason: String,
}

impl ApplyError {
    /// Create an error carrying a user-presentable reason.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    /// The user-presentable reason.
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

/// Failure loading a [`NavConfig`](crate::NavConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The file is not valid TOML or does not match the expected shape.
    #[error("invalid config {}: {}", .path.display(), .source)]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// An action name that is not one of the four logical actions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown action `{0}`, expected one of: up, down, enter, esc")]
pub struct ParseActionError(pub String);
