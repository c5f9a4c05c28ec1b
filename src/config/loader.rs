use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::SliceManifest;

/// Errors that can occur when loading a slice manifest.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read manifest file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// `path` is `None` when the manifest came from a string
    #[error("Failed to parse manifest{}: {source}", origin(.path.as_deref()))]
    ParseError {
        path: Option<PathBuf>,
        #[source]
        source: toml::de::Error,
    },

    #[error("Manifest validation failed: {message}")]
    ValidationError { message: String },
}

fn origin(path: Option<&Path>) -> String {
    path.map(|p| format!(" file '{}'", p.display())).unwrap_or_default()
}

impl SliceManifest {
    /// Parses and validates a manifest from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let manifest: SliceManifest =
            toml::from_str(content).map_err(|e| ConfigError::ParseError {
                path: None,
                source: e,
            })?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Loads a manifest from a file.
    ///
    /// - Returns an error if reading, parsing, or validation fails.
    /// - A missing file is a read error; there is no implicit default slice.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let manifest: SliceManifest =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: Some(path.to_path_buf()),
                source: e,
            })?;

        manifest.validate()?;
        tracing::debug!(slice = %manifest.name, path = %path.display(), "Loaded slice manifest");
        Ok(manifest)
    }

    /// Validates the manifest.
    ///
    /// Checks:
    /// - The name does not contain `/`, which separates namespace from case
    /// - Every type override is non-empty
    /// - No two cases are overridden to the same action type
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.name.contains('/') {
            return Err(ConfigError::ValidationError {
                message: format!("Slice name '{}' must not contain '/'", self.name),
            });
        }

        let mut claimed: BTreeMap<&str, &str> = BTreeMap::new();
        for (case, action_type) in &self.type_overrides {
            if action_type.is_empty() {
                return Err(ConfigError::ValidationError {
                    message: format!("Type override for case '{}' is empty", case),
                });
            }
            if let Some(other) = claimed.insert(action_type, case) {
                return Err(ConfigError::ValidationError {
                    message: format!(
                        "Cases '{}' and '{}' are both overridden to '{}'",
                        other, case, action_type
                    ),
                });
            }
        }

        Ok(())
    }
}
