//! Upload task configuration
//!
//! Describes one distribution upload: which app it targets and which
//! artifacts on the agent belong to it.

use std::path::PathBuf;

use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::{Error, NormalizedPath, Result, io};

/// Default file name looked up by the CLI.
pub const DEFAULT_CONFIG_FILE: &str = "appcenter.toml";

/// Settings for a single upload to the distribution service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadConfig {
    pub owner_name: String,
    pub app_name: String,
    /// App package, relative to the agent workspace.
    pub path_to_app: String,
    #[serde(default)]
    pub path_to_debug_symbols: Option<String>,
    #[serde(default)]
    pub path_to_release_notes: Option<String>,
    #[serde(default)]
    pub distribution_groups: Vec<String>,
    #[serde(default)]
    pub notify_testers: bool,
    /// Agent workspace; defaults to the directory holding the config file.
    #[serde(default)]
    pub root: Option<PathBuf>,
}

impl UploadConfig {
    /// Artifacts to upload: the app, then debug symbols when configured.
    pub fn artifact_paths(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.path_to_app.as_str()).chain(self.path_to_debug_symbols.as_deref())
    }

    /// Reject configs whose required fields are blank.
    pub fn validate(&self, source: &NormalizedPath) -> Result<()> {
        let required = [
            ("owner_name", &self.owner_name),
            ("app_name", &self.app_name),
            ("path_to_app", &self.path_to_app),
        ];
        match required.iter().find(|(_, value)| value.trim().is_empty()) {
            Some((field, _)) => Err(Error::MissingField {
                path: source.to_native(),
                field: (*field).to_string(),
            }),
            None => Ok(()),
        }
    }
}

/// Format-agnostic configuration loader.
///
/// Detects the format from the file extension.
#[derive(Debug, Default)]
pub struct ConfigStore;

impl ConfigStore {
    pub fn new() -> Self {
        Self
    }

    /// Load configuration from a file.
    ///
    /// Format is detected from file extension:
    /// - `.toml` -> TOML
    /// - `.json` -> JSON
    /// - `.yaml`, `.yml` -> YAML
    pub fn load<T: DeserializeOwned>(&self, path: &NormalizedPath) -> Result<T> {
        let extension = path.extension().unwrap_or("").to_lowercase();
        let format = match extension.as_str() {
            "toml" => "TOML",
            "json" => "JSON",
            "yaml" | "yml" => "YAML",
            _ => return Err(Error::UnsupportedFormat { extension }),
        };

        let content = io::read_text(path)?;
        tracing::debug!(path = %path, format, "Loading config");

        let parsed = match format {
            "TOML" => toml::from_str(&content).map_err(|e| e.to_string()),
            "JSON" => serde_json::from_str(&content).map_err(|e| e.to_string()),
            _ => serde_yaml::from_str(&content).map_err(|e| e.to_string()),
        };
        parsed.map_err(|message| Error::ConfigParse {
            path: path.to_native(),
            format: format.into(),
            message,
        })
    }

    /// Load and validate an [`UploadConfig`].
    pub fn load_upload(&self, path: &NormalizedPath) -> Result<UploadConfig> {
        let config: UploadConfig = self.load(path)?;
        config.validate(path)?;
        Ok(config)
    }
}
