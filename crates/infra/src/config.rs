// crates/infra/src/config.rs
use std::path::Path;

use load_all_shared_kernel::{ConfigError, ErrorContext, Result};
use serde::{Deserialize, Serialize};

use crate::loader::ManifestFormat;

/// Controls how [`crate::ManifestLoader`] resolves a directory to a manifest file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ManifestConfig {
    /// File names tried inside each directory, first match wins.
    pub candidates: Vec<String>,
    /// When false, a directory without any candidate loads as an empty mapping.
    pub require_manifest: bool,
}

impl Default for ManifestConfig {
    fn default() -> Self {
        Self { candidates: default_candidates(), require_manifest: true }
    }
}

pub fn default_candidates() -> Vec<String> {
    #[allow(unused_mut)]
    let mut candidates = vec!["index.json".to_string()];
    #[cfg(feature = "yaml")]
    candidates.extend(["index.yaml".to_string(), "index.yml".to_string()]);
    candidates
}

impl ManifestConfig {
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.candidates.is_empty() {
            return Err(ConfigError::Invalid {
                field: "candidates".into(),
                reason: "at least one manifest name is required".into(),
            });
        }
        for candidate in &self.candidates {
            let path = Path::new(candidate);
            if path.components().count() != 1 || path.file_name().is_none() {
                return Err(ConfigError::Invalid {
                    field: "candidates".into(),
                    reason: format!("'{candidate}' must be a plain file name"),
                });
            }
            if ManifestFormat::from_path(path).is_none() {
                return Err(ConfigError::Invalid {
                    field: "candidates".into(),
                    reason: format!("'{candidate}' has no supported extension"),
                });
            }
        }
        Ok(())
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;
        Self::from_json_str(&text).with_context(|| format!("loading {}", path.display()))
    }
}
