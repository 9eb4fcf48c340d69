// crates/infra/src/loader.rs
use std::{marker::PhantomData, path::Path};

use load_all_ports::{filesystem::FileSource, loader::ModuleLoader};
use load_all_shared_kernel::{LoaderError, Result};
use serde::de::DeserializeOwned;

use crate::config::ManifestConfig;

/// Serialization formats a manifest may be written in, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestFormat {
    Json,
    #[cfg(feature = "yaml")]
    Yaml,
}

impl ManifestFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(Self::Json),
            #[cfg(feature = "yaml")]
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Json => "JSON",
            #[cfg(feature = "yaml")]
            Self::Yaml => "YAML",
        }
    }

    fn parse<T: DeserializeOwned>(self, text: &str, path: &Path) -> Result<T> {
        let parsed = match self {
            Self::Json => serde_json::from_str(text).map_err(|e| e.to_string()),
            #[cfg(feature = "yaml")]
            Self::Yaml => serde_yaml::from_str(text).map_err(|e| e.to_string()),
        };
        parsed.map_err(|details| {
            LoaderError::Parse {
                path: path.to_path_buf(),
                format: self.name().to_string(),
                details,
            }
            .into()
        })
    }
}

/// Loads a directory by deserializing the first manifest file found inside it.
pub struct ManifestLoader<T, S> {
    source: S,
    config: ManifestConfig,
    _output: PhantomData<fn() -> T>,
}

impl<T, S: FileSource> ManifestLoader<T, S> {
    pub fn new(source: S) -> Self {
        Self { source, config: ManifestConfig::default(), _output: PhantomData }
    }

    pub fn with_config(source: S, config: ManifestConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { source, config, _output: PhantomData })
    }

    pub fn config(&self) -> &ManifestConfig {
        &self.config
    }
}

impl<T, S> ModuleLoader for ManifestLoader<T, S>
where
    T: DeserializeOwned,
    S: FileSource,
{
    type Output = T;

    fn load(&self, path: &Path) -> Result<T> {
        for candidate in &self.config.candidates {
            let manifest = path.join(candidate);
            if !self.source.is_file(&manifest)? {
                continue;
            }
            let Some(format) = ManifestFormat::from_path(&manifest) else {
                continue;
            };
            log::debug!(target: "load_all", "resolved {} as {}", path.display(), format.name());
            let text = self.source.read_to_string(&manifest)?;
            return format.parse(&text, &manifest);
        }

        if self.config.require_manifest {
            return Err(LoaderError::ManifestMissing {
                path: path.to_path_buf(),
                candidates: self.config.candidates.clone(),
            }
            .into());
        }
        log::debug!(target: "load_all", "no manifest in {}, loading empty mapping", path.display());
        serde_json::from_value(serde_json::Value::Object(serde_json::Map::new())).map_err(|e| {
            LoaderError::Parse {
                path: path.to_path_buf(),
                format: "JSON".into(),
                details: e.to_string(),
            }
            .into()
        })
    }
}

/// Adapts a closure into a [`ModuleLoader`].
pub struct FnLoader<F, T> {
    load: F,
    _output: PhantomData<fn() -> T>,
}

pub fn loader_fn<T, F>(load: F) -> FnLoader<F, T>
where
    F: Fn(&Path) -> Result<T> + Send + Sync,
{
    FnLoader { load, _output: PhantomData }
}

impl<F, T> ModuleLoader for FnLoader<F, T>
where
    F: Fn(&Path) -> Result<T> + Send + Sync,
{
    type Output = T;

    fn load(&self, path: &Path) -> Result<T> {
        (self.load)(path)
    }
}
