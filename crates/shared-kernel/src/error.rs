// crates/shared-kernel/src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum LoadAllError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<LoadAllError>,
    },

    #[error("Filesystem error: {0}")]
    Filesystem(#[from] FilesystemError),

    #[error("Loader error: {0}")]
    Loader(#[from] LoaderError),

    #[error("Modifier error: {0}")]
    Hook(#[from] HookError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

pub type Result<T> = std::result::Result<T, LoadAllError>;

/// Failures raised while listing a directory or classifying its entries.
#[derive(Debug, Error)]
pub enum FilesystemError {
    #[error("Failed to read directory '{path}': {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to stat '{path}': {source}")]
    Stat {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No such file or directory: '{path}'")]
    NotFound { path: PathBuf },

    #[error("Not a directory: '{path}'")]
    NotADirectory { path: PathBuf },

    /// Bare I/O failure surfaced with `?`; wrap with [`ErrorContext`] to name the path.
    #[error("File system operation failed: {source}")]
    Io {
        #[source]
        source: std::io::Error,
    },
}

/// Failures raised by a module loader. Everything but the path is opaque to the aggregators.
#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("No manifest found in '{path}' (tried: {})", candidates.join(", "))]
    ManifestMissing { path: PathBuf, candidates: Vec<String> },

    #[error("Failed to read '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {format} module '{path}': {details}")]
    Parse { path: PathBuf, format: String, details: String },

    #[error("Failed to load '{path}': {source}")]
    Other {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl LoaderError {
    pub fn other(
        path: impl Into<PathBuf>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::Other { path: path.into(), source: source.into() }
    }
}

/// Failures raised from a caller-supplied modifier.
#[derive(Debug, Error)]
pub enum HookError {
    #[error("Modifier rejected '{entry}': {reason}")]
    Rejected { entry: String, reason: String },

    #[error(transparent)]
    Other(Box<dyn std::error::Error + Send + Sync>),
}

impl HookError {
    pub fn other(source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::Other(source.into())
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {field} - {reason}")]
    Invalid { field: String, reason: String },

    #[error("Failed to read configuration '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse configuration: {details}")]
    Parse { details: String },
}

impl From<std::io::Error> for FilesystemError {
    fn from(source: std::io::Error) -> Self {
        Self::Io { source }
    }
}

impl From<std::io::Error> for LoadAllError {
    fn from(err: std::io::Error) -> Self {
        FilesystemError::from(err).into()
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse { details: err.to_string() }
    }
}

impl From<serde_json::Error> for LoadAllError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::from(err).into()
    }
}

#[cfg(feature = "yaml")]
impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Parse { details: err.to_string() }
    }
}

#[cfg(feature = "yaml")]
impl From<serde_yaml::Error> for LoadAllError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::from(err).into()
    }
}

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<LoadAllError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| LoadAllError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| LoadAllError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}
