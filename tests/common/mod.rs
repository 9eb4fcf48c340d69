// tests/common/mod.rs
//! Shared fixtures for the integration suites.

use std::{
    fs,
    path::{Path, PathBuf},
    sync::Mutex,
};

use load_all::{LoaderError, ModuleLoader, Result};
use tempfile::TempDir;

/// Materializes `(relative path, contents)` pairs under a fresh temporary directory.
#[allow(dead_code)]
pub fn layout(files: &[(&str, &str)]) -> TempDir {
    let root = tempfile::tempdir().unwrap();
    for (rel, contents) in files {
        let path = root.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, contents).unwrap();
    }
    root
}

/// Answers `loaded <path>!` and records every path it was asked for.
#[derive(Default)]
pub struct RecordingLoader {
    pub seen: Mutex<Vec<PathBuf>>,
    pub fail_on_call: Option<usize>,
}

impl RecordingLoader {
    #[allow(dead_code)]
    pub fn failing_on(call: usize) -> Self {
        Self { fail_on_call: Some(call), ..Self::default() }
    }

    pub fn seen(&self) -> Vec<PathBuf> {
        self.seen.lock().unwrap().clone()
    }
}

impl ModuleLoader for RecordingLoader {
    type Output = String;

    fn load(&self, path: &Path) -> Result<String> {
        let mut seen = self.seen.lock().unwrap();
        seen.push(path.to_path_buf());
        if self.fail_on_call == Some(seen.len()) {
            return Err(LoaderError::other(path, "refusing to load").into());
        }
        Ok(format!("loaded {}!", path.display()))
    }
}
