// crates/infra/src/filesystem.rs
use std::{ffi::OsString, io, path::Path};

use load_all_ports::filesystem::{FileSource, FileSystem};
use load_all_shared_kernel::{FilesystemError, LoaderError, Result};

/// Filesystem adapter backed by `std::fs`.
///
/// Listing preserves `read_dir` order, which is whatever the platform returns.
/// Classification follows symlinks, so a link to a directory counts as a directory.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdFileSystem;

impl StdFileSystem {
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for StdFileSystem {
    fn list(&self, dir: &Path) -> Result<Vec<OsString>> {
        let read_dir_err = |source| FilesystemError::ReadDir { path: dir.to_path_buf(), source };
        let mut names = Vec::new();
        for entry in std::fs::read_dir(dir).map_err(read_dir_err)? {
            names.push(entry.map_err(read_dir_err)?.file_name());
        }
        Ok(names)
    }

    fn is_directory(&self, path: &Path) -> Result<bool> {
        let metadata = std::fs::metadata(path)
            .map_err(|source| FilesystemError::Stat { path: path.to_path_buf(), source })?;
        Ok(metadata.is_dir())
    }
}

impl FileSource for StdFileSystem {
    fn is_file(&self, path: &Path) -> Result<bool> {
        match std::fs::metadata(path) {
            Ok(metadata) => Ok(metadata.is_file()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(source) => Err(FilesystemError::Stat { path: path.to_path_buf(), source }.into()),
        }
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        std::fs::read_to_string(path)
            .map_err(|source| LoaderError::Read { path: path.to_path_buf(), source }.into())
    }
}
