// crates/ports/src/filesystem.rs
use std::{ffi::OsString, path::Path};

use load_all_shared_kernel::Result;

/// Port for listing a directory and classifying its entries.
///
/// `list` must return entry names in the order the backing store enumerates them;
/// callers never sort.
pub trait FileSystem: Send + Sync {
    fn list(&self, dir: &Path) -> Result<Vec<OsString>>;
    fn is_directory(&self, path: &Path) -> Result<bool>;
}

/// Port for reading small text files, used by loaders that resolve a directory
/// through a manifest inside it.
pub trait FileSource: Send + Sync {
    fn is_file(&self, path: &Path) -> Result<bool>;
    fn read_to_string(&self, path: &Path) -> Result<String>;
}

impl<T: FileSystem + ?Sized> FileSystem for &T {
    fn list(&self, dir: &Path) -> Result<Vec<OsString>> {
        (**self).list(dir)
    }

    fn is_directory(&self, path: &Path) -> Result<bool> {
        (**self).is_directory(path)
    }
}

impl<T: FileSource + ?Sized> FileSource for &T {
    fn is_file(&self, path: &Path) -> Result<bool> {
        (**self).is_file(path)
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        (**self).read_to_string(path)
    }
}
