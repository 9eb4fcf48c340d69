// crates/usecase/src/traversal.rs
use std::path::Path;

use load_all_ports::loader::ModuleLoader;
use load_all_shared_kernel::{DirEntry, Result};

use crate::{options::ScanOptions, scanner::DirectoryScanner};

/// One linear pass: each subdirectory of `dir` is loaded and handed to `visit`
/// before the next entry is classified. The first error ends the pass.
pub(crate) fn traverse<L, F>(
    scanner: &DirectoryScanner<'_>,
    loader: &L,
    dir: &Path,
    options: &ScanOptions,
    mut visit: F,
) -> Result<()>
where
    L: ModuleLoader + ?Sized,
    F: FnMut(&DirEntry, L::Output) -> Result<()>,
{
    for entry in scanner.scan(dir, options)? {
        let entry = entry?;
        let loaded = loader.load(entry.path())?;
        visit(&entry, loaded)?;
    }
    Ok(())
}
