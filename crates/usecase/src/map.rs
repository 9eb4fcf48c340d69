// crates/usecase/src/map.rs
use std::path::Path;

use load_all_ports::{filesystem::FileSystem, loader::ModuleLoader, progress::ProgressSink};
use load_all_shared_kernel::{Exports, Result};

use crate::{options::ScanOptions, scanner::DirectoryScanner, traversal::traverse};

/// Folds per-directory mappings into a single mapping by successive shallow merges.
pub struct MapAggregator<'a, L: ?Sized> {
    scanner: DirectoryScanner<'a>,
    loader: &'a L,
}

impl<'a, L: ModuleLoader + ?Sized> MapAggregator<'a, L> {
    pub fn new(fs: &'a dyn FileSystem, loader: &'a L) -> Self {
        Self { scanner: DirectoryScanner::new(fs), loader }
    }

    pub fn with_progress(
        fs: &'a dyn FileSystem,
        loader: &'a L,
        progress: &'a dyn ProgressSink,
    ) -> Self {
        Self { scanner: DirectoryScanner::with_progress(fs, progress), loader }
    }

    /// Merges the mapping loaded from each subdirectory of `dir`. On key collisions the
    /// later directory wins.
    pub fn export_dir<V>(&self, dir: &Path, options: &ScanOptions) -> Result<Exports<V>>
    where
        L::Output: IntoIterator<Item = (String, V)>,
    {
        self.export_dir_with(dir, options, |loaded, _| Ok(loaded))
    }

    /// Merges `modifier(loaded, previous)` for each subdirectory of `dir`.
    ///
    /// `previous` is the accumulator as it stood before this directory. The returned
    /// delta is merged on top: new keys are appended, existing keys are overwritten in
    /// place. Combining values across directories (summing a counter, say) is up to the
    /// modifier, which can read the previous value and return the combined one.
    pub fn export_dir_with<V, D, F>(
        &self,
        dir: &Path,
        options: &ScanOptions,
        mut modifier: F,
    ) -> Result<Exports<V>>
    where
        F: FnMut(L::Output, &Exports<V>) -> Result<D>,
        D: IntoIterator<Item = (String, V)>,
    {
        let mut exports = Exports::new();
        traverse(&self.scanner, self.loader, dir, options, |_, loaded| {
            let delta = modifier(loaded, &exports)?;
            exports.extend(delta);
            Ok(())
        })?;
        Ok(exports)
    }
}
