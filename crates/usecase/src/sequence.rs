// crates/usecase/src/sequence.rs
use std::path::Path;

use load_all_ports::{filesystem::FileSystem, loader::ModuleLoader, progress::ProgressSink};
use load_all_shared_kernel::Result;

use crate::{options::ScanOptions, scanner::DirectoryScanner, traversal::traverse};

/// Collects one value per subdirectory, in scan order.
pub struct SequenceAggregator<'a, L: ?Sized> {
    scanner: DirectoryScanner<'a>,
    loader: &'a L,
}

impl<'a, L: ModuleLoader + ?Sized> SequenceAggregator<'a, L> {
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

    /// Loads every subdirectory of `dir` and returns the values unchanged.
    pub fn include_dir(&self, dir: &Path, options: &ScanOptions) -> Result<Vec<L::Output>> {
        self.include_dir_with(dir, options, Ok)
    }

    /// Loads every subdirectory of `dir` and appends `modifier(value)` for each.
    ///
    /// The output has exactly one element per subdirectory. An error from the scan,
    /// the loader or the modifier aborts the call and the partial output is dropped.
    pub fn include_dir_with<T, F>(
        &self,
        dir: &Path,
        options: &ScanOptions,
        mut modifier: F,
    ) -> Result<Vec<T>>
    where
        F: FnMut(L::Output) -> Result<T>,
    {
        let mut included = Vec::new();
        traverse(&self.scanner, self.loader, dir, options, |_, loaded| {
            included.push(modifier(loaded)?);
            Ok(())
        })?;
        Ok(included)
    }

    /// Like [`Self::include_dir_with`], but splices every item the modifier yields
    /// into the output, so a subdirectory may contribute zero or many values.
    pub fn include_dir_flat<I, F>(
        &self,
        dir: &Path,
        options: &ScanOptions,
        mut modifier: F,
    ) -> Result<Vec<I::Item>>
    where
        F: FnMut(L::Output) -> Result<I>,
        I: IntoIterator,
    {
        let mut included = Vec::new();
        traverse(&self.scanner, self.loader, dir, options, |_, loaded| {
            included.extend(modifier(loaded)?);
            Ok(())
        })?;
        Ok(included)
    }
}
