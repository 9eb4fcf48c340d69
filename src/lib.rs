//! Load a value from every immediate subdirectory of a directory and combine the
//! results, either into a sequence ([`include_dir`]) or into one merged mapping
//! ([`export_dir`]).
//!
//! The free functions here run against the real filesystem and log discoveries
//! through the `log` facade. For anything else (an in-memory volume, a custom
//! progress sink) build a [`SequenceAggregator`] or [`MapAggregator`] directly.

#![allow(clippy::multiple_crate_versions)]

use std::path::Path;

pub use load_all_infra::{
    FnLoader, LogProgressSink, ManifestConfig, ManifestFormat, ManifestLoader, MemoryFileSystem,
    NullProgressSink, RecordingProgressSink, StdFileSystem, loader_fn,
};
pub use load_all_ports::{
    filesystem::{FileSource, FileSystem},
    loader::ModuleLoader,
    progress::ProgressSink,
};
pub use load_all_shared_kernel::{
    ConfigError, DirEntry, ErrorContext, Exports, FilesystemError, HookError, KindLabel,
    LoadAllError, LoaderError, Result,
};
pub use load_all_usecase::{
    DirectoryScanner, MapAggregator, Scan, ScanOptions, ScanOptionsBuilder, SequenceAggregator,
};

pub mod prelude {
    pub use crate::{
        Exports, FileSystem, KindLabel, LoadAllError, ManifestLoader, MapAggregator, ModuleLoader,
        Result, ScanOptions, SequenceAggregator, StdFileSystem,
    };
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Loads every subdirectory of `dir` with `loader`, in listing order.
///
/// A non-empty `kind` logs `Adding <kind> from <name>` at info level per directory.
pub fn include_dir<L>(
    dir: impl AsRef<Path>,
    kind: Option<&str>,
    loader: &L,
) -> Result<Vec<L::Output>>
where
    L: ModuleLoader + ?Sized,
{
    SequenceAggregator::with_progress(&StdFileSystem, loader, &LogProgressSink)
        .include_dir(dir.as_ref(), &ScanOptions::with_kind(kind))
}

pub fn include_dir_with<L, T, F>(
    dir: impl AsRef<Path>,
    kind: Option<&str>,
    loader: &L,
    modifier: F,
) -> Result<Vec<T>>
where
    L: ModuleLoader + ?Sized,
    F: FnMut(L::Output) -> Result<T>,
{
    SequenceAggregator::with_progress(&StdFileSystem, loader, &LogProgressSink).include_dir_with(
        dir.as_ref(),
        &ScanOptions::with_kind(kind),
        modifier,
    )
}

/// Merges the mapping loaded from every subdirectory of `dir`; later directories
/// overwrite earlier keys.
pub fn export_dir<L, V>(dir: impl AsRef<Path>, kind: Option<&str>, loader: &L) -> Result<Exports<V>>
where
    L: ModuleLoader + ?Sized,
    L::Output: IntoIterator<Item = (String, V)>,
{
    MapAggregator::with_progress(&StdFileSystem, loader, &LogProgressSink)
        .export_dir(dir.as_ref(), &ScanOptions::with_kind(kind))
}

/// Like [`export_dir`], merging `modifier(loaded, previous)` instead of the loaded
/// mapping. See [`MapAggregator::export_dir_with`].
pub fn export_dir_with<L, V, D, F>(
    dir: impl AsRef<Path>,
    kind: Option<&str>,
    loader: &L,
    modifier: F,
) -> Result<Exports<V>>
where
    L: ModuleLoader + ?Sized,
    F: FnMut(L::Output, &Exports<V>) -> Result<D>,
    D: IntoIterator<Item = (String, V)>,
{
    MapAggregator::with_progress(&StdFileSystem, loader, &LogProgressSink).export_dir_with(
        dir.as_ref(),
        &ScanOptions::with_kind(kind),
        modifier,
    )
}
