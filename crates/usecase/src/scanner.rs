// crates/usecase/src/scanner.rs
use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};

use load_all_ports::{filesystem::FileSystem, progress::ProgressSink};
use load_all_shared_kernel::{DirEntry, KindLabel, Result};

use crate::options::ScanOptions;

struct Silent;

impl ProgressSink for Silent {
    fn on_directory(&self, _kind: &KindLabel, _entry: &DirEntry) {}
}

static SILENT: Silent = Silent;

/// Yields the immediate subdirectories of a directory.
pub struct DirectoryScanner<'a> {
    fs: &'a dyn FileSystem,
    progress: &'a dyn ProgressSink,
}

impl<'a> DirectoryScanner<'a> {
    pub fn new(fs: &'a dyn FileSystem) -> Self {
        Self { fs, progress: &SILENT }
    }

    pub fn with_progress(fs: &'a dyn FileSystem, progress: &'a dyn ProgressSink) -> Self {
        Self { fs, progress }
    }

    /// Lists `dir` up front and classifies entries one at a time as the scan is consumed.
    ///
    /// Entries come back in listing order. Anything that is not a directory is skipped
    /// silently. With a kind label set, the progress sink hears about each directory
    /// right before it is yielded.
    pub fn scan(&self, dir: &Path, options: &ScanOptions) -> Result<Scan<'a>> {
        log::debug!(target: "load_all", "scanning {}", dir.display());
        let names = self.fs.list(dir)?;
        Ok(Scan {
            fs: self.fs,
            progress: self.progress,
            kind: options.kind.clone(),
            dir: dir.to_path_buf(),
            names: names.into_iter(),
        })
    }

    pub fn scan_all(&self, dir: &Path, options: &ScanOptions) -> Result<Vec<DirEntry>> {
        self.scan(dir, options)?.collect()
    }
}

/// Lazy pass over one directory listing. See [`DirectoryScanner::scan`].
pub struct Scan<'a> {
    fs: &'a dyn FileSystem,
    progress: &'a dyn ProgressSink,
    kind: Option<KindLabel>,
    dir: PathBuf,
    names: std::vec::IntoIter<OsString>,
}

impl Iterator for Scan<'_> {
    type Item = Result<DirEntry>;

    fn next(&mut self) -> Option<Self::Item> {
        for name in self.names.by_ref() {
            let path = self.dir.join(&name);
            match self.fs.is_directory(&path) {
                Ok(true) => {
                    let entry = DirEntry::new(name.to_string_lossy(), path);
                    if let Some(kind) = &self.kind {
                        self.progress.on_directory(kind, &entry);
                    }
                    return Some(Ok(entry));
                }
                Ok(false) => log::debug!(target: "load_all", "skipping {}", path.display()),
                Err(err) => return Some(Err(err)),
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.names.len()))
    }
}
