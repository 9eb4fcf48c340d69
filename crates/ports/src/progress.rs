// crates/ports/src/progress.rs
use load_all_shared_kernel::{DirEntry, KindLabel};

/// Receives one notification per accepted directory when the scan carries a kind label.
pub trait ProgressSink: Send + Sync {
    fn on_directory(&self, kind: &KindLabel, entry: &DirEntry);
}

impl<T: ProgressSink + ?Sized> ProgressSink for &T {
    fn on_directory(&self, kind: &KindLabel, entry: &DirEntry) {
        (**self).on_directory(kind, entry)
    }
}
