// crates/infra/src/progress.rs
use std::sync::{Mutex, PoisonError};

use load_all_ports::progress::ProgressSink;
use load_all_shared_kernel::{DirEntry, KindLabel};

/// Forwards discoveries to the `log` facade at info level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogProgressSink;

impl ProgressSink for LogProgressSink {
    fn on_directory(&self, kind: &KindLabel, entry: &DirEntry) {
        log::info!(target: "load_all", "Adding {kind} from {}", entry.name());
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NullProgressSink;

impl ProgressSink for NullProgressSink {
    fn on_directory(&self, _kind: &KindLabel, _entry: &DirEntry) {}
}

/// Keeps every line it would have logged. Useful for asserting on discoveries.
#[derive(Debug, Default)]
pub struct RecordingProgressSink {
    lines: Mutex<Vec<String>>,
}

impl RecordingProgressSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

impl ProgressSink for RecordingProgressSink {
    fn on_directory(&self, kind: &KindLabel, entry: &DirEntry) {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(format!("Adding {kind} from {}", entry.name()));
    }
}
