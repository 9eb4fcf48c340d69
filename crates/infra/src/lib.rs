// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod filesystem;
pub mod loader;
pub mod memory;
pub mod progress;

pub use config::ManifestConfig;
pub use filesystem::StdFileSystem;
pub use loader::{FnLoader, ManifestFormat, ManifestLoader, loader_fn};
pub use memory::MemoryFileSystem;
pub use progress::{LogProgressSink, NullProgressSink, RecordingProgressSink};
