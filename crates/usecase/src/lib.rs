//! # Use Cases
//!
//! Directory aggregation built on the collaborator ports:
//!
//! - [`scanner`]: lists a directory and yields its subdirectories
//! - [`sequence`]: `include_dir`, appending one value per subdirectory
//! - [`map`]: `export_dir`, shallow-merging mappings across subdirectories
//! - [`options`]: per-call scan options
//!
//! Use cases depend on ports only, never on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod map;
pub mod options;
pub mod scanner;
pub mod sequence;
mod traversal;

pub use map::MapAggregator;
pub use options::{ScanOptions, ScanOptionsBuilder};
pub use scanner::{DirectoryScanner, Scan};
pub use sequence::SequenceAggregator;
