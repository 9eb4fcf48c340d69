// crates/shared-kernel/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub use error::{
    ConfigError, ErrorContext, FilesystemError, HookError, LoadAllError, LoaderError, Result,
};

pub mod error;
pub mod value_objects;

pub use value_objects::{DirEntry, Exports, KindLabel};
