//! # Ports
//!
//! Interface definitions for the collaborators an aggregation talks to.
//!
//! - [`filesystem`]: directory listing, entry classification and manifest reads
//! - [`loader`]: resolving a directory path to a value
//! - [`progress`]: per-directory observation while a scan runs
//!
//! Aggregators only ever see these traits, so stubs and in-memory
//! implementations substitute without touching the aggregation logic.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod filesystem;
pub mod loader;
pub mod progress;
