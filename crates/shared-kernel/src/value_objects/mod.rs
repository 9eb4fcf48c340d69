// crates/shared-kernel/src/value_objects/mod.rs
pub mod dir_entry;
pub mod kind;

pub use dir_entry::DirEntry;
pub use kind::KindLabel;

/// Insertion-ordered mapping threaded through a merge aggregation.
///
/// Deserializable, so a manifest loader can produce it directly.
pub type Exports<V> = indexmap::IndexMap<String, V>;
