// crates/shared-kernel/src/value_objects/kind.rs
use std::{fmt, ops::Deref};

use serde::{Deserialize, Serialize};

/// Non-empty label describing what a scan is adding ("plugins", "routes", ...).
///
/// An empty string is never a valid label; callers that pass one get no label at all,
/// which in turn suppresses the per-directory log line.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct KindLabel(String);

impl KindLabel {
    pub fn new(label: impl Into<String>) -> Option<Self> {
        let label = label.into();
        if label.is_empty() { None } else { Some(Self(label)) }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for KindLabel {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| "kind label must not be empty".to_string())
    }
}

impl From<KindLabel> for String {
    fn from(label: KindLabel) -> Self {
        label.0
    }
}

impl Deref for KindLabel {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for KindLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
