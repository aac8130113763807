use serde::{Deserialize, Serialize};
use std::fmt;

/// Tag standing in for a document's content fingerprint.
///
/// Labels are built from a strategy prefix and the file name only. They are
/// not content hashes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HashLabel(String);

impl HashLabel {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.0.starts_with(prefix)
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for HashLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for HashLabel {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}
