use serde::{Deserialize, Serialize};

use super::hash_label::HashLabel;

/// Result of checking a `HashLabel` against the known strategy prefixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VerificationOutcome(bool);

impl VerificationOutcome {
    pub fn new(verified: bool) -> Self {
        Self(verified)
    }

    pub fn is_verified(&self) -> bool {
        self.0
    }
}

impl From<bool> for VerificationOutcome {
    fn from(value: bool) -> Self {
        Self(value)
    }
}

/// Local processing result: the generated label and whether it verified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessedDocument {
    pub hash: HashLabel,
    pub is_verified: bool,
}
