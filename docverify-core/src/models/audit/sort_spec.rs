use serde::{Deserialize, Serialize};

pub const DEFAULT_SORT_KEY: &str = "timestamp";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// Upper-cased form sent in the `direction` query parameter.
    pub fn as_query_param(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "ASC",
            SortDirection::Descending => "DESC",
        }
    }

    pub fn flipped(&self) -> SortDirection {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// Active sort column and direction of the audit table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub key: String,
    pub direction: SortDirection,
}

impl Default for SortSpec {
    fn default() -> Self {
        Self {
            key: DEFAULT_SORT_KEY.to_string(),
            direction: SortDirection::Descending,
        }
    }
}

impl SortSpec {
    pub fn new(key: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            key: key.into(),
            direction,
        }
    }

    /// Sort after a click on the `key` column header.
    ///
    /// Clicking the active column flips its direction. Clicking another
    /// column makes it active in ascending order.
    pub fn toggled(&self, key: &str) -> SortSpec {
        if self.key == key {
            SortSpec::new(key, self.direction.flipped())
        } else {
            SortSpec::new(key, SortDirection::Ascending)
        }
    }
}
