use crate::models::audit::{AuditFilter, AuditRecord, SortSpec};

/// Lifecycle of the audit view's data.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FetchStatus {
    #[default]
    Idle,
    Loading,
    Loaded,
    /// User-visible message of the last failed fetch
    Error(String),
}

/// Whether a fetch replaces the displayed records or extends them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchMode {
    Reset,
    LoadMore,
}

/// # Documentation
/// Everything the audit view renders.
///
/// - `page`: index of the last page merged into `records`
/// - `has_more`: whether the server reported pages after `page`
/// - `records`: replaced on a reset fetch, extended on a load-more fetch
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueryState {
    pub filter: AuditFilter,
    pub sort: SortSpec,
    pub page: usize,
    pub records: Vec<AuditRecord>,
    pub has_more: bool,
    pub status: FetchStatus,
}

impl QueryState {
    pub fn is_loading(&self) -> bool {
        self.status == FetchStatus::Loading
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.status {
            FetchStatus::Error(message) => Some(message),
            _ => None,
        }
    }
}
