use async_trait::async_trait;
use docverify_api::ApiResult;

use crate::models::audit::AuditRecord;
use crate::repository::audit_query::AuditQuery;
use crate::repository::pagination::Page;

/// Repository trait for loading one page of the audit trail
///
/// # Example
/// ```ignore
/// use docverify_core::repository::{AuditQuery, PageRequest};
///
/// let query = AuditQuery::new(filter, sort, PageRequest::first(10));
/// let page = repo.load_audit_page(&query).await?;
/// println!("{} records, more: {}", page.items.len(), page.has_more());
/// ```
#[async_trait]
pub trait LoadAuditPage: Send + Sync {
    /// Load the page of audit records matching `query`
    ///
    /// # Returns
    /// * `Ok(Page<AuditRecord>)` - The records and the server's paging metadata
    /// * `Err` - Transport, timeout, remote or decoding failure
    async fn load_audit_page(&self, query: &AuditQuery) -> ApiResult<Page<AuditRecord>>;
}
