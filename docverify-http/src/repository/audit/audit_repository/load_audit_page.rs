use async_trait::async_trait;
use docverify_api::ApiResult;
use docverify_core::models::audit::AuditRecord;
use docverify_core::repository::load_audit_page::LoadAuditPage;
use docverify_core::repository::pagination::Page;
use docverify_core::repository::AuditQuery;
use tracing::instrument;

use super::repo_impl::{AuditPageResponse, AuditRepositoryImpl, AUDITS_PATH};

impl AuditRepositoryImpl {
    pub(super) async fn load_audit_page_impl(
        repo: &AuditRepositoryImpl,
        query: &AuditQuery,
    ) -> ApiResult<Page<AuditRecord>> {
        let request = repo
            .executor
            .get(AUDITS_PATH)
            .query(&query.to_query_params());
        let response: AuditPageResponse = repo.executor.send_json(request).await?;
        Ok(response.into())
    }
}

#[async_trait]
impl LoadAuditPage for AuditRepositoryImpl {
    #[instrument(skip(self, query), fields(page = query.page.page, sort_by = %query.sort.key))]
    async fn load_audit_page(&self, query: &AuditQuery) -> ApiResult<Page<AuditRecord>> {
        Self::load_audit_page_impl(self, query).await
    }
}
