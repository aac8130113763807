use docverify_core::models::audit::AuditRecord;
use docverify_core::repository::pagination::Page;
use serde::Deserialize;

use crate::executor::HttpExecutor;

pub const AUDITS_PATH: &str = "/audit/audits";

pub struct AuditRepositoryImpl {
    pub(crate) executor: HttpExecutor,
}

impl AuditRepositoryImpl {
    pub fn new(executor: HttpExecutor) -> Self {
        Self { executor }
    }
}

/// Wire shape of `GET /audit/audits`.
#[derive(Debug, Deserialize)]
pub(crate) struct AuditPageResponse {
    #[serde(default)]
    pub content: Vec<AuditRecord>,
    pub page: PageMetadata,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PageMetadata {
    pub number: usize,
    pub total_pages: usize,
}

impl From<AuditPageResponse> for Page<AuditRecord> {
    fn from(response: AuditPageResponse) -> Self {
        Page::new(response.content, response.page.number, response.page.total_pages)
    }
}
