use async_trait::async_trait;
use docverify_api::{ApiResult, DocumentFile, SubmissionResult};
use docverify_core::repository::submit_document::SubmitDocument;
use tracing::instrument;

use crate::utils::document_form;

use super::repo_impl::{DocumentRepositoryImpl, SUBMIT_PATH};

impl DocumentRepositoryImpl {
    pub(super) async fn submit_document_impl(
        repo: &DocumentRepositoryImpl,
        file: &DocumentFile,
    ) -> ApiResult<SubmissionResult> {
        let request = repo.executor.post(SUBMIT_PATH).multipart(document_form(file)?);
        repo.executor.send_json(request).await
    }
}

#[async_trait]
impl SubmitDocument for DocumentRepositoryImpl {
    #[instrument(skip(self, file), fields(file = %file.name))]
    async fn submit_document(&self, file: &DocumentFile) -> ApiResult<SubmissionResult> {
        Self::submit_document_impl(self, file).await
    }
}
