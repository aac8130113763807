use async_trait::async_trait;
use docverify_api::{ApiResult, DocumentFile, SubmissionResult};

/// Repository trait for registering a document with the backend
#[async_trait]
pub trait SubmitDocument: Send + Sync {
    /// Upload `file` as the multipart `file` field and return the server's result
    async fn submit_document(&self, file: &DocumentFile) -> ApiResult<SubmissionResult>;
}
