use async_trait::async_trait;
use docverify_api::{ApiResult, DocumentFile, VerifiedDocument};

/// Repository trait for checking a document against the backend's registry
#[async_trait]
pub trait VerifyDocument: Send + Sync {
    /// Upload `file` for verification and return the registered document with its owner
    async fn verify_document(&self, file: &DocumentFile) -> ApiResult<VerifiedDocument>;
}
