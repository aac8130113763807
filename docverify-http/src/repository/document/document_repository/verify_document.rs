use async_trait::async_trait;
use docverify_api::{ApiResult, DocumentFile, VerifiedDocument};
use docverify_core::repository::verify_document::VerifyDocument;
use tracing::instrument;

use crate::utils::document_form;

use super::repo_impl::{DocumentRepositoryImpl, VERIFY_PATH};

impl DocumentRepositoryImpl {
    pub(super) async fn verify_document_impl(
        repo: &DocumentRepositoryImpl,
        file: &DocumentFile,
    ) -> ApiResult<VerifiedDocument> {
        let request = repo.executor.post(VERIFY_PATH).multipart(document_form(file)?);
        repo.executor.send_json(request).await
    }
}

#[async_trait]
impl VerifyDocument for DocumentRepositoryImpl {
    #[instrument(skip(self, file), fields(file = %file.name))]
    async fn verify_document(&self, file: &DocumentFile) -> ApiResult<VerifiedDocument> {
        Self::verify_document_impl(self, file).await
    }
}

#[cfg(test)]
mod tests {
    use crate::test_helper::setup_test_context;
    use docverify_api::{ApiError, DocumentFile, SimpleHashGenerator, SimpleVerifier};
    use docverify_core::repository::verify_document::VerifyDocument;
    use docverify_core::service::NoticeKind;
    use mockito::Matcher;
    use std::sync::Arc;
    use tokio_test::assert_err;

    type TestResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

    const VERIFIED_BODY: &str = r#"{
        "document": {
            "name": "contract.pdf",
            "owner": { "name": "Grace Hopper", "email": "grace@example.com", "position": "Registrar" }
        }
    }"#;

    #[tokio::test]
    async fn test_verify_document_returns_owner_identity() -> TestResult {
        let mut ctx = setup_test_context().await?;
        let mock = ctx
            .server
            .mock("POST", "/doc/verify")
            .match_body(Matcher::Regex(r#"name="file"; filename="contract.pdf""#.to_string()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(VERIFIED_BODY)
            .create_async()
            .await;

        let repo = &ctx.repos().create_document_repositories().document_repository;
        let result = repo
            .verify_document(&DocumentFile::new("contract.pdf", b"%PDF".to_vec()))
            .await?;

        mock.assert_async().await;
        assert_eq!(result.document.name, "contract.pdf");
        assert_eq!(result.document.owner.name.as_deref(), Some("Grace Hopper"));
        assert_eq!(result.document.owner.email.as_deref(), Some("grace@example.com"));

        Ok(())
    }

    #[tokio::test]
    async fn test_verify_unknown_document_uses_server_message() -> TestResult {
        let mut ctx = setup_test_context().await?;
        let _mock = ctx
            .server
            .mock("POST", "/doc/verify")
            .with_status(404)
            .with_body(r#"{ "message": "Document not found" }"#)
            .create_async()
            .await;

        let processor = ctx
            .repos()
            .document_processor(Arc::new(SimpleHashGenerator), Arc::new(SimpleVerifier));
        let err = assert_err!(processor.verify_document(&DocumentFile::new("x.pdf", b"x".to_vec())).await);
        assert_eq!(err, ApiError::DocumentVerification("Document not found".to_string()));

        Ok(())
    }

    #[tokio::test]
    async fn test_desk_verification_failure_shows_error_notice() -> TestResult {
        let mut ctx = setup_test_context().await?;
        let _mock = ctx
            .server
            .mock("POST", "/doc/verify")
            .with_status(500)
            .create_async()
            .await;

        let desk = ctx
            .repos()
            .document_desk(Arc::new(SimpleHashGenerator), Arc::new(SimpleVerifier));
        assert!(desk.verify(&DocumentFile::new("x.pdf", b"x".to_vec())).await.is_none());
        let notice = desk.notice().expect("notice is shown");
        assert_eq!(notice.kind, NoticeKind::Error);
        assert_eq!(notice.text, "Document verification failed");

        Ok(())
    }
}
