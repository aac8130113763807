use docverify_api::{
    ApiResult, DocumentFile, HashGenerator, ProcessedDocument, SubmissionResult,
    VerifiedDocument, Verifier,
};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

use crate::repository::{SubmitDocument, VerifyDocument};

/// Combines a local hash/verify strategy pair with the remote submit and
/// verify calls.
///
/// Strategies are injected so call sites stay unchanged when a variant is
/// swapped.
pub struct DocumentProcessor {
    hash_generator: Arc<dyn HashGenerator>,
    verifier: Arc<dyn Verifier>,
    submitter: Arc<dyn SubmitDocument>,
    remote_verifier: Arc<dyn VerifyDocument>,
}

impl DocumentProcessor {
    pub fn new<R>(
        hash_generator: Arc<dyn HashGenerator>,
        verifier: Arc<dyn Verifier>,
        remote: Arc<R>,
    ) -> Self
    where
        R: SubmitDocument + VerifyDocument + 'static,
    {
        Self {
            hash_generator,
            verifier,
            submitter: remote.clone(),
            remote_verifier: remote,
        }
    }

    /// Label `file` locally and check the label's shape.
    ///
    /// A `NotImplemented` strategy error is returned as is.
    pub fn process_document(&self, file: &DocumentFile) -> ApiResult<ProcessedDocument> {
        let hash = self.hash_generator.generate_hash(file)?;
        let outcome = self.verifier.verify(&hash)?;
        debug!(
            generator = self.hash_generator.name(),
            verifier = self.verifier.name(),
            hash = %hash,
            verified = outcome.is_verified(),
            "processed document locally"
        );
        Ok(ProcessedDocument {
            hash,
            is_verified: outcome.is_verified(),
        })
    }

    #[instrument(skip(self, file), fields(file = %file.name, size = file.size()))]
    pub async fn submit_document(&self, file: &DocumentFile) -> ApiResult<SubmissionResult> {
        match self.submitter.submit_document(file).await {
            Ok(result) => {
                info!("document submitted");
                Ok(result)
            }
            Err(e) => {
                warn!(error = %e, "document submission failed");
                Err(e.into_submission_error())
            }
        }
    }

    #[instrument(skip(self, file), fields(file = %file.name, size = file.size()))]
    pub async fn verify_document(&self, file: &DocumentFile) -> ApiResult<VerifiedDocument> {
        match self.remote_verifier.verify_document(file).await {
            Ok(result) => {
                info!(owner = ?result.document.owner.name, "document verified");
                Ok(result)
            }
            Err(e) => {
                warn!(error = %e, "document verification failed");
                Err(e.into_verification_error())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{sample_verified_document, FakeDocumentRepository};
    use docverify_api::{
        AdvancedHashGenerator, ApiError, SimpleHashGenerator, SimpleVerifier,
        UnimplementedHashGenerator, UnimplementedVerifier, SUBMISSION_FALLBACK_MESSAGE,
        VERIFICATION_FALLBACK_MESSAGE,
    };
    use tokio_test::{assert_err, assert_ok};

    fn processor(
        generator: Arc<dyn HashGenerator>,
        verifier: Arc<dyn Verifier>,
        remote: FakeDocumentRepository,
    ) -> DocumentProcessor {
        DocumentProcessor::new(generator, verifier, Arc::new(remote))
    }

    #[test]
    fn test_process_document_with_simple_strategies() {
        let processor = processor(
            Arc::new(SimpleHashGenerator),
            Arc::new(SimpleVerifier),
            FakeDocumentRepository::default(),
        );
        let result = processor
            .process_document(&DocumentFile::new("test.pdf", Vec::new()))
            .unwrap();
        assert_eq!(result.hash.as_str(), "simple_hash_test.pdf");
        assert!(result.is_verified);
    }

    #[test]
    fn test_process_document_with_advanced_generator() {
        let processor = processor(
            Arc::new(AdvancedHashGenerator),
            Arc::new(SimpleVerifier),
            FakeDocumentRepository::default(),
        );
        let result = processor
            .process_document(&DocumentFile::new("scan.png", Vec::new()))
            .unwrap();
        assert_eq!(result.hash.as_str(), "advanced_hash_scan.png");
        assert!(result.is_verified);
    }

    #[test]
    fn test_process_document_propagates_not_implemented() {
        let file = DocumentFile::new("test.pdf", Vec::new());

        let generator_missing = processor(
            Arc::new(UnimplementedHashGenerator),
            Arc::new(SimpleVerifier),
            FakeDocumentRepository::default(),
        );
        assert!(matches!(
            generator_missing.process_document(&file),
            Err(ApiError::NotImplemented(_))
        ));

        let verifier_missing = processor(
            Arc::new(SimpleHashGenerator),
            Arc::new(UnimplementedVerifier),
            FakeDocumentRepository::default(),
        );
        assert!(matches!(
            verifier_missing.process_document(&file),
            Err(ApiError::NotImplemented(_))
        ));
    }

    #[tokio::test]
    async fn test_submit_document_returns_server_result() {
        let remote = FakeDocumentRepository::default();
        let processor = processor(Arc::new(SimpleHashGenerator), Arc::new(SimpleVerifier), remote.clone());
        let file = DocumentFile::new("contract.pdf", b"%PDF".to_vec());

        let result = assert_ok!(processor.submit_document(&file).await);
        assert_eq!(result.document_submission_result["stored"], "contract.pdf");
        assert_eq!(remote.submitted_names(), vec!["contract.pdf".to_string()]);
    }

    #[tokio::test]
    async fn test_submit_document_failure_uses_server_message() {
        let remote = FakeDocumentRepository::failing(ApiError::Remote {
            status: 409,
            message: Some("Document already exists".to_string()),
        });
        let processor = processor(Arc::new(SimpleHashGenerator), Arc::new(SimpleVerifier), remote);

        let err = assert_err!(processor.submit_document(&DocumentFile::new("a.pdf", Vec::new())).await);
        assert_eq!(err, ApiError::DocumentSubmission("Document already exists".to_string()));
    }

    #[tokio::test]
    async fn test_submit_document_failure_falls_back() {
        let remote = FakeDocumentRepository::failing(ApiError::Transport("refused".to_string()));
        let processor = processor(Arc::new(SimpleHashGenerator), Arc::new(SimpleVerifier), remote);

        let err = assert_err!(processor.submit_document(&DocumentFile::new("a.pdf", Vec::new())).await);
        assert_eq!(err, ApiError::DocumentSubmission(SUBMISSION_FALLBACK_MESSAGE.to_string()));
    }

    #[tokio::test]
    async fn test_verify_document_returns_owner() {
        let processor = processor(
            Arc::new(SimpleHashGenerator),
            Arc::new(SimpleVerifier),
            FakeDocumentRepository::default(),
        );
        let result = assert_ok!(processor.verify_document(&DocumentFile::new("contract.pdf", Vec::new())).await);
        assert_eq!(result, sample_verified_document("contract.pdf"));
        assert_eq!(result.document.owner.email.as_deref(), Some("ada@example.com"));
    }

    #[tokio::test]
    async fn test_verify_document_failure_falls_back() {
        let remote = FakeDocumentRepository::failing(ApiError::Remote { status: 404, message: None });
        let processor = processor(Arc::new(SimpleHashGenerator), Arc::new(SimpleVerifier), remote);

        let err = assert_err!(processor.verify_document(&DocumentFile::new("a.pdf", Vec::new())).await);
        assert_eq!(err, ApiError::DocumentVerification(VERIFICATION_FALLBACK_MESSAGE.to_string()));
    }
}
