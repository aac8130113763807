use docverify_api::{ApiResult, DocumentFile, ProcessedDocument, SubmissionResult, VerifiedDocument};

use super::document_processor::DocumentProcessor;
use super::status_notice::{Notice, NoticeKind, StatusNotice};

pub const SUBMISSION_SUCCESS_MESSAGE: &str = "Document submitted successfully";

/// Upload and verification view state.
///
/// Remote failures end here: they become an error notice instead of being
/// returned to the caller.
pub struct DocumentDesk {
    processor: DocumentProcessor,
    notice: StatusNotice,
}

impl DocumentDesk {
    pub fn new(processor: DocumentProcessor, notice: StatusNotice) -> Self {
        Self { processor, notice }
    }

    pub async fn submit(&self, file: &DocumentFile) -> Option<SubmissionResult> {
        match self.processor.submit_document(file).await {
            Ok(result) => {
                self.notice.show(NoticeKind::Success, SUBMISSION_SUCCESS_MESSAGE);
                Some(result)
            }
            Err(e) => {
                self.notice.show(NoticeKind::Error, e.to_string());
                None
            }
        }
    }

    pub async fn verify(&self, file: &DocumentFile) -> Option<VerifiedDocument> {
        match self.processor.verify_document(file).await {
            Ok(result) => {
                self.notice.show(
                    NoticeKind::Success,
                    format!(
                        "Document '{}' is registered to {}",
                        result.document.name,
                        result.document.owner.name.as_deref().unwrap_or("an unnamed owner")
                    ),
                );
                Some(result)
            }
            Err(e) => {
                self.notice.show(NoticeKind::Error, e.to_string());
                None
            }
        }
    }

    /// Local labelling; strategy errors are programming errors and are returned.
    pub fn process(&self, file: &DocumentFile) -> ApiResult<ProcessedDocument> {
        self.processor.process_document(file)
    }

    pub fn notice(&self) -> Option<Notice> {
        self.notice.current()
    }

    pub fn processor(&self) -> &DocumentProcessor {
        &self.processor
    }
}
