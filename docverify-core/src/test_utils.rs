use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use docverify_api::{
    ApiError, ApiResult, DocumentFile, DocumentSummary, OwnerIdentity, SubmissionResult,
    VerifiedDocument,
};
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

use crate::models::audit::{AuditAction, AuditRecord};
use crate::repository::{AuditQuery, LoadAuditPage, Page, SubmitDocument, VerifyDocument};

pub fn create_test_audit_record(id: i64) -> AuditRecord {
    AuditRecord {
        id,
        document_name: format!("document-{id}.pdf"),
        username: "alice".to_string(),
        action: if id % 2 == 0 { AuditAction::Submit } else { AuditAction::Verify },
        outcome: None,
        timestamp: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap() + chrono::Duration::minutes(id),
    }
}

/// A page holding records with the given ids.
pub fn create_test_page(ids: &[i64], page_number: usize, total_pages: usize) -> Page<AuditRecord> {
    Page::new(
        ids.iter().map(|id| create_test_audit_record(*id)).collect(),
        page_number,
        total_pages,
    )
}

pub fn record_ids(records: &[AuditRecord]) -> Vec<i64> {
    records.iter().map(|r| r.id).collect()
}

/// Audit repository answering from a queue of scripted responses.
///
/// Once the queue is empty it answers with an empty single page.
#[derive(Clone, Default)]
pub struct ScriptedAuditRepository {
    responses: Arc<Mutex<VecDeque<ApiResult<Page<AuditRecord>>>>>,
    queries: Arc<Mutex<Vec<AuditQuery>>>,
    delay: Option<Duration>,
}

impl ScriptedAuditRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn push_page(&self, page: Page<AuditRecord>) -> &Self {
        self.responses.lock().push_back(Ok(page));
        self
    }

    pub fn push_error(&self, error: ApiError) -> &Self {
        self.responses.lock().push_back(Err(error));
        self
    }

    pub fn queries(&self) -> Vec<AuditQuery> {
        self.queries.lock().clone()
    }
}

#[async_trait]
impl LoadAuditPage for ScriptedAuditRepository {
    async fn load_audit_page(&self, query: &AuditQuery) -> ApiResult<Page<AuditRecord>> {
        self.queries.lock().push(query.clone());
        let response = self.responses.lock().pop_front();
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        response.unwrap_or_else(|| Ok(Page::new(Vec::new(), query.page.page, 1)))
    }
}

pub fn sample_verified_document(name: &str) -> VerifiedDocument {
    VerifiedDocument {
        document: DocumentSummary {
            name: name.to_string(),
            owner: OwnerIdentity {
                name: Some("Ada Lovelace".to_string()),
                email: Some("ada@example.com".to_string()),
                position: Some("Notary".to_string()),
            },
        },
    }
}

/// Document backend that accepts everything, or fails every call with one error.
#[derive(Clone, Default)]
pub struct FakeDocumentRepository {
    failure: Option<ApiError>,
    submitted: Arc<Mutex<Vec<String>>>,
}

impl FakeDocumentRepository {
    pub fn failing(error: ApiError) -> Self {
        Self {
            failure: Some(error),
            submitted: Arc::default(),
        }
    }

    pub fn submitted_names(&self) -> Vec<String> {
        self.submitted.lock().clone()
    }
}

#[async_trait]
impl SubmitDocument for FakeDocumentRepository {
    async fn submit_document(&self, file: &DocumentFile) -> ApiResult<SubmissionResult> {
        if let Some(error) = &self.failure {
            return Err(error.clone());
        }
        self.submitted.lock().push(file.name.clone());
        Ok(SubmissionResult {
            document_submission_result: serde_json::json!({ "stored": file.name }),
        })
    }
}

#[async_trait]
impl VerifyDocument for FakeDocumentRepository {
    async fn verify_document(&self, file: &DocumentFile) -> ApiResult<VerifiedDocument> {
        if let Some(error) = &self.failure {
            return Err(error.clone());
        }
        Ok(sample_verified_document(&file.name))
    }
}
