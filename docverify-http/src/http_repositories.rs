use docverify_api::{ApiResult, ClientConfig, HashGenerator, Verifier};
use docverify_core::{AuditQueryEngine, DocumentDesk, DocumentProcessor, StatusNotice};
use std::sync::Arc;

use crate::executor::HttpExecutor;
use crate::repository::audit::audit_repository::AuditRepositoryImpl;
use crate::repository::document::document_repository::DocumentRepositoryImpl;

/// Entry point for the HTTP backend.
///
/// Builds one `HttpExecutor` from the configuration and hands out
/// repositories (and the services wired on top of them) sharing it.
pub struct HttpRepositories {
    executor: HttpExecutor,
}

impl HttpRepositories {
    pub fn new(config: &ClientConfig) -> ApiResult<Self> {
        Ok(Self {
            executor: HttpExecutor::new(config)?,
        })
    }

    /// Configuration from `DOCVERIFY_*` environment variables.
    pub fn from_env() -> ApiResult<Self> {
        Self::new(&ClientConfig::from_env()?)
    }

    pub fn config(&self) -> &ClientConfig {
        self.executor.config()
    }

    pub fn create_audit_repositories(&self) -> AuditRepositories {
        AuditRepositories {
            audit_repository: Arc::new(AuditRepositoryImpl::new(self.executor.clone())),
        }
    }

    pub fn create_document_repositories(&self) -> DocumentRepositories {
        DocumentRepositories {
            document_repository: Arc::new(DocumentRepositoryImpl::new(self.executor.clone())),
        }
    }

    /// Audit view state machine backed by `GET /audit/audits`.
    pub fn audit_query_engine(&self) -> AuditQueryEngine {
        let repos = self.create_audit_repositories();
        AuditQueryEngine::from_config(repos.audit_repository, self.config())
    }

    pub fn document_processor(
        &self,
        hash_generator: Arc<dyn HashGenerator>,
        verifier: Arc<dyn Verifier>,
    ) -> DocumentProcessor {
        let repos = self.create_document_repositories();
        DocumentProcessor::new(hash_generator, verifier, repos.document_repository)
    }

    pub fn document_desk(
        &self,
        hash_generator: Arc<dyn HashGenerator>,
        verifier: Arc<dyn Verifier>,
    ) -> DocumentDesk {
        DocumentDesk::new(
            self.document_processor(hash_generator, verifier),
            StatusNotice::new(self.config().notice_ttl()),
        )
    }
}

/// Container for all audit repositories
pub struct AuditRepositories {
    pub audit_repository: Arc<AuditRepositoryImpl>,
}

/// Container for all document repositories
pub struct DocumentRepositories {
    pub document_repository: Arc<DocumentRepositoryImpl>,
}
