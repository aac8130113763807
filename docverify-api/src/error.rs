use std::time::Duration;
use thiserror::Error;

pub const SUBMISSION_FALLBACK_MESSAGE: &str = "Document submission failed";
pub const VERIFICATION_FALLBACK_MESSAGE: &str = "Document verification failed";
pub const AUDIT_FETCH_FALLBACK_MESSAGE: &str = "Failed to load audit logs";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// A strategy placeholder was invoked instead of a concrete variant.
    #[error("Not implemented: {0}")]
    NotImplemented(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("{0}")]
    DocumentSubmission(String),

    #[error("{0}")]
    DocumentVerification(String),

    #[error("{0}")]
    AuditFetch(String),

    #[error("Remote error (status {status}): {}", .message.as_deref().unwrap_or("no message"))]
    Remote { status: u16, message: Option<String> },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("I/O error: {0}")]
    Io(String),
}

impl ApiError {
    /// Message supplied by the server in its error payload, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Remote { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// Converts a remote failure into a `DocumentSubmission` error.
    ///
    /// `NotImplemented` is a programming error and passes through untouched.
    pub fn into_submission_error(self) -> ApiError {
        match self {
            ApiError::NotImplemented(_) | ApiError::DocumentSubmission(_) => self,
            other => ApiError::DocumentSubmission(
                other
                    .server_message()
                    .unwrap_or(SUBMISSION_FALLBACK_MESSAGE)
                    .to_string(),
            ),
        }
    }

    /// Converts a remote failure into a `DocumentVerification` error.
    pub fn into_verification_error(self) -> ApiError {
        match self {
            ApiError::NotImplemented(_) | ApiError::DocumentVerification(_) => self,
            other => ApiError::DocumentVerification(
                other
                    .server_message()
                    .unwrap_or(VERIFICATION_FALLBACK_MESSAGE)
                    .to_string(),
            ),
        }
    }

    /// Converts a remote failure into an `AuditFetch` error.
    ///
    /// Timeouts keep their own wording so the user can tell them apart from
    /// a server rejection.
    pub fn into_audit_fetch_error(self) -> ApiError {
        match self {
            ApiError::AuditFetch(_) => self,
            ApiError::Timeout(after) => {
                ApiError::AuditFetch(format!("{AUDIT_FETCH_FALLBACK_MESSAGE}: timed out after {after:?}"))
            }
            other => ApiError::AuditFetch(
                other
                    .server_message()
                    .unwrap_or(AUDIT_FETCH_FALLBACK_MESSAGE)
                    .to_string(),
            ),
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
