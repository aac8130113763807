use serde::{Deserialize, Serialize};

/// # Documentation
/// Body returned by `POST /doc/submit`.
///
/// The server's submission result is passed through untouched; its shape is
/// owned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionResult {
    pub document_submission_result: serde_json::Value,
}

/// Body returned by `POST /doc/verify`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifiedDocument {
    pub document: DocumentSummary,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentSummary {
    /// Document name as registered on submission
    pub name: String,

    /// Identity of the user who submitted the document
    pub owner: OwnerIdentity,
}

/// Profile of the submitting user.
///
/// Every field is optional: profiles are edited on the backend and any of
/// them may be blank without the verification itself being in doubt.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OwnerIdentity {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
}
