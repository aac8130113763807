use docverify_api::{ApiError, ApiResult, DocumentFile};
use reqwest::multipart::{Form, Part};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Multipart field carrying the uploaded document.
pub const FILE_FIELD: &str = "file";

/// Pulls the human-readable message out of an error body.
///
/// The backend sends either `{ "errorMessage": ... }` or `{ "message": ... }`.
pub fn extract_error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    ["errorMessage", "message"]
        .iter()
        .filter_map(|key| value.get(*key).and_then(|m| m.as_str()))
        .find(|m| !m.is_empty())
        .map(str::to_string)
}

/// Decodes a successful response body.
pub fn decode_json<T: DeserializeOwned>(body: &[u8]) -> ApiResult<T> {
    serde_json::from_slice(body).map_err(|e| ApiError::InvalidResponse(e.to_string()))
}

/// Maps a reqwest failure onto the error taxonomy.
pub fn map_transport_error(error: reqwest::Error, timeout: Duration) -> ApiError {
    if error.is_timeout() {
        ApiError::Timeout(timeout)
    } else {
        ApiError::Transport(error.to_string())
    }
}

/// Builds the multipart payload for submit and verify.
pub fn document_form(file: &DocumentFile) -> ApiResult<Form> {
    let mut part = Part::bytes(file.content.clone()).file_name(file.name.clone());
    if let Some(mime_type) = &file.mime_type {
        part = part
            .mime_str(mime_type)
            .map_err(|e| ApiError::ValidationError(format!("Invalid MIME type '{mime_type}': {e}")))?;
    }
    Ok(Form::new().part(FILE_FIELD, part))
}
