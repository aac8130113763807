use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use super::audit_action::AuditAction;

/// # Documentation
/// One logged action against a document, as returned by `GET /audit/audits`.
///
/// Records are immutable once fetched. The audit view either replaces its
/// list with a fresh page or appends the next page to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditRecord {
    pub id: i64,

    /// Name of the document the action was performed on
    pub document_name: String,

    /// User who performed the action
    pub username: String,

    pub action: AuditAction,

    /// Result reported by the backend, when it records one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outcome: Option<String>,

    /// When the action happened; the backend names this field `timestamp`
    /// or `date` depending on the endpoint version
    #[serde(alias = "date", deserialize_with = "deserialize_timestamp")]
    pub timestamp: DateTime<Utc>,
}

/// Accepts RFC 3339 timestamps and zone-less ISO date-times (read as UTC).
pub fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let value_str = String::deserialize(deserializer)?;
    parse_timestamp(&value_str)
        .ok_or_else(|| serde::de::Error::custom(format!("Invalid timestamp: {value_str}")))
}

pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S%.f"))
        .ok()
        .map(|naive| naive.and_utc())
}
