use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

/// Action recorded against a document in the audit trail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuditAction {
    Submit,
    Verify,
}

impl AuditAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuditAction::Submit => "SUBMIT",
            AuditAction::Verify => "VERIFY",
        }
    }
}

impl std::fmt::Display for AuditAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AuditAction {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SUBMIT" => Ok(AuditAction::Submit),
            "VERIFY" => Ok(AuditAction::Verify),
            _ => Err(()),
        }
    }
}

pub fn serialize_audit_action<S>(value: &AuditAction, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(value.as_str())
}

pub fn deserialize_audit_action<'de, D>(deserializer: D) -> Result<AuditAction, D::Error>
where
    D: Deserializer<'de>,
{
    let value_str = String::deserialize(deserializer)?;
    AuditAction::from_str(&value_str)
        .map_err(|_| serde::de::Error::custom(format!("Invalid AuditAction: {value_str}")))
}

impl Serialize for AuditAction {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_audit_action(self, serializer)
    }
}

impl<'de> Deserialize<'de> for AuditAction {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_audit_action(deserializer)
    }
}
