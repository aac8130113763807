use serde::{Deserialize, Serialize};

/// Editable fields of the audit filter form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuditFilterField {
    Username,
    Action,
    Outcome,
    StartDate,
    EndDate,
    DocumentName,
}

impl AuditFilterField {
    pub const ALL: [AuditFilterField; 6] = [
        AuditFilterField::Username,
        AuditFilterField::Action,
        AuditFilterField::Outcome,
        AuditFilterField::StartDate,
        AuditFilterField::EndDate,
        AuditFilterField::DocumentName,
    ];

    /// Query parameter name understood by the audit endpoint.
    pub fn param_name(&self) -> &'static str {
        match self {
            AuditFilterField::Username => "username",
            AuditFilterField::Action => "action",
            AuditFilterField::Outcome => "outcome",
            AuditFilterField::StartDate => "startDate",
            AuditFilterField::EndDate => "endDate",
            AuditFilterField::DocumentName => "documentName",
        }
    }
}

/// # Documentation
/// Filter criteria for the audit trail.
///
/// Every field holds the raw text of its form input. An empty string means
/// "unset" and the field is left out of the outgoing query. Whitespace is
/// not trimmed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AuditFilter {
    pub username: String,
    pub action: String,
    pub outcome: String,
    pub start_date: String,
    pub end_date: String,
    pub document_name: String,
}

impl AuditFilter {
    pub fn get(&self, field: AuditFilterField) -> &str {
        match field {
            AuditFilterField::Username => &self.username,
            AuditFilterField::Action => &self.action,
            AuditFilterField::Outcome => &self.outcome,
            AuditFilterField::StartDate => &self.start_date,
            AuditFilterField::EndDate => &self.end_date,
            AuditFilterField::DocumentName => &self.document_name,
        }
    }

    pub fn set(&mut self, field: AuditFilterField, value: impl Into<String>) {
        let slot = match field {
            AuditFilterField::Username => &mut self.username,
            AuditFilterField::Action => &mut self.action,
            AuditFilterField::Outcome => &mut self.outcome,
            AuditFilterField::StartDate => &mut self.start_date,
            AuditFilterField::EndDate => &mut self.end_date,
            AuditFilterField::DocumentName => &mut self.document_name,
        };
        *slot = value.into();
    }

    pub fn with(mut self, field: AuditFilterField, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Set fields as `(param name, value)` pairs, in form order.
    pub fn active_params(&self) -> Vec<(&'static str, String)> {
        AuditFilterField::ALL
            .iter()
            .filter(|field| !self.get(**field).is_empty())
            .map(|field| (field.param_name(), self.get(*field).to_string()))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        AuditFilterField::ALL.iter().all(|field| self.get(*field).is_empty())
    }
}
