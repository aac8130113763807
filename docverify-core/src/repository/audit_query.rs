use serde::{Deserialize, Serialize};

use crate::models::audit::{AuditFilter, SortSpec};
use crate::repository::pagination::PageRequest;

/// Everything needed to request one page of the audit trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditQuery {
    pub filter: AuditFilter,
    pub sort: SortSpec,
    pub page: PageRequest,
}

impl AuditQuery {
    pub fn new(filter: AuditFilter, sort: SortSpec, page: PageRequest) -> Self {
        Self { filter, sort, page }
    }

    /// Query parameters for `GET /audit/audits`.
    ///
    /// Set filter fields come first, followed by `sortBy`, `direction`,
    /// `page` and `size`.
    pub fn to_query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = self.filter.active_params();
        params.push(("sortBy", self.sort.key.clone()));
        params.push(("direction", self.sort.direction.as_query_param().to_string()));
        params.push(("page", self.page.page.to_string()));
        params.push(("size", self.page.size.to_string()));
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::audit::{AuditFilterField, SortDirection};

    #[test]
    fn test_default_query_params() {
        let query = AuditQuery::new(AuditFilter::default(), SortSpec::default(), PageRequest::first(10));
        assert_eq!(
            query.to_query_params(),
            vec![
                ("sortBy", "timestamp".to_string()),
                ("direction", "DESC".to_string()),
                ("page", "0".to_string()),
                ("size", "10".to_string()),
            ]
        );
    }

    #[test]
    fn test_query_params_include_set_filters() {
        let query = AuditQuery::new(
            AuditFilter::default()
                .with(AuditFilterField::DocumentName, "contract.pdf")
                .with(AuditFilterField::Action, "VERIFY"),
            SortSpec::new("username", SortDirection::Ascending),
            PageRequest::new(3, 10),
        );
        assert_eq!(
            query.to_query_params(),
            vec![
                ("action", "VERIFY".to_string()),
                ("documentName", "contract.pdf".to_string()),
                ("sortBy", "username".to_string()),
                ("direction", "ASC".to_string()),
                ("page", "3".to_string()),
                ("size", "10".to_string()),
            ]
        );
    }
}
