use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::time::Duration;
use validator::Validate;

use crate::error::{ApiError, ApiResult};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";
pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_NOTICE_TTL_SECS: u64 = 5;

/// # Documentation
/// Settings shared by the HTTP backend and the client-side services.
///
/// - `base_url`: root of the document API, e.g. `https://docs.example.com/api`
/// - `page_size`: number of audit records requested per page
/// - `request_timeout_secs`: upper bound for any single remote call
/// - `notice_ttl_secs`: how long a transient status message stays visible
/// - `auth_token`: bearer token issued by the (external) login flow
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ClientConfig {
    #[validate(url)]
    pub base_url: String,

    #[validate(range(min = 1, max = 500))]
    pub page_size: usize,

    #[validate(range(min = 1, max = 600))]
    pub request_timeout_secs: u64,

    #[validate(range(min = 1, max = 600))]
    pub notice_ttl_secs: u64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_token: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            notice_ttl_secs: DEFAULT_NOTICE_TTL_SECS,
            auth_token: None,
        }
    }
}

impl ClientConfig {
    /// Build a configuration from `DOCVERIFY_*` environment variables.
    ///
    /// Unset variables fall back to the defaults.
    pub fn from_env() -> ApiResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> ApiResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let config = Self {
            base_url: lookup("DOCVERIFY_BASE_URL").unwrap_or(defaults.base_url),
            page_size: parse_var(&lookup, "DOCVERIFY_PAGE_SIZE")?.unwrap_or(defaults.page_size),
            request_timeout_secs: parse_var(&lookup, "DOCVERIFY_REQUEST_TIMEOUT_SECS")?
                .unwrap_or(defaults.request_timeout_secs),
            notice_ttl_secs: parse_var(&lookup, "DOCVERIFY_NOTICE_TTL_SECS")?
                .unwrap_or(defaults.notice_ttl_secs),
            auth_token: lookup("DOCVERIFY_AUTH_TOKEN").filter(|token| !token.is_empty()),
        };
        config.check()?;
        Ok(config)
    }

    /// Run the field validators, mapping failures into `ApiError::ValidationError`.
    pub fn check(&self) -> ApiResult<()> {
        self.validate()
            .map_err(|e| ApiError::ValidationError(e.to_string()))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn notice_ttl(&self) -> Duration {
        Duration::from_secs(self.notice_ttl_secs)
    }

    /// Joins `path` onto the base URL without doubling the separator.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

fn parse_var<F, T>(lookup: &F, key: &str) -> ApiResult<Option<T>>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| ApiError::ValidationError(format!("Invalid value for {key}: '{raw}'"))),
    }
}
