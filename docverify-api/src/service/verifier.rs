use crate::domain::{HashLabel, VerificationOutcome};
use crate::error::{ApiError, ApiResult};

use super::hash_generator::{ADVANCED_HASH_PREFIX, SIMPLE_HASH_PREFIX};

/// Strategy for checking that a label has a recognised shape.
pub trait Verifier: Send + Sync {
    fn name(&self) -> &'static str;

    fn verify(&self, label: &HashLabel) -> ApiResult<VerificationOutcome>;
}

/// Accepts any label produced by the simple or advanced generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleVerifier;

impl Verifier for SimpleVerifier {
    fn name(&self) -> &'static str {
        "simple"
    }

    fn verify(&self, label: &HashLabel) -> ApiResult<VerificationOutcome> {
        let known = [SIMPLE_HASH_PREFIX, ADVANCED_HASH_PREFIX]
            .iter()
            .any(|prefix| label.has_prefix(prefix));
        Ok(VerificationOutcome::new(known))
    }
}

/// Placeholder verifier; every call fails with `NotImplemented`.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnimplementedVerifier;

impl Verifier for UnimplementedVerifier {
    fn name(&self) -> &'static str {
        "unimplemented"
    }

    fn verify(&self, _label: &HashLabel) -> ApiResult<VerificationOutcome> {
        Err(ApiError::NotImplemented(
            "Verifier::verify must be provided by a concrete strategy".to_string(),
        ))
    }
}
