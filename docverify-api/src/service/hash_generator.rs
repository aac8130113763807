use crate::domain::{DocumentFile, HashLabel};
use crate::error::{ApiError, ApiResult};

pub const SIMPLE_HASH_PREFIX: &str = "simple_hash_";
pub const ADVANCED_HASH_PREFIX: &str = "advanced_hash_";

/// Strategy for turning a document into a verifiable label.
///
/// # Note
/// The shipped variants derive the label from the file *name* only. They are
/// placeholders for a content-addressed hash; a production deployment should
/// plug in a variant that hashes `DocumentFile::content` with a
/// cryptographic digest.
pub trait HashGenerator: Send + Sync {
    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    fn generate_hash(&self, file: &DocumentFile) -> ApiResult<HashLabel>;
}

/// Produces `simple_hash_<file name>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleHashGenerator;

impl HashGenerator for SimpleHashGenerator {
    fn name(&self) -> &'static str {
        "simple"
    }

    fn generate_hash(&self, file: &DocumentFile) -> ApiResult<HashLabel> {
        Ok(HashLabel::new(format!("{SIMPLE_HASH_PREFIX}{}", file.name)))
    }
}

/// Produces `advanced_hash_<file name>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct AdvancedHashGenerator;

impl HashGenerator for AdvancedHashGenerator {
    fn name(&self) -> &'static str {
        "advanced"
    }

    fn generate_hash(&self, file: &DocumentFile) -> ApiResult<HashLabel> {
        Ok(HashLabel::new(format!("{ADVANCED_HASH_PREFIX}{}", file.name)))
    }
}

/// Placeholder generator; every call fails with `NotImplemented`.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnimplementedHashGenerator;

impl HashGenerator for UnimplementedHashGenerator {
    fn name(&self) -> &'static str {
        "unimplemented"
    }

    fn generate_hash(&self, _file: &DocumentFile) -> ApiResult<HashLabel> {
        Err(ApiError::NotImplemented(
            "HashGenerator::generate_hash must be provided by a concrete strategy".to_string(),
        ))
    }
}
