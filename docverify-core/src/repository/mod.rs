pub mod audit_query;
pub mod load_audit_page;
pub mod pagination;
pub mod submit_document;
pub mod verify_document;

// Re-exports
pub use audit_query::*;
pub use load_audit_page::*;
pub use pagination::*;
pub use submit_document::*;
pub use verify_document::*;
