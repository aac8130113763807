pub mod audit_query_engine;
pub mod document_desk;
pub mod document_processor;
pub mod query_state;
pub mod status_notice;

pub use audit_query_engine::*;
pub use document_desk::*;
pub use document_processor::*;
pub use query_state::*;
pub use status_notice::*;
