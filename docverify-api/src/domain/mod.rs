pub mod document_file;
pub mod document_result;
pub mod hash_label;
pub mod verification;

pub use document_file::*;
pub use document_result::*;
pub use hash_label::*;
pub use verification::*;
