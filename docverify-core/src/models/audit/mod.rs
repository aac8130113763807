pub mod audit_action;
pub mod audit_filter;
pub mod audit_record;
pub mod sort_spec;

pub use audit_action::*;
pub use audit_filter::*;
pub use audit_record::*;
pub use sort_spec::*;
