pub mod repo_impl;
pub mod load_audit_page;

pub use repo_impl::AuditRepositoryImpl;
