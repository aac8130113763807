pub mod executor;
pub mod http_repositories;
pub mod repository;
pub mod utils;

pub use executor::HttpExecutor;
pub use http_repositories::HttpRepositories;
pub use repository::audit::audit_repository::AuditRepositoryImpl;
pub use repository::document::document_repository::DocumentRepositoryImpl;

#[cfg(test)]
pub mod test_helper;
