pub mod repo_impl;
pub mod submit_document;
pub mod verify_document;

pub use repo_impl::DocumentRepositoryImpl;
