pub mod models;
pub mod repository;
pub mod service;

pub use models::*;
pub use repository::*;
pub use service::*;

#[cfg(test)]
pub mod test_utils;
