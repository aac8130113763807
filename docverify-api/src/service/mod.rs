pub mod hash_generator;
pub mod verifier;

pub use hash_generator::*;
pub use verifier::*;
