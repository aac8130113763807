pub mod audit;
pub mod document;
