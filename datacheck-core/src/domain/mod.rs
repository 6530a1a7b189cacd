pub mod dataset;
pub mod error;
pub mod quality;
pub mod report;

// Re-exports pratiques pour simplifier les imports ailleurs
pub use dataset::{Dataset, ValueType};
pub use error::DomainError;
