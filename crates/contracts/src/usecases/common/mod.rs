//! Common types and traits for all UseCases

pub mod error_body;
pub mod usecase_metadata;

// Re-exports
pub use error_body::ErrorBody;
pub use usecase_metadata::UseCaseMetadata;
