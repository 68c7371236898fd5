//! Unified error types for the domain layer
//!
//! Provides a common error type for the few domain operations that can fail
//! outright (parsing, catalog loading). Validation of authored spell documents
//! never fails this way; it produces a [`crate::ValidationResult`] instead.

use thiserror::Error;

use crate::types::CatalogError;
use crate::value_objects::{DiceParseError, FieldPathError};

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// Parse error (for value objects and wire enums)
    #[error("Parse error: {0}")]
    Parse(String),

    /// An alternate catalog could not be loaded
    #[error("Catalog error: {0}")]
    Catalog(String),
}

impl DomainError {
    /// Creates a parse error for string-to-type conversion failures.
    ///
    /// Use this in `FromStr` implementations when the input string
    /// doesn't match any known variant or format.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}

impl From<DiceParseError> for DomainError {
    fn from(err: DiceParseError) -> Self {
        Self::Parse(err.to_string())
    }
}

impl From<FieldPathError> for DomainError {
    fn from(err: FieldPathError) -> Self {
        Self::Parse(err.to_string())
    }
}

impl From<CatalogError> for DomainError {
    fn from(err: CatalogError) -> Self {
        Self::Catalog(err.to_string())
    }
}
