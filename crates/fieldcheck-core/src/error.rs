//! # Error Types
//!
//! Errors raised by the foundational types. Validation and decode errors
//! live in `fieldcheck-schema`; this crate only reports problems with the
//! vocabulary and typed-tree construction.

use thiserror::Error;

/// Top-level error type for `fieldcheck-core`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldcheckError {
    /// A type token is not a member of the vocabulary.
    #[error("unknown data type: {0:?}")]
    UnknownDataType(String),

    /// A typed primitive field was built with the composite type.
    #[error("RECORD is composite and cannot be used as a primitive type")]
    CompositeAsPrimitive,
}
