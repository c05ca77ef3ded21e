//! # fieldcheck-schema: Field Schema Decoding & Validation
//!
//! Decodes YAML field-schema documents and checks every declared type
//! token, at every nesting depth, against the closed
//! [`DataType`](fieldcheck_core::DataType) vocabulary.
//!
//! ## Pipeline
//!
//! - [`decode`](decode::decode): YAML bytes to a
//!   [`FieldDescriptor`](fieldcheck_core::FieldDescriptor) tree. Errors are
//!   `serde_yaml`'s own.
//! - [`validate_field`] / [`validate_tree`]: fail-fast recursive type check.
//! - [`SchemaValidator`]: the same check driven by a [`ValidatorConfig`]
//!   (fail-fast or collect-all, optional depth cap), plus typed resolution
//!   into [`Field`](fieldcheck_core::Field).
//! - [`validate_yaml`]: decode then validate with the default settings.
//!
//! ## Crate Policy
//!
//! - Depends only on `fieldcheck-core` internally.
//! - Decode failures are never wrapped or annotated.
//! - Validation is pure: no I/O outside [`SchemaValidator::validate_file`].

pub mod config;
pub mod decode;
pub mod error;
pub mod validate;

pub use config::{ConfigError, ValidationMode, ValidatorConfig};
pub use decode::{decode, encode};
pub use error::{FieldError, SchemaError, ValidationError, ValidationViolations, Violation};
pub use validate::{validate_field, validate_tree, SchemaValidator};

/// Decode a YAML schema document and validate it, stopping at the first
/// failure.
///
/// Returns the decoder's error unchanged if the document cannot be decoded.
pub fn validate_yaml(raw: &[u8]) -> Result<(), SchemaError> {
    SchemaValidator::default().validate_yaml(raw)
}
