//! # Schema Errors
//!
//! Two disjoint families:
//!
//! - **Decode errors** come from `serde_yaml` and are passed through
//!   unchanged ([`SchemaError::Decode`]).
//! - **Validation errors** ([`ValidationError`]) always name the offending
//!   type token. In fail-fast mode the first one is wrapped in a
//!   [`FieldError`] naming the top-level field being validated; in
//!   collect-all mode every one is recorded as a [`Violation`] with its path.

use std::fmt;

use thiserror::Error;

/// A single node failed validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The type token is not in the vocabulary.
    #[error("invalid or unsupported data type, data type given {0}")]
    UnsupportedTypeKind(String),

    /// A non-`RECORD` field carries nested fields.
    #[error("data type {type_token} does not accept nested fields, found {count}")]
    UnexpectedChildren {
        /// Type token of the offending field.
        type_token: String,
        /// Number of stray nested fields.
        count: usize,
    },

    /// The field is nested deeper than the configured maximum.
    #[error("field nesting exceeds maximum depth of {max_depth} at type {type_token}")]
    DepthExceeded {
        /// Type token of the field found past the limit.
        type_token: String,
        /// The configured limit.
        max_depth: usize,
    },
}

impl ValidationError {
    /// The type token of the node that failed.
    pub fn token(&self) -> &str {
        match self {
            Self::UnsupportedTypeKind(token) => token,
            Self::UnexpectedChildren { type_token, .. } => type_token,
            Self::DepthExceeded { type_token, .. } => type_token,
        }
    }
}

/// A top-level field failed validation.
///
/// `type_token` and `name` describe the top-level field that was being
/// validated, which is not necessarily the node that failed: the precise
/// offending token is carried by `source`.
///
/// An unsupported token is reported with the top-level token; depth and
/// stray-children failures name the field and leave the detail to `source`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Name of the top-level field.
    pub name: String,
    /// Type token of the top-level field.
    pub type_token: String,
    /// The failure found somewhere in the field's subtree.
    #[source]
    pub source: ValidationError,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.source {
            ValidationError::UnsupportedTypeKind(_) => write!(
                f,
                "invalid or unsupported data type, data type given: {}",
                self.type_token
            ),
            _ => write!(f, "field {} ({}) failed validation", self.name, self.type_token),
        }
    }
}

/// One failure recorded in collect-all mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Pointer-style path of the failing node, e.g. `/0/fields/2`.
    pub path: String,
    /// Name of the failing node.
    pub name: String,
    pub error: ValidationError,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.name.is_empty() {
            write!(f, "  {}: {}", self.path, self.error)
        } else {
            write!(f, "  {} ({}): {}", self.path, self.name, self.error)
        }
    }
}

/// Collection of violations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationViolations {
    violations: Vec<Violation>,
}

impl ValidationViolations {
    pub(crate) fn new(violations: Vec<Violation>) -> Self {
        Self { violations }
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    pub fn into_inner(self) -> Vec<Violation> {
        self.violations
    }
}

impl fmt::Display for ValidationViolations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.violations.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{v}")?;
        }
        Ok(())
    }
}

/// Error returned by the decode-then-validate workflow.
#[derive(Error, Debug)]
pub enum SchemaError {
    /// The document is not valid YAML or does not have the field shape.
    #[error(transparent)]
    Decode(#[from] serde_yaml::Error),

    /// Fail-fast validation stopped at this top-level field.
    #[error(transparent)]
    Invalid(#[from] FieldError),

    /// Collect-all validation found one or more violations.
    #[error("schema validation failed with {} violation(s):\n{}", .0.len(), .0)]
    ValidationFailed(ValidationViolations),

    /// The document file could not be read.
    #[error("cannot read schema document '{path}'")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl SchemaError {
    /// True for failures of the decode stage.
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode(_))
    }
}
