//! # Type Validation
//!
//! Recursive check that every type token in a descriptor tree, at every
//! nesting depth, belongs to the [`DataType`] vocabulary.
//!
//! ## Traversal
//!
//! Depth-first, pre-order, children in document order. A node is checked
//! in this order:
//!
//! 1. depth against the configured cap (if any),
//! 2. its token against the vocabulary,
//! 3. `RECORD` descends into its children; any other type must have none.
//!
//! ## Reporting
//!
//! [`validate_field`] and [`validate_tree`] are fail-fast: the first failure
//! ends the walk. `validate_tree` wraps it in a [`FieldError`] naming the
//! top-level field being iterated. [`SchemaValidator`] in
//! [`ValidationMode::CollectAll`] records every failure as a [`Violation`].

use fieldcheck_core::{DataType, Field, FieldDescriptor, FieldKind, PrimitiveType};

use crate::config::{ValidationMode, ValidatorConfig};
use crate::decode;
use crate::error::{FieldError, SchemaError, ValidationError, ValidationViolations, Violation};

/// Validate one field and its subtree, stopping at the first failure.
///
/// A non-`RECORD` field that carries nested fields is rejected with
/// [`ValidationError::UnexpectedChildren`] rather than accepted with its
/// children ignored.
pub fn validate_field(field: &FieldDescriptor) -> Result<(), ValidationError> {
    check_field(field, 1, None)
}

/// Validate top-level fields in order, stopping at the first failure.
///
/// The returned error names the top-level field; its `source` holds the
/// failure of the exact node, which may be nested. Stray nested fields on
/// primitives fail here exactly as in [`validate_field`].
pub fn validate_tree(fields: &[FieldDescriptor]) -> Result<(), FieldError> {
    check_tree(fields, None)
}

fn check_tree(fields: &[FieldDescriptor], max_depth: Option<usize>) -> Result<(), FieldError> {
    for field in fields {
        check_field(field, 1, max_depth).map_err(|source| FieldError {
            name: field.name.clone(),
            type_token: field.type_token.clone(),
            source,
        })?;
    }
    Ok(())
}

fn check_depth(
    field: &FieldDescriptor,
    depth: usize,
    max_depth: Option<usize>,
) -> Result<(), ValidationError> {
    match max_depth {
        Some(max) if depth > max => Err(ValidationError::DepthExceeded {
            type_token: field.type_token.clone(),
            max_depth: max,
        }),
        _ => Ok(()),
    }
}

fn parse_token(field: &FieldDescriptor) -> Result<DataType, ValidationError> {
    field
        .data_type()
        .map_err(|_| ValidationError::UnsupportedTypeKind(field.type_token.clone()))
}

fn stray_children(field: &FieldDescriptor) -> Result<(), ValidationError> {
    if field.children.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::UnexpectedChildren {
            type_token: field.type_token.clone(),
            count: field.children.len(),
        })
    }
}

fn check_field(
    field: &FieldDescriptor,
    depth: usize,
    max_depth: Option<usize>,
) -> Result<(), ValidationError> {
    check_depth(field, depth, max_depth)?;
    if parse_token(field)?.is_composite() {
        for child in &field.children {
            check_field(child, depth + 1, max_depth)?;
        }
        Ok(())
    } else {
        stray_children(field)
    }
}

fn collect_field(
    field: &FieldDescriptor,
    depth: usize,
    max_depth: Option<usize>,
    path: &str,
    out: &mut Vec<Violation>,
) {
    let mut record = |error| {
        out.push(Violation {
            path: path.to_string(),
            name: field.name.clone(),
            error,
        })
    };

    if let Err(e) = check_depth(field, depth, max_depth) {
        record(e);
        return;
    }
    let data_type = match parse_token(field) {
        Ok(dt) => dt,
        Err(e) => {
            record(e);
            return;
        }
    };
    if !data_type.is_composite() {
        if let Err(e) = stray_children(field) {
            record(e);
        }
        return;
    }
    for (i, child) in field.children.iter().enumerate() {
        collect_field(child, depth + 1, max_depth, &format!("{path}/fields/{i}"), out);
    }
}

fn build_field(
    field: &FieldDescriptor,
    depth: usize,
    max_depth: Option<usize>,
) -> Result<Field, ValidationError> {
    check_depth(field, depth, max_depth)?;
    // Only RECORD is refused as a primitive.
    let kind = match PrimitiveType::try_from(parse_token(field)?) {
        Ok(primitive) => {
            stray_children(field)?;
            FieldKind::Primitive(primitive)
        }
        Err(_) => {
            let children = field
                .children
                .iter()
                .map(|child| build_field(child, depth + 1, max_depth))
                .collect::<Result<Vec<_>, _>>()?;
            FieldKind::Record(children)
        }
    };
    Ok(Field {
        name: field.name.clone(),
        description: field.description.clone(),
        kind,
    })
}

/// Configurable validator over decoded descriptor trees.
///
/// Holds only its immutable configuration, so one instance can be shared
/// across threads and reused for any number of documents.
#[derive(Debug, Clone, Default)]
pub struct SchemaValidator {
    config: ValidatorConfig,
}

impl SchemaValidator {
    pub fn new(config: ValidatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Validate a decoded tree according to the configured mode.
    ///
    /// # Errors
    ///
    /// `SchemaError::Invalid` for the first failure in fail-fast mode,
    /// `SchemaError::ValidationFailed` with every violation in collect-all
    /// mode.
    pub fn validate(&self, fields: &[FieldDescriptor]) -> Result<(), SchemaError> {
        match self.config.mode {
            ValidationMode::FailFast => Ok(check_tree(fields, self.config.max_depth)?),
            ValidationMode::CollectAll => {
                let violations = self.violations(fields);
                if violations.is_empty() {
                    Ok(())
                } else {
                    tracing::debug!(count = violations.len(), "schema has violations");
                    Err(SchemaError::ValidationFailed(violations))
                }
            }
        }
    }

    /// Every violation in the tree, regardless of the configured mode.
    pub fn violations(&self, fields: &[FieldDescriptor]) -> ValidationViolations {
        let mut out = Vec::new();
        for (i, field) in fields.iter().enumerate() {
            collect_field(field, 1, self.config.max_depth, &format!("/{i}"), &mut out);
        }
        ValidationViolations::new(out)
    }

    /// Validate a decoded tree and convert it into typed fields.
    pub fn resolve(&self, fields: &[FieldDescriptor]) -> Result<Vec<Field>, SchemaError> {
        self.validate(fields)?;
        let mut resolved = Vec::with_capacity(fields.len());
        for field in fields {
            let typed = build_field(field, 1, self.config.max_depth).map_err(|source| FieldError {
                name: field.name.clone(),
                type_token: field.type_token.clone(),
                source,
            })?;
            resolved.push(typed);
        }
        Ok(resolved)
    }

    /// Decode a YAML document and validate it.
    ///
    /// Decode failures are returned as `SchemaError::Decode` without
    /// running validation.
    pub fn validate_yaml(&self, raw: &[u8]) -> Result<(), SchemaError> {
        let fields = self.decode_logged(raw)?;
        self.validate(&fields)
    }

    /// Decode a YAML document, validate it, and return the typed fields.
    pub fn load_yaml(&self, raw: &[u8]) -> Result<Vec<Field>, SchemaError> {
        let fields = self.decode_logged(raw)?;
        self.resolve(&fields)
    }

    /// Read a YAML document from disk and validate it.
    pub fn validate_file(&self, path: &std::path::Path) -> Result<(), SchemaError> {
        let raw = std::fs::read(path).map_err(|e| SchemaError::Io {
            path: path.display().to_string(),
            source: e,
        })?;
        tracing::debug!(path = %path.display(), "validating schema file");
        self.validate_yaml(&raw)
    }

    fn decode_logged(&self, raw: &[u8]) -> Result<Vec<FieldDescriptor>, SchemaError> {
        let fields = decode::decode(raw).map_err(|e| {
            tracing::debug!(error = %e, "schema document failed to decode");
            SchemaError::Decode(e)
        })?;
        tracing::debug!(fields = fields.len(), "decoded schema document");
        Ok(fields)
    }
}
