//! # Decode Stage
//!
//! Converts raw YAML bytes into the [`FieldDescriptor`] tree and back.
//! YAML syntax and shape errors are returned as `serde_yaml::Error`
//! unchanged; no recovery is attempted.

use fieldcheck_core::FieldDescriptor;

/// Decode a schema document: a YAML sequence of field mappings.
///
/// An empty document (or an explicit `null`) decodes as an empty schema.
pub fn decode(raw: &[u8]) -> Result<Vec<FieldDescriptor>, serde_yaml::Error> {
    if raw.iter().all(u8::is_ascii_whitespace) {
        return Ok(Vec::new());
    }
    let fields: Option<Vec<FieldDescriptor>> = serde_yaml::from_slice(raw)?;
    Ok(fields.unwrap_or_default())
}

/// Encode a descriptor tree using the same document shape `decode` reads.
pub fn encode(fields: &[FieldDescriptor]) -> Result<String, serde_yaml::Error> {
    serde_yaml::to_string(fields)
}
