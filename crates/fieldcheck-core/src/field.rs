//! # Field Trees
//!
//! Two representations of a schema:
//!
//! - [`FieldDescriptor`]: the decode shape. Mirrors the YAML mapping
//!   (`name`, `type`, `description`, `fields`) one-to-one and keeps the type
//!   token as a raw string, so a document with an unsupported token still
//!   decodes and the token can be reported by validation.
//!
//! - [`Field`] / [`FieldKind`]: the typed tree. Built only from a validated
//!   descriptor tree. Primitive fields carry a [`PrimitiveType`] and no
//!   children; records carry their children and nothing else.

use serde::{Deserialize, Deserializer, Serialize};

use crate::data_type::DataType;
use crate::error::FieldcheckError;

/// One decoded entry of a schema document.
///
/// Keys other than `name`, `type`, `description` and `fields` (for example
/// `mode`) are ignored when decoding. Absent keys decode as empty values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub type_token: String,
    #[serde(default)]
    pub description: String,
    /// Nested fields. Only meaningful when `type_token` is `RECORD`.
    #[serde(
        rename = "fields",
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub children: Vec<FieldDescriptor>,
}

/// `fields:` with no value decodes as an empty list rather than an error.
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<FieldDescriptor>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<FieldDescriptor>>::deserialize(deserializer)?.unwrap_or_default())
}

impl FieldDescriptor {
    /// Build a leaf descriptor.
    pub fn new(
        name: impl Into<String>,
        type_token: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            type_token: type_token.into(),
            description: description.into(),
            children: Vec::new(),
        }
    }

    /// Attach nested descriptors.
    pub fn with_children(mut self, children: Vec<FieldDescriptor>) -> Self {
        self.children = children;
        self
    }

    /// Parse the type token against the vocabulary.
    pub fn data_type(&self) -> Result<DataType, FieldcheckError> {
        self.type_token.parse()
    }
}

/// A [`DataType`] other than `RECORD`.
///
/// The only way in is [`TryFrom<DataType>`], so a value of this type is
/// never composite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PrimitiveType(DataType);

impl PrimitiveType {
    pub fn data_type(self) -> DataType {
        self.0
    }
}

impl TryFrom<DataType> for PrimitiveType {
    type Error = FieldcheckError;

    fn try_from(data_type: DataType) -> Result<Self, Self::Error> {
        if data_type.is_composite() {
            return Err(FieldcheckError::CompositeAsPrimitive);
        }
        Ok(Self(data_type))
    }
}

impl std::fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// The shape of a typed field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    /// A terminal value.
    Primitive(PrimitiveType),
    /// A `RECORD` with its nested fields in document order.
    Record(Vec<Field>),
}

impl FieldKind {
    /// Build a primitive kind, rejecting the composite type.
    pub fn primitive(data_type: DataType) -> Result<Self, FieldcheckError> {
        Ok(Self::Primitive(PrimitiveType::try_from(data_type)?))
    }

    pub fn data_type(&self) -> DataType {
        match self {
            Self::Primitive(primitive) => primitive.data_type(),
            Self::Record(_) => DataType::Record,
        }
    }

    /// Nested fields; empty for primitives.
    pub fn children(&self) -> &[Field] {
        match self {
            Self::Primitive(_) => &[],
            Self::Record(children) => children,
        }
    }
}

/// A validated schema field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub description: String,
    pub kind: FieldKind,
}

impl Field {
    /// Build a primitive field. Fails for [`DataType::Record`].
    pub fn primitive(
        name: impl Into<String>,
        description: impl Into<String>,
        data_type: DataType,
    ) -> Result<Self, FieldcheckError> {
        Ok(Self {
            name: name.into(),
            description: description.into(),
            kind: FieldKind::primitive(data_type)?,
        })
    }

    /// Build a record field.
    pub fn record(
        name: impl Into<String>,
        description: impl Into<String>,
        children: Vec<Field>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            kind: FieldKind::Record(children),
        }
    }

    pub fn data_type(&self) -> DataType {
        self.kind.data_type()
    }

    /// Nesting depth of this field; a primitive has depth 1.
    pub fn depth(&self) -> usize {
        1 + self
            .kind
            .children()
            .iter()
            .map(Field::depth)
            .max()
            .unwrap_or(0)
    }

    /// Number of fields in this subtree, including itself.
    pub fn node_count(&self) -> usize {
        1 + self
            .kind
            .children()
            .iter()
            .map(Field::node_count)
            .sum::<usize>()
    }
}

impl From<&Field> for FieldDescriptor {
    fn from(field: &Field) -> Self {
        FieldDescriptor {
            name: field.name.clone(),
            type_token: field.data_type().as_str().to_string(),
            description: field.description.clone(),
            children: field.kind.children().iter().map(FieldDescriptor::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_leaf_mapping() {
        let yaml = "name: field_1\ntype: STRING\ndescription: description_1\n";
        let fd: FieldDescriptor = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(fd, FieldDescriptor::new("field_1", "STRING", "description_1"));
    }

    #[test]
    fn ignores_unknown_keys() {
        let yaml = "name: f\ntype: RECORD\nmode: REPEATED\ndescription: d\n";
        let fd: FieldDescriptor = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(fd.type_token, "RECORD");
        assert!(fd.children.is_empty());
    }

    #[test]
    fn null_fields_decode_as_empty() {
        let yaml = "name: f\ntype: RECORD\ndescription: d\nfields:\n";
        let fd: FieldDescriptor = serde_yaml::from_str(yaml).unwrap();
        assert!(fd.children.is_empty());
    }

    #[test]
    fn missing_keys_decode_as_empty_strings() {
        let fd: FieldDescriptor = serde_yaml::from_str("name: only_name\n").unwrap();
        assert_eq!(fd.name, "only_name");
        assert_eq!(fd.type_token, "");
        assert_eq!(fd.description, "");
    }

    #[test]
    fn empty_children_are_not_serialized() {
        let yaml = serde_yaml::to_string(&FieldDescriptor::new("f", "STRING", "d")).unwrap();
        assert!(!yaml.contains("fields"));
        assert!(yaml.contains("type: STRING"));
    }

    #[test]
    fn descriptor_data_type_parses_token() {
        assert_eq!(
            FieldDescriptor::new("f", "INTEGER", "").data_type(),
            Ok(DataType::Integer)
        );
        assert!(FieldDescriptor::new("f", "integer", "").data_type().is_err());
    }

    #[test]
    fn primitive_kind_rejects_record() {
        assert_eq!(
            FieldKind::primitive(DataType::Record),
            Err(FieldcheckError::CompositeAsPrimitive)
        );
        assert!(Field::primitive("f", "", DataType::Record).is_err());
        assert!(FieldKind::primitive(DataType::Geography).is_ok());
    }

    #[test]
    fn primitive_type_excludes_only_record() {
        for dt in DataType::all() {
            let primitive = PrimitiveType::try_from(*dt);
            assert_eq!(primitive.is_err(), dt.is_composite(), "{dt}");
            if let Ok(p) = primitive {
                assert_eq!(p.data_type(), *dt);
                assert_eq!(p.to_string(), dt.as_str());
            }
        }
    }

    #[test]
    fn depth_and_node_count() {
        let leaf = Field::primitive("leaf", "", DataType::String).unwrap();
        assert_eq!(leaf.depth(), 1);
        assert_eq!(leaf.node_count(), 1);

        let inner = Field::record("inner", "", vec![leaf.clone(), leaf.clone()]);
        let outer = Field::record("outer", "", vec![inner, leaf]);
        assert_eq!(outer.depth(), 3);
        assert_eq!(outer.node_count(), 5);
        assert_eq!(Field::record("empty", "", vec![]).depth(), 1);
    }

    #[test]
    fn typed_field_converts_back_to_descriptor() {
        let field = Field::record(
            "r",
            "a record",
            vec![Field::primitive("x", "an int", DataType::Integer).unwrap()],
        );
        let fd = FieldDescriptor::from(&field);
        assert_eq!(
            fd,
            FieldDescriptor::new("r", "RECORD", "a record")
                .with_children(vec![FieldDescriptor::new("x", "INTEGER", "an int")])
        );
    }
}
