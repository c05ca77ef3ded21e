//! # Data Type Vocabulary: Single Source of Truth
//!
//! Defines the `DataType` enum with all 12 supported type tokens. Every
//! stage of the pipeline parses and prints tokens through this enum, so the
//! vocabulary seen by decoding and by validation cannot drift apart.
//!
//! The token set follows the BigQuery column types. `RECORD` is the only
//! composite member; the other eleven are primitive.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::FieldcheckError;

/// All supported field data types.
///
/// | Token | Kind |
/// |-------|------|
/// | `BOOLEAN` | primitive |
/// | `BYTES` | primitive |
/// | `DATE` | primitive |
/// | `DATETIME` | primitive |
/// | `FLOAT` | primitive |
/// | `GEOGRAPHY` | primitive |
/// | `INTEGER` | primitive |
/// | `NUMERIC` | primitive |
/// | `RECORD` | composite |
/// | `STRING` | primitive |
/// | `TIME` | primitive |
/// | `TIMESTAMP` | primitive |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DataType {
    Boolean,
    Bytes,
    Date,
    Datetime,
    Float,
    Geography,
    Integer,
    Numeric,
    /// Composite type holding nested fields.
    Record,
    String,
    Time,
    Timestamp,
}

/// Number of tokens in the vocabulary.
pub const DATA_TYPE_COUNT: usize = 12;

impl DataType {
    /// Returns every member of the vocabulary in alphabetical token order.
    pub fn all() -> &'static [DataType] {
        &[
            Self::Boolean,
            Self::Bytes,
            Self::Date,
            Self::Datetime,
            Self::Float,
            Self::Geography,
            Self::Integer,
            Self::Numeric,
            Self::Record,
            Self::String,
            Self::Time,
            Self::Timestamp,
        ]
    }

    /// Returns the token exactly as it appears in schema documents.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Boolean => "BOOLEAN",
            Self::Bytes => "BYTES",
            Self::Date => "DATE",
            Self::Datetime => "DATETIME",
            Self::Float => "FLOAT",
            Self::Geography => "GEOGRAPHY",
            Self::Integer => "INTEGER",
            Self::Numeric => "NUMERIC",
            Self::Record => "RECORD",
            Self::String => "STRING",
            Self::Time => "TIME",
            Self::Timestamp => "TIMESTAMP",
        }
    }

    /// True for `RECORD`, the only type allowed to hold nested fields.
    pub fn is_composite(&self) -> bool {
        matches!(self, Self::Record)
    }
}

impl std::fmt::Display for DataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DataType {
    type Err = FieldcheckError;

    /// Parse a token. Matching is exact: `"string"` and `"bool"` are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "BOOLEAN" => Ok(Self::Boolean),
            "BYTES" => Ok(Self::Bytes),
            "DATE" => Ok(Self::Date),
            "DATETIME" => Ok(Self::Datetime),
            "FLOAT" => Ok(Self::Float),
            "GEOGRAPHY" => Ok(Self::Geography),
            "INTEGER" => Ok(Self::Integer),
            "NUMERIC" => Ok(Self::Numeric),
            "RECORD" => Ok(Self::Record),
            "STRING" => Ok(Self::String),
            "TIME" => Ok(Self::Time),
            "TIMESTAMP" => Ok(Self::Timestamp),
            other => Err(FieldcheckError::UnknownDataType(other.to_string())),
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Any string that is not exactly a vocabulary token fails to parse.
        #[test]
        fn non_members_never_parse(s in "[A-Za-z_]{0,12}") {
            let is_member = DataType::all().iter().any(|d| d.as_str() == s);
            prop_assert_eq!(s.parse::<DataType>().is_ok(), is_member);
        }

        /// Lowercasing a token always makes it unknown.
        #[test]
        fn lowercased_tokens_are_unknown(idx in 0usize..DATA_TYPE_COUNT) {
            let token = DataType::all()[idx].as_str().to_lowercase();
            prop_assert!(token.parse::<DataType>().is_err());
        }
    }
}
