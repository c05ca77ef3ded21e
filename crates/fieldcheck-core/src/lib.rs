//! # fieldcheck-core: Foundational Types
//!
//! Defines the type vocabulary and the two field trees every other crate in
//! the workspace works with. It depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Single `DataType` enum.** One definition of the closed vocabulary,
//!    used by decoding, validation, typed resolution and the CLI. Tokens
//!    are matched exactly, case-sensitive, with no aliases.
//!
//! 2. **Two trees.** [`FieldDescriptor`] is the decode shape: it carries the
//!    raw `type` token as a string so that unsupported tokens survive
//!    decoding and are reported by validation. [`Field`] is the typed tree
//!    produced after validation, where a primitive field cannot hold
//!    children by construction.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `fieldcheck-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod data_type;
pub mod error;
pub mod field;

pub use data_type::{DataType, DATA_TYPE_COUNT};
pub use error::FieldcheckError;
pub use field::{Field, FieldDescriptor, FieldKind, PrimitiveType};
