//! # Schema Definition Errors
//!
//! Raised while a keyword is compiled, never while a document is validated.
//! A schema that produces one of these is malformed; the caller rejects the
//! schema or skips the keyword.

use thiserror::Error;

/// A keyword's bound cannot be compiled into a rule.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaDefinitionError {
    /// The bound is neither numeric nor a `$` reference path.
    #[error("{keyword} value is not a number")]
    NotANumber {
        /// Keyword whose value was rejected.
        keyword: &'static str,
        /// Location of the keyword within the schema.
        schema_path: String,
    },

    /// The bound is numeric but has no exact decimal value (`NaN`).
    #[error("{keyword} value {text} cannot be compared exactly")]
    Unrepresentable {
        /// Keyword whose value was rejected.
        keyword: &'static str,
        /// Location of the keyword within the schema.
        schema_path: String,
        /// Text form of the rejected bound.
        text: String,
    },
}

impl SchemaDefinitionError {
    /// Location of the offending keyword within the schema.
    pub fn schema_path(&self) -> &str {
        match self {
            SchemaDefinitionError::NotANumber { schema_path, .. }
            | SchemaDefinitionError::Unrepresentable { schema_path, .. } => schema_path,
        }
    }
}
