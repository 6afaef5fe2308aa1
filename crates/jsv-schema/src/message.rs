//! # Validation Messages
//!
//! One message per violated keyword per validated value. Messages are
//! immutable once built and order/compare field by field, so a result set
//! is a `BTreeSet<ValidationMessage>` with a stable iteration order.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::keyword::KeywordCode;

/// A single keyword violation with structured context.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationMessage {
    keyword: String,
    code: String,
    at: String,
    schema_path: String,
    arguments: Vec<String>,
    message: String,
}

impl ValidationMessage {
    /// Build a message for `keyword`, rendering its template.
    pub fn new(
        keyword: &KeywordCode,
        code: impl Into<String>,
        at: impl Into<String>,
        schema_path: impl Into<String>,
        arguments: Vec<String>,
    ) -> Self {
        let at = at.into();
        let message = keyword.format(&at, &arguments);
        Self {
            keyword: keyword.keyword.to_string(),
            code: code.into(),
            at,
            schema_path: schema_path.into(),
            arguments,
            message,
        }
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    /// Error code: the registered one, or the parent schema's override.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Location of the offending value in the document.
    pub fn at(&self) -> &str {
        &self.at
    }

    pub fn schema_path(&self) -> &str {
        &self.schema_path
    }

    pub fn arguments(&self) -> &[String] {
        &self.arguments
    }

    /// Text of the violated threshold (the first argument).
    pub fn threshold(&self) -> Option<&str> {
        self.arguments.first().map(String::as_str)
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ValidationMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}
