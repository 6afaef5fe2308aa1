//! # Error Types
//!
//! Errors raised while ingesting documents into the [`Node`](crate::Node)
//! model. Resolution and inspection of an already-built tree never fail:
//! absence is represented by [`Node::Missing`](crate::Node::Missing).

use thiserror::Error;

/// Error while building a [`Node`](crate::Node) tree from JSON or YAML.
#[derive(Error, Debug)]
pub enum NodeError {
    /// The JSON text could not be parsed.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The YAML text could not be parsed.
    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A YAML mapping used a key that has no field-name equivalent.
    #[error("unsupported mapping key type: {0}")]
    UnsupportedKey(String),

    /// A numeral could not be read as an integer or decimal.
    #[error("invalid numeral '{0}'")]
    InvalidNumber(String),
}
