//! # Validation Context
//!
//! `ValidationConfig` is the user-facing configuration; it deserializes
//! from the camelCase keys of a JSON or YAML config file. A
//! `ValidationContext` wraps it, is shared behind an `Arc` by every
//! compiled rule, and builds the messages those rules emit.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::keyword::KeywordCode;
use crate::message::ValidationMessage;

/// Validation behavior switches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ValidationConfig {
    /// Accept numeric strings (`"12.5"`) wherever a number is expected.
    pub type_loose: bool,
}

/// Read-only state shared by all rules compiled from one schema.
#[derive(Debug, Default)]
pub struct ValidationContext {
    config: ValidationConfig,
}

impl ValidationContext {
    pub fn new(config: ValidationConfig) -> Self {
        Self { config }
    }

    /// Wrap `config` for sharing between compiled rules.
    pub fn shared(config: ValidationConfig) -> Arc<Self> {
        Arc::new(Self::new(config))
    }

    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Build the message for a violated `keyword`.
    pub fn build_message(
        &self,
        keyword: &KeywordCode,
        code: &str,
        at: &str,
        schema_path: &str,
        arguments: Vec<String>,
    ) -> ValidationMessage {
        ValidationMessage::new(keyword, code, at, schema_path, arguments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keyword::EXCLUSIVE_MAXIMUM;

    #[test]
    fn test_config_defaults_to_strict_types() {
        let config: ValidationConfig = serde_json::from_str("{}").unwrap();
        assert!(!config.type_loose);
    }

    #[test]
    fn test_config_reads_camel_case_yaml() {
        let config: ValidationConfig = serde_yaml::from_str("typeLoose: true\n").unwrap();
        assert!(config.type_loose);
    }

    #[test]
    fn test_build_message_uses_given_code() {
        let ctx = ValidationContext::default();
        let msg = ctx.build_message(&EXCLUSIVE_MAXIMUM, "E42", "$.x", "#/exclusiveMaximum", vec!["3".into()]);
        assert_eq!(msg.code(), "E42");
        assert_eq!(msg.message(), "$.x: must have an exclusive maximum value of 3");
    }
}
