//! # exclusiveMaximum
//!
//! The validator a schema compiler builds for each occurrence of the
//! `exclusiveMaximum` keyword. Validation is one step per call:
//!
//! 1. A dynamic bound is resolved against the document root and compiled
//!    into a fresh rule for this call only. The compiled validator is never
//!    mutated, so one instance serves any number of documents and threads.
//! 2. Values that are not numbers (strictly, or loosely when the config
//!    allows numeric strings) are outside the keyword's reach.
//! 3. The rule's crossing test decides whether one message is emitted.

use std::collections::BTreeSet;
use std::sync::Arc;

use jsv_core::Node;

use crate::context::ValidationContext;
use crate::error::SchemaDefinitionError;
use crate::keyword::EXCLUSIVE_MAXIMUM;
use crate::message::ValidationMessage;
use crate::schema::ParentSchema;
use crate::threshold::{RuleContext, ThresholdRule};
use crate::types::is_number;

/// Compiled `exclusiveMaximum` keyword.
#[derive(Debug, Clone)]
pub struct ExclusiveMaximumValidator {
    rule: ThresholdRule,
    context: RuleContext,
    error_code: String,
}

impl ExclusiveMaximumValidator {
    /// Compile the keyword whose value is `bound`.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaDefinitionError`] when `bound` is neither numeric nor
    /// a `$` reference path.
    pub fn new(
        schema_path: impl Into<String>,
        bound: &Node,
        parent: &ParentSchema,
        validation: Arc<ValidationContext>,
    ) -> Result<Self, SchemaDefinitionError> {
        let context = RuleContext::new(schema_path, parent.declared_type(), validation);
        let rule = ThresholdRule::compile(bound, &context)?;
        let error_code = parent
            .custom_error_code(&EXCLUSIVE_MAXIMUM)
            .unwrap_or_else(|| EXCLUSIVE_MAXIMUM.error_code.to_string());
        Ok(Self {
            rule,
            context,
            error_code,
        })
    }

    /// Compile the `exclusiveMaximum` keyword found in `parent`.
    pub fn from_parent(
        schema_path: impl Into<String>,
        parent: &ParentSchema,
        validation: Arc<ValidationContext>,
    ) -> Result<Self, SchemaDefinitionError> {
        let bound = parent.keyword(EXCLUSIVE_MAXIMUM.keyword);
        Self::new(schema_path, bound, parent, validation)
    }

    pub fn rule(&self) -> &ThresholdRule {
        &self.rule
    }

    pub fn schema_path(&self) -> &str {
        &self.context.schema_path
    }

    pub fn error_code(&self) -> &str {
        &self.error_code
    }

    /// Validate `node`, found at `at` inside the document `root`.
    ///
    /// Returns zero or one message.
    pub fn validate(&self, node: &Node, root: &Node, at: &str) -> BTreeSet<ValidationMessage> {
        tracing::debug!(
            at,
            kind = %node.kind(),
            dynamic = self.rule.is_dynamic(),
            "validating exclusiveMaximum"
        );
        self.validate_with(&self.rule, node, root, at)
    }

    fn validate_with(
        &self,
        rule: &ThresholdRule,
        node: &Node,
        root: &Node,
        at: &str,
    ) -> BTreeSet<ValidationMessage> {
        if let ThresholdRule::DynamicReference { path, context } = rule {
            let resolved = path.resolve(root);
            return match ThresholdRule::compile_literal(resolved, context) {
                Ok(fresh) => self.validate_with(&fresh, node, root, at),
                Err(err) => {
                    // A missing or non-numeric target disables the keyword for
                    // this document instead of failing validation. Schema
                    // authoring mistakes in the path are therefore silent
                    // apart from this event.
                    tracing::debug!(
                        path = %path,
                        resolved = %resolved.kind(),
                        error = %err,
                        "dynamic exclusiveMaximum bound did not resolve to a number; keyword skipped"
                    );
                    BTreeSet::new()
                }
            };
        }

        let mut messages = BTreeSet::new();
        if !is_number(node, self.context.validation.config().type_loose) {
            return messages;
        }

        if rule.crosses(node) {
            let threshold = rule.threshold_text().unwrap_or_default().to_string();
            messages.insert(self.context.validation.build_message(
                &EXCLUSIVE_MAXIMUM,
                &self.error_code,
                at,
                &self.context.schema_path,
                vec![threshold],
            ));
        }
        messages
    }
}
