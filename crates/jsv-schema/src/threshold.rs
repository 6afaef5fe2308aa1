//! # Threshold Rules
//!
//! A `ThresholdRule` is the compiled form of an `exclusiveMaximum` bound.
//! It is built once per schema occurrence of the keyword and answers one
//! question for a candidate node: does the value reach the bound?
//! Reaching it (`candidate >= bound`) is a violation; only strictly-less
//! passes.
//!
//! ## Variants
//!
//! | variant | built when | compares by |
//! |---------|------------|-------------|
//! | `FixedInteger` | bound fits `i64` and the parent declares `integer` | machine integers, exact big integers or exact decimals, by candidate kind |
//! | `ArbitraryPrecision` | any other numeric bound | exact decimals, after the infinity short-circuits |
//! | `DynamicReference` | bound is a `$` path string | nothing; the validator resolves and recompiles per document |
//!
//! No comparison routes a finite value through `f64`. Binary floats are
//! only inspected to detect the infinities.

use std::str::FromStr;
use std::sync::Arc;

use bigdecimal::BigDecimal;
use jsv_core::{Node, ReferencePath};
use num_bigint::BigInt;

use crate::context::ValidationContext;
use crate::error::SchemaDefinitionError;
use crate::keyword::EXCLUSIVE_MAXIMUM;
use crate::types::JsonType;

/// Compilation context captured by a rule so it can be rebuilt later.
#[derive(Debug, Clone)]
pub struct RuleContext {
    /// Location of the keyword within the schema.
    pub schema_path: String,
    /// The parent schema's declared type.
    pub declared: Option<JsonType>,
    pub validation: Arc<ValidationContext>,
}

impl RuleContext {
    pub fn new(
        schema_path: impl Into<String>,
        declared: Option<JsonType>,
        validation: Arc<ValidationContext>,
    ) -> Self {
        Self {
            schema_path: schema_path.into(),
            declared,
            validation,
        }
    }

    fn not_a_number(&self) -> SchemaDefinitionError {
        SchemaDefinitionError::NotANumber {
            keyword: EXCLUSIVE_MAXIMUM.keyword,
            schema_path: self.schema_path.clone(),
        }
    }
}

/// A decimal bound, or one of the infinities.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecimalBound {
    PositiveInfinity,
    NegativeInfinity,
    Finite(BigDecimal),
}

/// Compiled `exclusiveMaximum` bound.
#[derive(Debug, Clone)]
pub enum ThresholdRule {
    FixedInteger {
        bound: i64,
        text: String,
    },
    ArbitraryPrecision {
        bound: DecimalBound,
        /// Literal text of the bound, as reported in messages.
        text: String,
    },
    DynamicReference {
        path: ReferencePath,
        context: RuleContext,
    },
}

impl ThresholdRule {
    /// Compile a bound taken from a schema.
    ///
    /// A string beginning with `$` compiles to `DynamicReference`. Any other
    /// non-numeric bound is a [`SchemaDefinitionError::NotANumber`].
    pub fn compile(bound: &Node, context: &RuleContext) -> Result<Self, SchemaDefinitionError> {
        if !bound.is_number() {
            if let Node::String(text) = bound {
                if let Some(path) = ReferencePath::parse(text) {
                    tracing::trace!(
                        schema_path = %context.schema_path,
                        path = %path,
                        "compiled dynamic exclusiveMaximum bound"
                    );
                    return Ok(ThresholdRule::DynamicReference {
                        path,
                        context: context.clone(),
                    });
                }
            }
            return Err(context.not_a_number());
        }
        Self::compile_literal(bound, context)
    }

    /// Compile a numeric bound. Strings are rejected even when they look
    /// like reference paths, so a resolved bound never compiles back into
    /// a `DynamicReference`.
    pub fn compile_literal(bound: &Node, context: &RuleContext) -> Result<Self, SchemaDefinitionError> {
        if !bound.is_number() {
            return Err(context.not_a_number());
        }

        if context.declared == Some(JsonType::Integer) && bound.is_integral() {
            if let Some(value) = bound.as_i64() {
                tracing::trace!(schema_path = %context.schema_path, bound = value, "compiled fixed-integer bound");
                return Ok(ThresholdRule::FixedInteger {
                    bound: value,
                    text: value.to_string(),
                });
            }
        }

        let text = bound.as_text().into_owned();
        let decimal = if bound.is_positive_infinity() {
            DecimalBound::PositiveInfinity
        } else if bound.is_negative_infinity() {
            DecimalBound::NegativeInfinity
        } else {
            match bound.to_big_decimal() {
                Some(value) => DecimalBound::Finite(value),
                None => {
                    return Err(SchemaDefinitionError::Unrepresentable {
                        keyword: EXCLUSIVE_MAXIMUM.keyword,
                        schema_path: context.schema_path.clone(),
                        text,
                    })
                }
            }
        };
        tracing::trace!(schema_path = %context.schema_path, bound = %text, "compiled arbitrary-precision bound");
        Ok(ThresholdRule::ArbitraryPrecision { bound: decimal, text })
    }

    /// True when `node` reaches or exceeds the bound.
    ///
    /// Always false for `DynamicReference`; those are decided after
    /// resolution. Values with no numeric reading never cross.
    pub fn crosses(&self, node: &Node) -> bool {
        match self {
            ThresholdRule::FixedInteger { bound, .. } => integer_crosses(*bound, node),
            ThresholdRule::ArbitraryPrecision { bound, .. } => match bound {
                DecimalBound::PositiveInfinity => false,
                DecimalBound::NegativeInfinity => true,
                DecimalBound::Finite(bound) => decimal_crosses(bound, node),
            },
            ThresholdRule::DynamicReference { .. } => false,
        }
    }

    /// Text of the bound for messages; `None` until a dynamic bound is resolved.
    pub fn threshold_text(&self) -> Option<&str> {
        match self {
            ThresholdRule::FixedInteger { text, .. } | ThresholdRule::ArbitraryPrecision { text, .. } => {
                Some(text.as_str())
            }
            ThresholdRule::DynamicReference { .. } => None,
        }
    }

    /// The reference path of a dynamic bound.
    pub fn path(&self) -> Option<&ReferencePath> {
        match self {
            ThresholdRule::DynamicReference { path, .. } => Some(path),
            _ => None,
        }
    }

    pub fn is_dynamic(&self) -> bool {
        matches!(self, ThresholdRule::DynamicReference { .. })
    }

    pub fn variant_name(&self) -> &'static str {
        match self {
            ThresholdRule::FixedInteger { .. } => "fixed-integer",
            ThresholdRule::ArbitraryPrecision { .. } => "arbitrary-precision",
            ThresholdRule::DynamicReference { .. } => "dynamic-reference",
        }
    }
}

fn integer_crosses(bound: i64, node: &Node) -> bool {
    match node {
        // The big-integer tag says nothing about width; compare unbounded.
        Node::BigInt(value) => *value >= BigInt::from(bound),
        Node::String(text) => match BigDecimal::from_str(text) {
            Ok(value) => value >= BigDecimal::from(bound),
            Err(_) => false,
        },
        Node::Int(value) => bound <= *value,
        // Fractions under an `integer` declaration: exact, never truncated.
        other => decimal_crosses(&BigDecimal::from(bound), other),
    }
}

fn decimal_crosses(bound: &BigDecimal, node: &Node) -> bool {
    if node.is_negative_infinity() {
        return false;
    }
    if node.is_positive_infinity() {
        return true;
    }
    node.to_big_decimal().is_some_and(|value| &value >= bound)
}
