//! # jsv-schema: Keyword Validation
//!
//! Compiles the `exclusiveMaximum` keyword into an immutable validator and
//! applies it to document nodes.
//!
//! ## Compilation (`threshold`)
//!
//! [`ThresholdRule::compile`] turns a schema bound into one of three rules:
//! a machine-integer comparison (bound fits `i64`, parent declares
//! `integer`), an exact decimal comparison with infinity handling, or a
//! dynamic reference (`"$.limits.max"`) resolved against each document.
//! A bound that is none of these is a [`SchemaDefinitionError`].
//!
//! ## Validation (`exclusive_maximum`)
//!
//! [`ExclusiveMaximumValidator::validate`] returns at most one
//! [`ValidationMessage`]. It never fails at runtime: non-numeric values,
//! unresolvable dynamic bounds and infinities are ordinary outcomes.
//!
//! ## Crate Policy
//!
//! - Depends only on `jsv-core` internally.
//! - Compiled validators are `Send + Sync` and never mutated after
//!   construction.
//! - Finite numbers are compared exactly; `f64` is consulted only to
//!   recognise the infinities.

pub mod context;
pub mod error;
pub mod exclusive_maximum;
pub mod keyword;
pub mod message;
pub mod schema;
pub mod threshold;
pub mod types;

pub use context::{ValidationConfig, ValidationContext};
pub use error::SchemaDefinitionError;
pub use exclusive_maximum::ExclusiveMaximumValidator;
pub use keyword::{KeywordCode, EXCLUSIVE_MAXIMUM};
pub use message::ValidationMessage;
pub use schema::ParentSchema;
pub use threshold::{DecimalBound, RuleContext, ThresholdRule};
pub use types::{is_number, is_numeric_text, JsonType};
