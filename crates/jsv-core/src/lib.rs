//! # jsv-core: Documents and Reference Paths
//!
//! Leaf crate of the jsv workspace. It defines the document model every
//! validator reads and the path syntax dynamic bounds are written in.
//!
//! ## Key Types
//!
//! - [`Node`]: immutable JSON-like value. Numbers keep their kind
//!   (`Int`, `BigInt`, `Decimal`, `Float`) and their exact value; JSON
//!   numerals are never routed through `f64`.
//! - [`ReferencePath`] and [`resolve`]: `$`-rooted dot paths into a
//!   document. Absence resolves to [`MISSING`] instead of failing.
//! - [`NodeError`]: ingestion failures from JSON/YAML text.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `jsv-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - Inspection and resolution of a built tree are total functions.

pub mod error;
pub mod node;
pub mod path;

pub use error::NodeError;
pub use node::{Node, NodeKind, MISSING};
pub use path::{resolve, ReferencePath, REFERENCE_SENTINEL};
