//! # jsv-cli: Command-Line Interface
//!
//! ## Subcommands
//!
//! - `check`: validate one value of a document against the
//!   `exclusiveMaximum` keyword of a schema object.
//!
//! ## Crate Policy
//!
//! - Argument parsing lives in `main.rs`; handlers here delegate to
//!   `jsv-schema` and hold no validation logic of their own.
//! - Files are JSON unless their extension is `.yaml`/`.yml`.

pub mod check;
