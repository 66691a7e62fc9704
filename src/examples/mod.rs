//! Sample documents, built with the combinators in this crate.
//!
//! - [`Json`](json::Json): JSON values, one container element per line.
//! - [`Signature`](signature::Signature): function signatures with aligned parameters.

pub mod json;
pub mod signature;
