//! Build documents out of small combinators, then render them with exact column alignment.
//!
//! There is no line width and no search for a best layout: where the lines break and how far they
//! are indented is decided entirely by how the document was put together.
//!
//! ```
//! use aligned_doc::{docs, hcat, indent, render_to_string};
//!
//! let doc = hcat(docs!["abc", indent(["hello", "to", "world"]), "xyz"]);
//! assert_eq!(render_to_string(&doc), "abchello\n   to\n   worldxyz");
//! ```

mod doc;
mod error;
mod geometry;
mod rendering;

pub mod doc_constructors;
pub mod examples;

pub use doc::{Doc, DocNode, Literal};
pub use doc_constructors::{
    blank, comma, empty, hcat, hsep, hsep_with, indent, join, join_with, join_with_last, nest,
    number, p, pp, pp_with, punctuate, space, text, try_nest, vcat, Integer,
};
pub use error::DocError;
pub use geometry::{str_width, Col, Width};
#[cfg(feature = "async")]
pub use rendering::render_async;
pub use rendering::{render, render_to_string, Fragment, Fragments, IoSink, PlainText, Sink};
