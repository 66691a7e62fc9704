use crate::geometry::{str_width, Width};
use crate::rendering::Fragments;
use std::fmt;
use std::ops::{Add, Shr};
use std::sync::Arc;

#[cfg(feature = "serialization")]
use serde::{Deserialize, Serialize};

/// An immutable document: a description of formatted output whose line breaks and padding are
/// resolved only when it is rendered.
///
/// A `Doc` is a cheap handle to a shared node. Cloning it shares the subtree rather than copying
/// it, so the same piece (like [`space()`](crate::space)) can appear in many places, and the same
/// tree can be rendered from several threads at once.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Doc(Arc<DocNode>);

/// The kinds of document node. This set is closed.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum DocNode {
    /// Display nothing. Dropped from vertical lists, and the identity for concatenation.
    Empty,
    /// Literal text, printed verbatim. Should not contain a newline: a newline inside a literal
    /// is printed, but the renderer does not know that it started a new line.
    Text(Literal),
    /// Each item on its own line. Every line starts at the margin in effect when this node is
    /// reached.
    Vertical(Vec<Doc>),
    /// Each item on its own line. Every line, including the first, starts at the column this node
    /// was reached at.
    Indent(Vec<Doc>),
    /// Display both documents. The first character of the right one immediately follows the last
    /// character of the left one.
    Plus(Doc, Doc),
    /// `PlusSep(left, sep, right)`: display `left`, then `sep`, then `right`. If either side is
    /// `Empty`, only the other side is displayed, without the separator.
    PlusSep(Doc, Doc, Doc),
    /// Move the margin of the contained document this many columns to the right of the ambient
    /// margin, padding with spaces up to it.
    Nest(Width, Doc),
}

/// A piece of literal text, with its width precomputed.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serialization",
    derive(Serialize, Deserialize),
    serde(from = "String", into = "String")
)]
pub struct Literal {
    string: String,
    /// Number of characters (*not* num bytes!)
    len: Width,
}

impl Literal {
    pub fn new(s: impl Into<String>) -> Literal {
        let string = s.into();
        let len = str_width(&string);
        Literal { string, len }
    }

    pub fn len(&self) -> Width {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn str(&self) -> &str {
        &self.string
    }
}

impl From<String> for Literal {
    fn from(string: String) -> Literal {
        Literal::new(string)
    }
}

impl From<Literal> for String {
    fn from(lit: Literal) -> String {
        lit.string
    }
}

impl Doc {
    /// Wrap a node. This performs no simplification; prefer the constructors in
    /// [`doc_constructors`](crate::doc_constructors), which do.
    pub fn new(node: DocNode) -> Doc {
        Doc(Arc::new(node))
    }

    pub fn node(&self) -> &DocNode {
        &self.0
    }

    /// Is this exactly the `Empty` document? (`Text("")` is _not_ empty: in a vertical list it
    /// still takes up a line.)
    pub fn is_empty(&self) -> bool {
        matches!(self.node(), DocNode::Empty)
    }

    /// Concatenate horizontally, with nothing in between. `Empty` on either side is dropped.
    pub fn p(self, other: impl Into<Doc>) -> Doc {
        let other = other.into();
        if self.is_empty() {
            other
        } else if other.is_empty() {
            self
        } else {
            Doc::new(DocNode::Plus(self, other))
        }
    }

    /// Concatenate horizontally, with a space in between if both sides are non-empty.
    pub fn pp(self, other: impl Into<Doc>) -> Doc {
        self.pp_with(other, crate::space())
    }

    /// Concatenate horizontally, with `sep` in between if both sides are non-empty. A separator
    /// that displays nothing (`Empty` or the empty literal) degrades this to [`p`](Doc::p).
    pub fn pp_with(self, other: impl Into<Doc>, sep: impl Into<Doc>) -> Doc {
        let other = other.into();
        let sep = sep.into();
        if self.is_empty() {
            return other;
        }
        if other.is_empty() {
            return self;
        }
        match sep.node() {
            DocNode::Empty => self.p(other),
            DocNode::Text(lit) if lit.is_empty() => self.p(other),
            _ => Doc::new(DocNode::PlusSep(self, sep, other)),
        }
    }
}

impl From<DocNode> for Doc {
    fn from(node: DocNode) -> Doc {
        Doc::new(node)
    }
}

impl From<Literal> for Doc {
    fn from(lit: Literal) -> Doc {
        Doc::new(DocNode::Text(lit))
    }
}

impl From<&str> for Doc {
    fn from(s: &str) -> Doc {
        Doc::from(Literal::new(s))
    }
}

impl From<String> for Doc {
    fn from(s: String) -> Doc {
        Doc::from(Literal::new(s))
    }
}

impl From<&String> for Doc {
    fn from(s: &String) -> Doc {
        Doc::from(Literal::new(s.as_str()))
    }
}

impl From<&Doc> for Doc {
    fn from(doc: &Doc) -> Doc {
        doc.clone()
    }
}

/// Displays the rendered document.
impl fmt::Display for Doc {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for fragment in Fragments::new(self) {
            f.write_str(&fragment.as_str())?;
        }
        Ok(())
    }
}

impl<D: Into<Doc>> Add<D> for Doc {
    type Output = Doc;

    /// Shorthand for [`p`](Doc::p).
    fn add(self, other: D) -> Doc {
        self.p(other)
    }
}

impl Shr<Doc> for Width {
    type Output = Doc;

    /// Shorthand for [`nest`](crate::nest).
    fn shr(self, doc: Doc) -> Doc {
        crate::nest(self, doc)
    }
}
