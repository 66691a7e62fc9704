//! Functions for building [`Doc`]s.
//!
//! Every function that takes documents accepts anything convertible into a [`Doc`], so raw
//! strings can be passed directly: `vcat(["Hello", "World"])`. To mix strings and documents in a
//! single list, use the [`docs!`](crate::docs) macro.

use crate::doc::{Doc, DocNode, Literal};
use crate::error::DocError;
use crate::geometry::Width;
use once_cell::sync::Lazy;
use std::fmt;

static EMPTY: Lazy<Doc> = Lazy::new(|| Doc::new(DocNode::Empty));
static BLANK: Lazy<Doc> = Lazy::new(|| Doc::from(Literal::new("")));
static SPACE: Lazy<Doc> = Lazy::new(|| Doc::from(Literal::new(" ")));
static COMMA: Lazy<Doc> = Lazy::new(|| Doc::from(Literal::new(",")));

/// Build a `Vec<Doc>` from a mix of documents and strings.
///
/// ```
/// use aligned_doc::{docs, render_to_string, text, vcat};
///
/// let doc = vcat(docs!["Hello", text("World")]);
/// assert_eq!(render_to_string(&doc), "Hello\nWorld");
/// ```
#[macro_export]
macro_rules! docs {
    ($($item:expr),* $(,)?) => {
        vec![$($crate::Doc::from($item)),*]
    };
}

/// Display nothing.
pub fn empty() -> Doc {
    EMPTY.clone()
}

/// The empty literal. Unlike [`empty()`], it still occupies a line in a vertical list.
pub fn blank() -> Doc {
    BLANK.clone()
}

pub fn space() -> Doc {
    SPACE.clone()
}

pub fn comma() -> Doc {
    COMMA.clone()
}

/// Literal text. Should not contain a newline; use [`vcat`] or [`indent`] for multiple lines.
pub fn text(s: impl Into<String>) -> Doc {
    Doc::from(Literal::new(s))
}

/// A primitive integer type, which [`number`] can display.
pub trait Integer: fmt::Display {}

macro_rules! impl_integer {
    ($($int:ty),*) => {
        $(impl Integer for $int {})*
    };
}

impl_integer!(i8, i16, i32, i64, i128, isize);
impl_integer!(u8, u16, u32, u64, u128, usize);

/// An integer, in decimal.
pub fn number<N: Integer>(n: N) -> Doc {
    text(n.to_string())
}

/// Put each item on its own line, aligned to the ambient margin.
pub fn vcat<I>(items: I) -> Doc
where
    I: IntoIterator,
    I::Item: Into<Doc>,
{
    Doc::new(DocNode::Vertical(
        items.into_iter().map(Into::into).collect(),
    ))
}

/// Put each item on its own line, aligned to the column at which this document starts.
pub fn indent<I>(items: I) -> Doc
where
    I: IntoIterator,
    I::Item: Into<Doc>,
{
    Doc::new(DocNode::Indent(items.into_iter().map(Into::into).collect()))
}

/// Concatenate horizontally, with nothing in between.
pub fn hcat<I>(items: I) -> Doc
where
    I: IntoIterator,
    I::Item: Into<Doc>,
{
    let items = items.into_iter().map(Into::into).collect::<Vec<Doc>>();
    items
        .into_iter()
        .rev()
        .reduce(|rest, item| item.p(rest))
        .unwrap_or_else(empty)
}

/// Concatenate horizontally, separated by spaces.
pub fn hsep<I>(items: I) -> Doc
where
    I: IntoIterator,
    I::Item: Into<Doc>,
{
    hsep_with(items, space())
}

/// Concatenate horizontally, separated by `sep`. Empty items get no separator.
pub fn hsep_with<I>(items: I, sep: impl Into<Doc>) -> Doc
where
    I: IntoIterator,
    I::Item: Into<Doc>,
{
    let sep = sep.into();
    let items = items.into_iter().map(Into::into).collect::<Vec<Doc>>();
    items
        .into_iter()
        .rev()
        .reduce(|rest, item| item.pp_with(rest, sep.clone()))
        .unwrap_or_else(empty)
}

/// Function form of [`Doc::p`].
pub fn p(left: impl Into<Doc>, right: impl Into<Doc>) -> Doc {
    left.into().p(right)
}

/// Function form of [`Doc::pp`].
pub fn pp(left: impl Into<Doc>, right: impl Into<Doc>) -> Doc {
    left.into().pp(right)
}

/// Function form of [`Doc::pp_with`].
pub fn pp_with(left: impl Into<Doc>, right: impl Into<Doc>, sep: impl Into<Doc>) -> Doc {
    left.into().pp_with(right, sep)
}

/// Move the margin of `doc` `offset` columns to the right of the ambient margin. If the cursor is
/// short of the new margin, it is padded with spaces.
pub fn nest(offset: Width, doc: impl Into<Doc>) -> Doc {
    Doc::new(DocNode::Nest(offset, doc.into()))
}

/// Like [`nest`], for a signed offset. Negative offsets are rejected.
pub fn try_nest(offset: i64, doc: impl Into<Doc>) -> Result<Doc, DocError> {
    let offset = Width::try_from(offset).map_err(|_| DocError::NegativeOffset(offset))?;
    Ok(nest(offset, doc))
}

/// Append `sep` to every item except the last.
pub fn punctuate<I>(sep: impl Into<Doc>, items: I) -> Vec<Doc>
where
    I: IntoIterator,
    I::Item: Into<Doc>,
{
    let sep = sep.into();
    let mut items = items.into_iter().map(Into::into).collect::<Vec<Doc>>();
    if let Some((_last, init)) = items.split_last_mut() {
        for item in init {
            *item = item.clone().p(sep.clone());
        }
    }
    items
}

/// Join items with spaces. No items gives [`blank()`].
pub fn join<I>(items: I) -> Doc
where
    I: IntoIterator,
    I::Item: Into<Doc>,
{
    join_with(items, space())
}

/// Join items with `sep` between each consecutive pair.
pub fn join_with<I>(items: I, sep: impl Into<Doc>) -> Doc
where
    I: IntoIterator,
    I::Item: Into<Doc>,
{
    let sep = sep.into();
    join_impl(items, sep.clone(), sep)
}

/// Join items with `sep`, except that `last` goes between the final two items:
///
/// ```
/// use aligned_doc::{join_with_last, render_to_string};
///
/// let doc = join_with_last(["a", "b", "c"], ", ", " or ");
/// assert_eq!(render_to_string(&doc), "a, b or c");
/// ```
pub fn join_with_last<I>(items: I, sep: impl Into<Doc>, last: impl Into<Doc>) -> Doc
where
    I: IntoIterator,
    I::Item: Into<Doc>,
{
    join_impl(items, sep.into(), last.into())
}

fn join_impl<I>(items: I, sep: Doc, last: Doc) -> Doc
where
    I: IntoIterator,
    I::Item: Into<Doc>,
{
    let items = items.into_iter().map(Into::into).collect::<Vec<Doc>>();
    let len = items.len();
    let mut iter = items.into_iter();
    let mut joined = match iter.next() {
        None => return blank(),
        Some(first) => first,
    };
    for (i, item) in iter.enumerate() {
        let sep = if i + 2 == len { &last } else { &sep };
        joined = joined.p(sep).p(item);
    }
    joined
}
