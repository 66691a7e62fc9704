//! Walk a document tree, producing the pieces of output text in order.

use crate::doc::{Doc, DocNode};
use crate::geometry::{Col, Width};
use std::borrow::Cow;
use std::slice;

const SPACES: &str = "                                                                ";

/// A single piece of output. Every `Text` node produces one fragment, as does every run of
/// padding and every line break.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fragment<'d> {
    Text(&'d str),
    Spaces(Width),
    Newline,
}

impl<'d> Fragment<'d> {
    pub fn as_str(&self) -> Cow<'d, str> {
        match self {
            Fragment::Text(s) => Cow::Borrowed(*s),
            Fragment::Spaces(n) if *n <= SPACES.len() => Cow::Borrowed(&SPACES[..*n]),
            Fragment::Spaces(n) => Cow::Owned(" ".repeat(*n)),
            Fragment::Newline => Cow::Borrowed("\n"),
        }
    }
}

/// An iterator over the [`Fragment`]s of a rendered document, in output order.
///
/// Tracks two positions while walking the tree. The _margin_ is the column at which any new line
/// inside the current subtree must start, and `col` is the column the previous fragment ended at.
/// The walk is depth first and left to right, and is driven by an explicit stack so that very deep
/// documents can't overflow the call stack.
pub struct Fragments<'d> {
    /// Last element is the next task.
    stack: Vec<Task<'d>>,
    col: Col,
}

enum Task<'d> {
    /// Render a document with the given margin.
    Doc(&'d Doc, Col),
    /// Render the remaining items of a `Vertical` or `Indent`, one per line.
    Lines {
        items: slice::Iter<'d, Doc>,
        margin: Col,
        first: bool,
    },
    /// Pad to the margin, then render one item of a `Vertical` or `Indent`.
    Line(&'d Doc, Col),
}

impl<'d> Fragments<'d> {
    pub fn new(doc: &'d Doc) -> Fragments<'d> {
        Fragments {
            stack: vec![Task::Doc(doc, 0)],
            col: 0,
        }
    }

    /// The column the most recent fragment ended at, as tracked by the renderer. After a `Nest`,
    /// this is the nest's margin even if the cursor was already past it.
    pub fn col(&self) -> Col {
        self.col
    }

    fn pad_to(&mut self, margin: Col) -> Option<Fragment<'d>> {
        if self.col < margin {
            let spaces = margin - self.col;
            self.col = margin;
            Some(Fragment::Spaces(spaces))
        } else {
            None
        }
    }

    /// Process one task, possibly producing a fragment.
    fn step(&mut self, task: Task<'d>) -> Option<Fragment<'d>> {
        use DocNode::*;

        match task {
            Task::Doc(doc, margin) => match doc.node() {
                Empty => None,
                Text(lit) => {
                    self.col += lit.len();
                    Some(Fragment::Text(lit.str()))
                }
                Vertical(items) => {
                    self.stack.push(Task::Lines {
                        items: items.iter(),
                        margin,
                        first: true,
                    });
                    None
                }
                Indent(items) => {
                    self.stack.push(Task::Lines {
                        items: items.iter(),
                        margin: self.col,
                        first: true,
                    });
                    None
                }
                Plus(left, right) => {
                    self.stack.push(Task::Doc(right, margin));
                    self.stack.push(Task::Doc(left, margin));
                    None
                }
                PlusSep(left, sep, right) => {
                    match (left.is_empty(), right.is_empty()) {
                        (true, true) => (),
                        (false, true) => self.stack.push(Task::Doc(left, margin)),
                        (true, false) => self.stack.push(Task::Doc(right, margin)),
                        (false, false) => {
                            self.stack.push(Task::Doc(right, margin));
                            self.stack.push(Task::Doc(sep, margin));
                            self.stack.push(Task::Doc(left, margin));
                        }
                    }
                    None
                }
                Nest(offset, inner) => {
                    let new_margin = margin + offset;
                    self.stack.push(Task::Doc(inner, new_margin));
                    let padding = self.pad_to(new_margin);
                    // The nested block starts at its margin, however far the cursor really is.
                    self.col = new_margin;
                    padding
                }
            },
            Task::Lines {
                mut items,
                margin,
                first,
            } => {
                let item = items.find(|item| !item.is_empty())?;
                self.stack.push(Task::Lines {
                    items,
                    margin,
                    first: false,
                });
                self.stack.push(Task::Line(item, margin));
                if first {
                    None
                } else {
                    self.col = 0;
                    Some(Fragment::Newline)
                }
            }
            Task::Line(item, margin) => {
                self.stack.push(Task::Doc(item, margin));
                self.pad_to(margin)
            }
        }
    }
}

impl<'d> Iterator for Fragments<'d> {
    type Item = Fragment<'d>;

    fn next(&mut self) -> Option<Fragment<'d>> {
        while let Some(task) = self.stack.pop() {
            if let Some(fragment) = self.step(task) {
                return Some(fragment);
            }
        }
        None
    }
}
