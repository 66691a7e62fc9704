//! Turn a [`Doc`](crate::Doc) into output text.
//!
//! Rendering walks the document once, producing a sequence of [`Fragment`]s (see
//! [`Fragments`]), and hands each one to a [`Sink`]. This crate supplies two sinks:
//! [`PlainText`], which collects a string, and [`IoSink`], which wraps any [`std::io::Write`]. With
//! the `async` feature, [`render_async`] writes to a tokio `AsyncWrite` instead.

mod fragments;
mod plain_text;
mod render;
#[cfg(feature = "async")]
mod render_async;
mod sink;

pub use fragments::{Fragment, Fragments};
pub use plain_text::{IoSink, PlainText};
pub use render::{render, render_to_string};
#[cfg(feature = "async")]
pub use render_async::render_async;
pub use sink::Sink;
