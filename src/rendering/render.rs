use super::fragments::{Fragment, Fragments};
use super::sink::Sink;
use crate::doc::Doc;
use std::convert::Infallible;
use std::fmt;

/// Render a document into a sink.
///
/// Writes happen one at a time, in document order, one per piece of text, run of padding, or line
/// break. No trailing newline is written. If the sink fails, rendering stops and the sink's error
/// is returned as-is; whatever was already written stays written.
pub fn render<S: Sink + ?Sized>(doc: &Doc, sink: &mut S) -> Result<(), S::Error> {
    let _span = tracing::trace_span!("render").entered();

    write_fragments(doc, |string| sink.write(string.as_bytes()).map(|_| ()))
}

/// Render a document to a string.
pub fn render_to_string(doc: &Doc) -> String {
    let _span = tracing::trace_span!("render_to_string").entered();

    let mut output = String::new();
    let result = write_fragments(doc, |string| {
        output.push_str(string);
        Ok::<(), Infallible>(())
    });
    match result {
        Ok(()) => output,
        Err(never) => match never {},
    }
}

fn write_fragments<E, F>(doc: &Doc, mut write: F) -> Result<(), E>
where
    E: fmt::Display,
    F: FnMut(&str) -> Result<(), E>,
{
    let mut stats = RenderStats::default();
    let mut fragments = Fragments::new(doc);
    for fragment in &mut fragments {
        let string = fragment.as_str();
        if let Err(err) = write(&*string) {
            tracing::debug!(
                error = %err,
                bytes = stats.bytes(),
                "sink write failed, aborting render"
            );
            return Err(err);
        }
        stats.record(fragment, string.len());
    }
    stats.log(fragments.col());
    Ok(())
}

#[derive(Debug, Default)]
pub(super) struct RenderStats {
    fragments: usize,
    lines: usize,
    bytes: usize,
}

impl RenderStats {
    pub(super) fn record(&mut self, fragment: Fragment, len: usize) {
        if self.fragments == 0 {
            self.lines = 1;
        }
        if fragment == Fragment::Newline {
            self.lines += 1;
        }
        self.fragments += 1;
        self.bytes += len;
    }

    pub(super) fn bytes(&self) -> usize {
        self.bytes
    }

    pub(super) fn log(&self, final_col: usize) {
        tracing::debug!(
            fragments = self.fragments,
            lines = self.lines,
            bytes = self.bytes,
            final_col,
            "rendered document"
        );
    }
}
