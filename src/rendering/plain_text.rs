use super::sink::Sink;
use std::fmt;
use std::io;
use std::str::{self, Utf8Error};

/// Collect rendered output into a string.
///
/// Every write must be valid UTF-8 on its own. The renderer only ever writes whole strings, so this
/// holds for [`render`](crate::render); a write that splits a character is rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlainText {
    string: String,
}

impl PlainText {
    pub fn new() -> PlainText {
        PlainText::default()
    }

    pub fn as_str(&self) -> &str {
        &self.string
    }

    pub fn into_string(self) -> String {
        self.string
    }
}

impl fmt::Display for PlainText {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.string)
    }
}

impl Sink for PlainText {
    type Error = Utf8Error;

    fn write(&mut self, bytes: &[u8]) -> Result<usize, Utf8Error> {
        self.string.push_str(str::from_utf8(bytes)?);
        Ok(bytes.len())
    }
}

/// Send rendered output to an [`io::Write`]r, like a file or stdout.
///
/// Each fragment is passed to `write_all` as it is produced. Wrap unbuffered writers in an
/// [`io::BufWriter`] to avoid one system call per fragment.
#[derive(Debug)]
pub struct IoSink<W: io::Write> {
    writer: W,
}

impl<W: io::Write> IoSink<W> {
    pub fn new(writer: W) -> IoSink<W> {
        IoSink { writer }
    }

    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: io::Write> Sink for IoSink<W> {
    type Error = io::Error;

    fn write(&mut self, bytes: &[u8]) -> Result<usize, io::Error> {
        self.writer.write_all(bytes)?;
        Ok(bytes.len())
    }
}
