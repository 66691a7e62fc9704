#![allow(unused)]

pub mod generate;

use aligned_doc::{render_to_string, Doc, Sink};
use std::io;

fn compare_lines(message: &str, actual: &[&str], expected: &[&str]) {
    if actual != expected {
        eprintln!(
            "{}\nEXPECTED:\n{}\nACTUAL:\n{}\n=========",
            message,
            expected.join("\n"),
            actual.join("\n"),
        );
        assert_eq!(actual, expected);
    }
}

/// Render `doc` and check it line by line. Also checks that rendering through `Display` agrees.
#[track_caller]
pub fn assert_render(doc: &Doc, expected_lines: &[&str]) {
    let output = render_to_string(doc);
    let lines = output.split('\n').collect::<Vec<_>>();
    compare_lines("IN RENDERING", &lines, expected_lines);
    assert_eq!(doc.to_string(), output, "Display disagrees with render");
}

/// A sink that remembers each individual write.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub writes: Vec<String>,
}

impl Sink for RecordingSink {
    type Error = io::Error;

    fn write(&mut self, bytes: &[u8]) -> Result<usize, io::Error> {
        let string = String::from_utf8(bytes.to_vec())
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;
        self.writes.push(string);
        Ok(bytes.len())
    }
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
#[error("sink is full after {0} writes")]
pub struct SinkFull(pub usize);

/// A sink that accepts `capacity` writes, then fails on every write after that.
#[derive(Debug)]
pub struct FailingSink {
    pub capacity: usize,
    pub output: String,
    pub attempts: usize,
}

impl FailingSink {
    pub fn new(capacity: usize) -> FailingSink {
        FailingSink {
            capacity,
            output: String::new(),
            attempts: 0,
        }
    }
}

impl Sink for FailingSink {
    type Error = SinkFull;

    fn write(&mut self, bytes: &[u8]) -> Result<usize, SinkFull> {
        self.attempts += 1;
        if self.attempts > self.capacity {
            return Err(SinkFull(self.capacity));
        }
        self.output.push_str(&String::from_utf8_lossy(bytes));
        Ok(bytes.len())
    }
}
