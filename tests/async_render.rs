#![cfg(feature = "async")]

use aligned_doc::{docs, hcat, indent, join_with_last, nest, render_async, render_to_string, vcat};
use std::io;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::io::AsyncWrite;

fn sample() -> aligned_doc::Doc {
    let list = join_with_last(["a", "b", "c"], ", ", " or ");
    let block = nest(2, vcat(docs![list, "d"]));
    let quoted = hcat(docs!["> ", indent(["e", "f"])]);
    vcat(docs!["list:", block, quoted])
}

#[tokio::test]
async fn async_matches_sync() {
    let mut output = Vec::new();
    render_async(&sample(), &mut output).await.unwrap();
    let expected = render_to_string(&sample());
    assert_eq!(expected, "list:\n  a, b or c\n  d\n> e\n  f");
    assert_eq!(String::from_utf8(output).unwrap(), expected);
}

/// Accepts at most one byte per poll and returns `Pending` every other poll, to make sure the
/// renderer waits for each write and handles short writes.
struct Trickle {
    output: Vec<u8>,
    ready: bool,
    fail_after: Option<usize>,
}

impl AsyncWrite for Trickle {
    fn poll_write(
        mut self: Pin<&mut Self>,
        cx: &mut Context<'_>,
        buf: &[u8],
    ) -> Poll<io::Result<usize>> {
        if !self.ready {
            self.ready = true;
            cx.waker().wake_by_ref();
            return Poll::Pending;
        }
        self.ready = false;
        if Some(self.output.len()) == self.fail_after {
            return Poll::Ready(Err(io::Error::other("trickle failed")));
        }
        match buf.first() {
            Some(byte) => {
                self.output.push(*byte);
                Poll::Ready(Ok(1))
            }
            None => Poll::Ready(Ok(0)),
        }
    }

    fn poll_flush(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<io::Result<()>> {
        Poll::Ready(Ok(()))
    }

    fn poll_shutdown(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<io::Result<()>> {
        Poll::Ready(Ok(()))
    }
}

#[tokio::test]
async fn async_waits_for_slow_writer() {
    let mut writer = Trickle {
        output: Vec::new(),
        ready: false,
        fail_after: None,
    };
    render_async(&sample(), &mut writer).await.unwrap();
    assert_eq!(
        String::from_utf8(writer.output).unwrap(),
        render_to_string(&sample())
    );
}

#[tokio::test]
async fn async_errors_stop_render() {
    let mut writer = Trickle {
        output: Vec::new(),
        ready: false,
        fail_after: Some(7),
    };
    let err = render_async(&sample(), &mut writer).await.unwrap_err();
    assert_eq!(err.to_string(), "trickle failed");
    assert_eq!(writer.output, b"list:\n ");
}
