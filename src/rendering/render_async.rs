use super::fragments::Fragments;
use super::render::RenderStats;
use crate::doc::Doc;
use std::io;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tracing::Instrument;

/// Render a document into an asynchronous writer.
///
/// Each fragment is written with `write_all`, and that write completes before the next one is
/// issued, so the output order is the same as for [`render`](crate::render). Errors from the writer
/// are returned unchanged, and stop the render. The writer is not flushed.
pub async fn render_async<W>(doc: &Doc, writer: &mut W) -> io::Result<()>
where
    W: AsyncWrite + Unpin + ?Sized,
{
    async move {
        let mut stats = RenderStats::default();
        let mut fragments = Fragments::new(doc);
        for fragment in &mut fragments {
            let string = fragment.as_str();
            if let Err(err) = writer.write_all(string.as_bytes()).await {
                tracing::debug!(
                    error = %err,
                    bytes = stats.bytes(),
                    "async write failed, aborting render"
                );
                return Err(err);
            }
            stats.record(fragment, string.len());
        }
        stats.log(fragments.col());
        Ok(())
    }
    .instrument(tracing::trace_span!("render_async"))
    .await
}
