use core::fmt::Display;

use indexmap::IndexMap;

use crate::encode::writer;
use crate::options::EncodeOptions;

#[cfg(feature = "async")]
use core::pin::Pin;
#[cfg(feature = "async")]
use core::task::{Context, Poll};
#[cfg(feature = "async")]
use futures::Stream;

struct ChunkBuilder {
    columns: Vec<String>,
    options: EncodeOptions,
    header_pending: bool,
}

impl ChunkBuilder {
    fn new(columns: Vec<String>, options: EncodeOptions) -> Self {
        let header_pending = options.add_header;
        Self {
            columns,
            options,
            header_pending,
        }
    }

    fn header_chunk(&mut self) -> Option<String> {
        if !self.header_pending {
            return None;
        }
        self.header_pending = false;
        let mut line = writer::header_line(&self.columns, &self.options);
        line.push_str(self.options.line_ending.as_str());
        Some(line)
    }

    fn record_chunk<V: Display>(&self, record: &IndexMap<String, V>) -> String {
        let mut line = writer::record_line(&self.columns, record, &self.options);
        line.push_str(self.options.line_ending.as_str());
        line
    }
}

/// Lazy sequence of encoded CSV lines.
///
/// Every chunk is one complete row terminated with the configured line
/// ending; the header chunk comes first when `add_header` is set.
pub struct CsvChunks<I> {
    source: I,
    builder: ChunkBuilder,
}

impl<I> CsvChunks<I> {
    pub(crate) fn new(source: I, columns: Vec<String>, options: EncodeOptions) -> Self {
        Self {
            source,
            builder: ChunkBuilder::new(columns, options),
        }
    }
}

impl<I, V> Iterator for CsvChunks<I>
where
    I: Iterator<Item = IndexMap<String, V>>,
    V: Display,
{
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(header) = self.builder.header_chunk() {
            return Some(header);
        }
        let record = self.source.next()?;
        Some(self.builder.record_chunk(&record))
    }
}

/// [`CsvChunks`] over an asynchronous record source.
#[cfg(feature = "async")]
pub struct CsvChunkStream<S> {
    source: S,
    builder: ChunkBuilder,
}

#[cfg(feature = "async")]
impl<S> CsvChunkStream<S> {
    pub(crate) fn new(source: S, columns: Vec<String>, options: EncodeOptions) -> Self {
        Self {
            source,
            builder: ChunkBuilder::new(columns, options),
        }
    }
}

#[cfg(feature = "async")]
impl<S, V> Stream for CsvChunkStream<S>
where
    S: Stream<Item = IndexMap<String, V>> + Unpin,
    V: Display,
{
    type Item = String;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();
        if let Some(header) = this.builder.header_chunk() {
            return Poll::Ready(Some(header));
        }
        match Pin::new(&mut this.source).poll_next(cx) {
            Poll::Ready(Some(record)) => Poll::Ready(Some(this.builder.record_chunk(&record))),
            Poll::Ready(None) => Poll::Ready(None),
            Poll::Pending => Poll::Pending,
        }
    }
}
