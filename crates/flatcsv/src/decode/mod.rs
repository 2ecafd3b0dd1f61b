//! Decoding pipeline: one resumable parser core, several ways to feed it

pub mod parser;
pub mod stream;
pub(crate) mod validation;

pub use parser::Parser;
pub use stream::Records;
#[cfg(feature = "async")]
pub use stream::RecordStream;

use crate::Record;
use crate::error::Result;
use crate::options::ParseOptions;

/// Parses a complete CSV document into records.
pub fn parse_csv(input: &str, options: &ParseOptions) -> Result<Vec<Record>> {
    let mut parser = Parser::new(options);
    parser.feed(input)?;
    parser.finish()?;
    let mut records = Vec::new();
    while let Some(record) = parser.next_record() {
        records.push(record);
    }
    Ok(records)
}

/// Parses CSV text arriving as arbitrary substring chunks.
///
/// Chunk boundaries bear no relation to field or row boundaries; parsing
/// the chunks yields exactly what parsing their concatenation would.
pub fn parse_csv_stream<I>(chunks: I, options: &ParseOptions) -> Records<I::IntoIter>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    Records::new(chunks.into_iter(), options, false)
}

/// Parses CSV arriving as individual lines (no trailing terminators).
///
/// A quoted field may span source lines; the embedded line breaks are
/// restored as literal newlines.
pub fn parse_csv_from_lines<I>(lines: I, options: &ParseOptions) -> Records<I::IntoIter>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    Records::new(lines.into_iter(), options, true)
}

/// [`parse_csv_stream`] over an asynchronous chunk source.
#[cfg(feature = "async")]
pub fn parse_csv_stream_async<S>(chunks: S, options: &ParseOptions) -> RecordStream<S>
where
    S: futures::Stream + Unpin,
    S::Item: AsRef<str>,
{
    RecordStream::new(chunks, options, false)
}

/// [`parse_csv_from_lines`] over an asynchronous line source.
#[cfg(feature = "async")]
pub fn parse_csv_from_lines_async<S>(lines: S, options: &ParseOptions) -> RecordStream<S>
where
    S: futures::Stream + Unpin,
    S::Item: AsRef<str>,
{
    RecordStream::new(lines, options, true)
}
