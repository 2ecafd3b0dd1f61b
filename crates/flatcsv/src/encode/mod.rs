//! Encoding pipeline: per-field escaping, column inference, row assembly

pub mod columns;
pub mod escape;
pub mod stream;
pub(crate) mod writer;

pub use columns::infer_columns;
pub use escape::{escape_field, escape_into, escape_value};
pub use stream::CsvChunks;
#[cfg(feature = "async")]
pub use stream::CsvChunkStream;

use core::fmt::Display;

use indexmap::IndexMap;

use crate::options::EncodeOptions;

/// Encodes records as CSV text.
///
/// Column order is `columns` when given, otherwise the first-seen union of
/// record keys. A key absent from a record encodes as the empty string.
/// The result carries no trailing line terminator; when both the column
/// list and the record set are empty there is nothing to say and the
/// result is empty.
pub fn create_csv<V: Display>(
    records: &[IndexMap<String, V>],
    columns: Option<&[String]>,
    options: &EncodeOptions,
) -> String {
    let inferred;
    let columns = match columns {
        Some(explicit) => explicit,
        None => {
            inferred = columns::infer_columns(records);
            &inferred
        }
    };
    if columns.is_empty() && records.is_empty() {
        return String::new();
    }
    let mut w = writer::RowWriter::new(options);
    if options.add_header {
        w.header_row(columns);
    }
    for record in records {
        w.record_row(columns, record);
    }
    w.into_string()
}

/// Encodes records lazily, one self-terminated line chunk per row.
pub fn create_csv_stream<I, V>(
    records: I,
    columns: &[String],
    options: &EncodeOptions,
) -> CsvChunks<I::IntoIter>
where
    I: IntoIterator<Item = IndexMap<String, V>>,
    V: Display,
{
    CsvChunks::new(records.into_iter(), columns.to_vec(), options.clone())
}

/// [`create_csv_stream`] over an asynchronous record source.
#[cfg(feature = "async")]
pub fn create_csv_stream_async<S, V>(
    records: S,
    columns: &[String],
    options: &EncodeOptions,
) -> CsvChunkStream<S>
where
    S: futures::Stream<Item = IndexMap<String, V>> + Unpin,
    V: Display,
{
    CsvChunkStream::new(records, columns.to_vec(), options.clone())
}

/// Drains an asynchronous record source into one CSV string.
///
/// Unlike [`create_csv`], the result ends with a line terminator: it is
/// the concatenation of self-terminated chunks.
#[cfg(feature = "async")]
pub async fn create_csv_async<S, V>(
    records: S,
    columns: &[String],
    options: &EncodeOptions,
) -> String
where
    S: futures::Stream<Item = IndexMap<String, V>> + Unpin,
    V: Display,
{
    use futures::StreamExt;

    let mut chunks = create_csv_stream_async(records, columns, options);
    let mut out = String::new();
    while let Some(chunk) = chunks.next().await {
        out.push_str(&chunk);
    }
    out
}
