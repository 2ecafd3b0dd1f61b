#![doc = include_str!("../README.md")]

pub mod decode;
pub mod encode;
pub mod error;
pub mod options;

pub use indexmap::IndexMap;

/// One decoded row: header-keyed values, in header order.
pub type Record = IndexMap<String, String>;

pub use crate::decode::{Parser, Records, parse_csv, parse_csv_from_lines, parse_csv_stream};
#[cfg(feature = "async")]
pub use crate::decode::{RecordStream, parse_csv_from_lines_async, parse_csv_stream_async};
pub use crate::encode::{
    CsvChunks, create_csv, create_csv_stream, escape_field, escape_value, infer_columns,
};
#[cfg(feature = "async")]
pub use crate::encode::{CsvChunkStream, create_csv_async, create_csv_stream_async};
pub use crate::error::{Error, Result};
pub use crate::options::{Delimiter, EncodeOptions, LineEnding, ParseOptions};

use core::fmt::Display;
use std::io::{BufRead, Write};

/// Encodes records and writes the text to `writer`.
pub fn create_csv_to_writer<W: Write, V: Display>(
    mut writer: W,
    records: &[IndexMap<String, V>],
    columns: Option<&[String]>,
    options: &EncodeOptions,
) -> Result<()> {
    let text = create_csv(records, columns, options);
    writer.write_all(text.as_bytes())?;
    Ok(())
}

/// Parses CSV from a buffered reader, feeding the parser core one read
/// line at a time.
pub fn parse_csv_from_reader<R: BufRead>(
    mut reader: R,
    options: &ParseOptions,
) -> Result<Vec<Record>> {
    let mut parser = Parser::new(options);
    let mut records = Vec::new();
    let mut line = String::new();
    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            break;
        }
        parser.feed(&line)?;
        while let Some(record) = parser.next_record() {
            records.push(record);
        }
    }
    parser.finish()?;
    while let Some(record) = parser.next_record() {
        records.push(record);
    }
    Ok(records)
}
