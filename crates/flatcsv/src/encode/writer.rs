use core::fmt::{Display, Write as _};

use indexmap::IndexMap;

use crate::encode::escape;
use crate::options::EncodeOptions;

fn write_header(out: &mut String, columns: &[String], options: &EncodeOptions) {
    for (i, name) in columns.iter().enumerate() {
        if i > 0 {
            out.push(options.delimiter.as_char());
        }
        escape::escape_into(out, name, options);
    }
}

fn write_record<V: Display>(
    out: &mut String,
    scratch: &mut String,
    columns: &[String],
    record: &IndexMap<String, V>,
    options: &EncodeOptions,
) {
    for (i, name) in columns.iter().enumerate() {
        if i > 0 {
            out.push(options.delimiter.as_char());
        }
        scratch.clear();
        if let Some(value) = record.get(name) {
            let _ = write!(scratch, "{value}");
        }
        escape::escape_into(out, scratch, options);
    }
}

pub(crate) fn header_line(columns: &[String], options: &EncodeOptions) -> String {
    let mut out = String::new();
    write_header(&mut out, columns, options);
    out
}

pub(crate) fn record_line<V: Display>(
    columns: &[String],
    record: &IndexMap<String, V>,
    options: &EncodeOptions,
) -> String {
    let mut out = String::new();
    let mut scratch = String::new();
    write_record(&mut out, &mut scratch, columns, record, options);
    out
}

/// Assembles rows into one buffer, joining them with the configured line
/// ending and never appending a trailing one.
pub(crate) struct RowWriter<'a> {
    out: String,
    scratch: String,
    options: &'a EncodeOptions,
    rows: usize,
}

impl<'a> RowWriter<'a> {
    pub(crate) fn new(options: &'a EncodeOptions) -> Self {
        Self {
            out: String::new(),
            scratch: String::new(),
            options,
            rows: 0,
        }
    }

    fn start_row(&mut self) {
        if self.rows > 0 {
            self.out.push_str(self.options.line_ending.as_str());
        }
        self.rows += 1;
    }

    pub(crate) fn header_row(&mut self, columns: &[String]) {
        self.start_row();
        write_header(&mut self.out, columns, self.options);
    }

    pub(crate) fn record_row<V: Display>(
        &mut self,
        columns: &[String],
        record: &IndexMap<String, V>,
    ) {
        self.start_row();
        write_record(
            &mut self.out,
            &mut self.scratch,
            columns,
            record,
            self.options,
        );
    }

    pub(crate) fn into_string(self) -> String {
        self.out
    }
}
