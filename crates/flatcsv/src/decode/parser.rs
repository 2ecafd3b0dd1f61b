use std::collections::VecDeque;
use std::mem;

use crate::Record;
use crate::decode::validation;
use crate::error::{Error, Result};
use crate::options::ParseOptions;

/// Incremental CSV parser.
///
/// One `Parser` owns all state for one document. Input is pushed with
/// [`feed`](Parser::feed) in chunks whose boundaries may fall anywhere,
/// including between a quote and the character that decides whether it
/// closes the field, or between the `\r` and `\n` of a CRLF terminator.
/// Completed records queue up and are drained with
/// [`next_record`](Parser::next_record); [`finish`](Parser::finish) flushes
/// the final unterminated row once the input is exhausted.
pub struct Parser {
    delimiter: char,
    trim: bool,
    strict: bool,
    /// Between an opening quote and its closing quote
    in_quotes: bool,
    /// The field being built started with a quote, even once closed
    field_quoted: bool,
    field: String,
    fields: Vec<String>,
    quoted: Vec<bool>,
    headers: Option<Vec<String>>,
    /// 1-based number of the row currently being built
    row: usize,
    /// A quote was seen inside quotes; escaped-vs-closing awaits the next character
    pending_quote: bool,
    /// A bare `\r` ended a row; a following `\n` belongs to the same terminator
    skip_lf: bool,
    ready: VecDeque<Record>,
}

impl Parser {
    pub fn new(options: &ParseOptions) -> Self {
        Self {
            delimiter: options.delimiter.as_char(),
            trim: options.trim,
            strict: options.strict,
            in_quotes: false,
            field_quoted: false,
            field: String::new(),
            fields: Vec::new(),
            quoted: Vec::new(),
            headers: None,
            row: 1,
            pending_quote: false,
            skip_lf: false,
            ready: VecDeque::new(),
        }
    }

    /// The finalized header columns, once the first row has completed.
    pub fn headers(&self) -> Option<&[String]> {
        self.headers.as_deref()
    }

    /// Pops the next completed record, in row order.
    pub fn next_record(&mut self) -> Option<Record> {
        self.ready.pop_front()
    }

    /// Scans one chunk of input.
    ///
    /// After an error the parser is poisoned; feeding further chunks is a
    /// contract violation and produces unspecified records.
    pub fn feed(&mut self, chunk: &str) -> Result<()> {
        let mut rest = chunk;
        while !rest.is_empty() {
            #[cfg(feature = "perf_memchr")]
            if self.in_quotes && !self.pending_quote {
                // Inside quotes everything up to the next quote is literal.
                match memchr::memchr(b'"', rest.as_bytes()) {
                    Some(at) => {
                        self.field.push_str(&rest[..at]);
                        rest = &rest[at..];
                    }
                    None => {
                        self.field.push_str(rest);
                        return Ok(());
                    }
                }
            }
            let Some(c) = rest.chars().next() else { break };
            rest = &rest[c.len_utf8()..];
            self.step(c)?;
        }
        Ok(())
    }

    /// Finalizes the document: flushes a last row that has no trailing
    /// terminator and rejects a still-open quoted field.
    pub fn finish(&mut self) -> Result<()> {
        if self.pending_quote {
            // Input ended on the quote itself: it closes the field.
            self.pending_quote = false;
            self.in_quotes = false;
        }
        if self.in_quotes {
            return Err(Error::UnterminatedQuote { row: self.row });
        }
        self.skip_lf = false;
        if !self.field.is_empty() || self.field_quoted || !self.fields.is_empty() {
            self.end_field();
            self.end_row()?;
        }
        Ok(())
    }

    fn step(&mut self, c: char) -> Result<()> {
        if self.skip_lf {
            self.skip_lf = false;
            if c == '\n' {
                return Ok(());
            }
        }
        if self.pending_quote {
            self.pending_quote = false;
            if c == '"' {
                // Doubled quote: one literal quote, still inside the field.
                self.field.push('"');
                return Ok(());
            }
            self.in_quotes = false;
        }
        if self.field_quoted && !self.in_quotes && c != self.delimiter && (c == ' ' || c == '\t') {
            // Whitespace between a closing quote and the delimiter is dropped.
            return Ok(());
        }
        if c == '"' {
            if self.in_quotes {
                self.pending_quote = true;
            } else if self.field.is_empty() {
                self.in_quotes = true;
                self.field_quoted = true;
            } else {
                self.field.push('"');
            }
            return Ok(());
        }
        if !self.in_quotes {
            if c == self.delimiter {
                self.end_field();
                return Ok(());
            }
            if c == '\n' || c == '\r' {
                if c == '\r' {
                    self.skip_lf = true;
                }
                self.end_field();
                return self.end_row();
            }
        }
        self.field.push(c);
        Ok(())
    }

    fn end_field(&mut self) {
        self.fields.push(mem::take(&mut self.field));
        self.quoted.push(self.field_quoted);
        self.field_quoted = false;
    }

    fn end_row(&mut self) -> Result<()> {
        let row = self.row;
        self.row += 1;

        let Some(headers) = &self.headers else {
            let names =
                validation::finalize_headers(self.fields.drain(..), self.quoted.drain(..))?;
            self.headers = Some(names);
            return Ok(());
        };

        // A row holding a single empty field is a blank line, not a record.
        if self.fields.len() == 1 {
            let value = cleaned(&self.fields[0], self.quoted[0], self.trim);
            if value.is_empty() {
                self.fields.clear();
                self.quoted.clear();
                return Ok(());
            }
        }

        let expected = headers.len();
        let found = self.fields.len();
        if found > expected {
            if self.strict {
                let overflowing = self.fields[expected..]
                    .iter()
                    .zip(&self.quoted[expected..])
                    .any(|(f, &q)| !cleaned(f, q, self.trim).is_empty());
                if overflowing {
                    return Err(Error::RowOverflow {
                        row,
                        expected,
                        found,
                    });
                }
            }
            self.fields.truncate(expected);
            self.quoted.truncate(expected);
        }

        let mut record = Record::with_capacity(expected);
        let mut values = self.fields.drain(..).zip(self.quoted.drain(..));
        for name in headers {
            let value = match values.next() {
                Some((raw, was_quoted)) => {
                    if self.trim && !was_quoted {
                        validation::trim_owned(raw)
                    } else {
                        raw
                    }
                }
                None => String::new(),
            };
            record.insert(name.clone(), value);
        }
        drop(values);
        self.ready.push_back(record);
        Ok(())
    }
}

fn cleaned(raw: &str, was_quoted: bool, trim: bool) -> &str {
    if trim && !was_quoted { raw.trim() } else { raw }
}
