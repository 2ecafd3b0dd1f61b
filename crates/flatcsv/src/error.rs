use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid delimiter {found:?}: expected exactly one character")]
    InvalidDelimiter { found: String },

    #[error("unterminated quoted field in CSV row {row}")]
    UnterminatedQuote { row: usize },

    #[error("CSV header has empty column name(s) at position(s): {}", join_positions(.positions))]
    EmptyHeaderName { positions: Vec<usize> },

    #[error("CSV header has duplicate column name(s): {}", .names.join(", "))]
    DuplicateHeaderName { names: Vec<String> },

    #[error(
        "CSV row {row} has {} extra field(s): expected {expected} column(s), found {found}",
        .found - .expected
    )]
    RowOverflow {
        row: usize,
        expected: usize,
        found: usize,
    },
}

fn join_positions(positions: &[usize]) -> String {
    positions
        .iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

pub type Result<T> = core::result::Result<T, Error>;
