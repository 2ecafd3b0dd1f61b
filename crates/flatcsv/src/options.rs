use core::fmt;
use core::str::FromStr;

use crate::error::Error;

/// A single-character field delimiter.
///
/// Construction is where delimiter validity is enforced: a `Delimiter`
/// always holds exactly one character, so the encode/decode entry points
/// never have to re-check it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Delimiter(char);

impl Delimiter {
    /// Validates that `s` is exactly one character.
    pub fn new(s: &str) -> Result<Self, Error> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(Delimiter(c)),
            _ => Err(Error::InvalidDelimiter {
                found: s.to_string(),
            }),
        }
    }

    pub fn as_char(self) -> char {
        self.0
    }
}

impl Default for Delimiter {
    fn default() -> Self {
        Delimiter(',')
    }
}

impl From<char> for Delimiter {
    fn from(c: char) -> Self {
        Delimiter(c)
    }
}

impl FromStr for Delimiter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        Delimiter::new(s)
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Line terminator used between encoded rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf,
}

impl LineEnding {
    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EncodeOptions {
    pub delimiter: Delimiter,
    /// Emit the column names as the first line
    pub add_header: bool,
    /// Quote every field, not just the ones that need it
    pub quote_all: bool,
    pub line_ending: LineEnding,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            delimiter: Delimiter::default(),
            add_header: true,
            quote_all: false,
            line_ending: LineEnding::default(),
        }
    }
}

#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParseOptions {
    pub delimiter: Delimiter,
    /// Trim whitespace from unquoted fields; quoted fields are never trimmed
    pub trim: bool,
    /// Turn non-empty column overflow into an error instead of truncating
    pub strict: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            delimiter: Delimiter::default(),
            trim: true,
            strict: true,
        }
    }
}
