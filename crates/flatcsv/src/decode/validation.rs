//! Header-row validation

use crate::error::Error;

/// Finalizes the first completed row as the header list.
///
/// Names are trimmed unless the field was quoted. Empty names are reported
/// before duplicates and carry 1-based column positions; duplicated names
/// are listed once each, in the order their first repeat appears.
pub(crate) fn finalize_headers<F, Q>(fields: F, quoted: Q) -> Result<Vec<String>, Error>
where
    F: Iterator<Item = String>,
    Q: Iterator<Item = bool>,
{
    let names: Vec<String> = fields
        .zip(quoted)
        .map(|(raw, was_quoted)| if was_quoted { raw } else { trim_owned(raw) })
        .collect();

    let positions: Vec<usize> = names
        .iter()
        .enumerate()
        .filter(|(_, name)| name.is_empty())
        .map(|(i, _)| i + 1)
        .collect();
    if !positions.is_empty() {
        return Err(Error::EmptyHeaderName { positions });
    }

    let mut duplicates: Vec<String> = Vec::new();
    for (i, name) in names.iter().enumerate() {
        if names[..i].contains(name) && !duplicates.contains(name) {
            duplicates.push(name.clone());
        }
    }
    if !duplicates.is_empty() {
        return Err(Error::DuplicateHeaderName { names: duplicates });
    }

    Ok(names)
}

pub(crate) fn trim_owned(s: String) -> String {
    let trimmed = s.trim();
    if trimmed.len() == s.len() {
        s
    } else {
        trimmed.to_string()
    }
}
