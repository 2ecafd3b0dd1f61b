use core::fmt::Display;

use crate::options::EncodeOptions;

pub(crate) fn needs_quoting(text: &str, options: &EncodeOptions) -> bool {
    options.quote_all
        || text.contains(options.delimiter.as_char())
        || text.contains('"')
        || text.contains('\n')
        || text.contains('\r')
}

/// Appends the CSV field representation of `text` to `out`.
///
/// When quoting is required, embedded quotes are doubled and the value is
/// wrapped in quotes; nothing else is altered, so literal newlines survive
/// inside the quotes.
pub fn escape_into(out: &mut String, text: &str, options: &EncodeOptions) {
    if !needs_quoting(text, options) {
        out.push_str(text);
        return;
    }
    out.push('"');
    for c in text.chars() {
        if c == '"' {
            out.push('"');
        }
        out.push(c);
    }
    out.push('"');
}

/// CSV field representation of one text value.
pub fn escape_field(text: &str, options: &EncodeOptions) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    escape_into(&mut out, text, options);
    out
}

/// CSV field representation of an arbitrary value.
///
/// `None` encodes as the empty string; everything else goes through its
/// `Display` form first.
pub fn escape_value<V: Display>(value: Option<&V>, options: &EncodeOptions) -> String {
    match value {
        None => String::new(),
        Some(v) => escape_field(&v.to_string(), options),
    }
}
