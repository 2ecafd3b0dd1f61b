use flatcsv::{EncodeOptions, ParseOptions, escape_field, escape_value, parse_csv};

#[test]
fn plain_text_passes_through() {
    assert_eq!(escape_field("hello", &EncodeOptions::default()), "hello");
    assert_eq!(escape_field("", &EncodeOptions::default()), "");
}

#[test]
fn delimiter_quote_and_newlines_force_quoting() {
    let options = EncodeOptions::default();
    assert_eq!(escape_field("a,b", &options), "\"a,b\"");
    assert_eq!(escape_field("a\"b", &options), "\"a\"\"b\"");
    assert_eq!(escape_field("a\nb", &options), "\"a\nb\"");
    assert_eq!(escape_field("a\rb", &options), "\"a\rb\"");
}

#[test]
fn mixed_specials() {
    assert_eq!(
        escape_field("a,\"b\"\nc", &EncodeOptions::default()),
        "\"a,\"\"b\"\"\nc\""
    );
}

#[test]
fn only_the_configured_delimiter_matters() {
    let options = EncodeOptions {
        delimiter: ';'.into(),
        ..EncodeOptions::default()
    };
    assert_eq!(escape_field("a,b", &options), "a,b");
    assert_eq!(escape_field("a;b", &options), "\"a;b\"");
}

#[test]
fn quote_all_quotes_everything() {
    let options = EncodeOptions {
        quote_all: true,
        ..EncodeOptions::default()
    };
    assert_eq!(escape_field("plain", &options), "\"plain\"");
    assert_eq!(escape_field("", &options), "\"\"");
}

#[test]
fn absent_value_is_empty() {
    let options = EncodeOptions::default();
    assert_eq!(escape_value::<String>(None, &options), "");
}

#[test]
fn display_coercion() {
    let options = EncodeOptions::default();
    assert_eq!(escape_value(Some(&123_u64), &options), "123");
    assert_eq!(escape_value(Some(&true), &options), "true");
    assert_eq!(escape_value(Some(&1.5_f64), &options), "1.5");
}

#[test]
fn double_escaping_stacks_quotes() {
    let options = EncodeOptions::default();
    let once = escape_field("a,b", &options);
    let twice = escape_field(&once, &options);
    assert_eq!(once, "\"a,b\"");
    assert_eq!(twice, "\"\"\"a,b\"\"\"");
}

#[test]
fn parser_inverts_escaping() -> Result<(), Box<dyn std::error::Error>> {
    let options = EncodeOptions::default();
    for original in ["plain", "a,b", "say \"hi\"", "line1\nline2", "tricky\",\"mix"] {
        let text = format!("value\n{}", escape_field(original, &options));
        let records = parse_csv(
            &text,
            &ParseOptions {
                trim: false,
                ..ParseOptions::default()
            },
        )?;
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["value"], original);
    }
    Ok(())
}
