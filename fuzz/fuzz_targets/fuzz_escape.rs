#![no_main]

use libfuzzer_sys::fuzz_target;

// Escaping a value and parsing it back as a one-field row must recover it.
fuzz_target!(|value: String| {
    let escaped = flatcsv::escape_field(&value, &flatcsv::EncodeOptions::default());
    let doc = format!("v\n{escaped}");
    let options = flatcsv::ParseOptions {
        trim: false,
        ..flatcsv::ParseOptions::default()
    };
    let records = flatcsv::parse_csv(&doc, &options).expect("escaped value must parse");
    let got = records.first().map(|r| r["v"].as_str()).unwrap_or("");
    assert_eq!(got, value);
});
