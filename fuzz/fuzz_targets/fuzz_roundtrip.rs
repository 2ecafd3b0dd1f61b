#![no_main]

use libfuzzer_sys::fuzz_target;

// Uniform records survive encode -> parse. Two columns minimum so no data
// row can look like a blank line.
fuzz_target!(|rows: Vec<Vec<String>>| {
    let width = rows.iter().map(Vec::len).max().unwrap_or(0).max(2);
    let columns: Vec<String> = (0..width).map(|i| format!("c{i}")).collect();
    let records: Vec<flatcsv::Record> = rows
        .iter()
        .map(|row| {
            columns
                .iter()
                .cloned()
                .zip(
                    row.iter()
                        .cloned()
                        .chain(std::iter::repeat(String::new()))
                        .take(width),
                )
                .collect()
        })
        .collect();

    let text = flatcsv::create_csv(&records, Some(&columns), &flatcsv::EncodeOptions::default());
    let options = flatcsv::ParseOptions {
        trim: false,
        ..flatcsv::ParseOptions::default()
    };
    let parsed = flatcsv::parse_csv(&text, &options).expect("encoded records must parse");
    assert_eq!(parsed, records);
});
