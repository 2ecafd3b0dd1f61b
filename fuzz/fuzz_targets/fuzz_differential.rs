#![no_main]

use libfuzzer_sys::fuzz_target;

// Parsing arbitrary chunks must match parsing their concatenation.
fuzz_target!(|input: (String, u8)| {
    let (doc, at) = input;
    let options = flatcsv::ParseOptions::default();

    let mut split = (at as usize) % (doc.len() + 1);
    while !doc.is_char_boundary(split) {
        split -= 1;
    }

    let whole = flatcsv::parse_csv(&doc, &options);
    let chunked: Result<Vec<flatcsv::Record>, _> =
        flatcsv::parse_csv_stream([&doc[..split], &doc[split..]], &options).collect();

    match (whole, chunked) {
        (Ok(a), Ok(b)) => assert_eq!(a, b),
        (Err(a), Err(b)) => assert_eq!(a.to_string(), b.to_string()),
        (a, b) => panic!("whole/chunked divergence: {a:?} vs {b:?}"),
    }
});
