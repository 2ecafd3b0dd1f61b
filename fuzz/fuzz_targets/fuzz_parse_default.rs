#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let options = flatcsv::ParseOptions {
        strict: false,
        ..flatcsv::ParseOptions::default()
    };
    let _ = flatcsv::parse_csv(data, &options);
});
