#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let _ = flatcsv::parse_csv(data, &flatcsv::ParseOptions::default());
});
