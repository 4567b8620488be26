#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    if let Err(error) = libgraphschema_parser::parse(s) {
        let _ = error.format_detailed();
    }
    let _ = libgraphschema_parser::parse_value(s);
});
