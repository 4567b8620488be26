#![no_main]

use libfuzzer_sys::fuzz_target;
use libgraphschema_parser::ParseOptions;

// Whatever parses must print to text that parses back to the same AST.
fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    let options = ParseOptions {
        no_location: true,
        ..ParseOptions::default()
    };
    let Ok(document) = libgraphschema_parser::parse_with_options(s, &options) else {
        return;
    };
    let printed = libgraphschema_parser::print(&document).expect("parsed documents print");
    let reparsed = libgraphschema_parser::parse_with_options(printed.as_str(), &options)
        .unwrap_or_else(|error| panic!("{printed}\n{}", error.format_detailed()));
    assert_eq!(reparsed, document);
});
