#![no_main]

use libfuzzer_sys::fuzz_target;
use libgraphschema_parser::Source;
use libgraphschema_parser::lexer::SchemaLexer;
use std::sync::Arc;

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    let source = Arc::new(Source::new(s));
    for _ in SchemaLexer::new(&source).tokens() {}
});
