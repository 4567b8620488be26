mod lexer_tests;
mod round_trip_proptest_tests;
mod schema_parser_description_tests;
mod schema_parser_graph_defs_tests;
mod utils;
