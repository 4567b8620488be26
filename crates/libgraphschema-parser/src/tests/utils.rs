//! Various test utils.

use crate::ast;
use crate::lexer::SchemaLexer;
use crate::token::SchemaTokenKind;
use crate::ParseOptions;
use crate::SchemaSyntaxError;
use crate::Source;
use std::sync::Arc;

pub const KITCHEN_SINK: &str = include_str!("fixtures/schema-kitchen-sink.graphql");
pub const KITCHEN_SINK_PRINTED: &str =
    include_str!("fixtures/schema-kitchen-sink.printed.graphql");
pub const GRAPH_KITCHEN_SINK: &str =
    include_str!("fixtures/schema-kitchen-sink-graph.graphql");
pub const GRAPH_KITCHEN_SINK_PRINTED: &str =
    include_str!("fixtures/schema-kitchen-sink-graph.printed.graphql");

/// Parses `source`, panicking with the detailed error on failure.
pub fn parse_ok(source: &str) -> ast::Document {
    match crate::parse(source) {
        Ok(document) => document,
        Err(error) => panic!("unexpected syntax error:\n{}", error.format_detailed()),
    }
}

/// Parses `source` without locations, for structural comparisons.
pub fn parse_without_locations(source: &str) -> ast::Document {
    let options = ParseOptions {
        no_location: true,
        ..ParseOptions::default()
    };
    match crate::parse_with_options(source, &options) {
        Ok(document) => document,
        Err(error) => panic!("unexpected syntax error:\n{}", error.format_detailed()),
    }
}

/// Parses `source`, panicking if it succeeds.
pub fn parse_err(source: &str) -> SchemaSyntaxError {
    match crate::parse(source) {
        Ok(document) => panic!("expected a syntax error, parsed {document:?}"),
        Err(error) => error,
    }
}

/// Lexes all of `source` into `(kind, start, end)` triples, `Eof` included.
pub fn lex_all(source: &str) -> Vec<(SchemaTokenKind<'static>, usize, usize)> {
    let source = Arc::new(Source::new(source));
    SchemaLexer::new(&source)
        .tokens()
        .map(|token| {
            let token = token.unwrap();
            (token.kind.into_owned(), token.span.start, token.span.end)
        })
        .collect()
}

/// Returns the only definition of a single-definition document.
pub fn single_definition(source: &str) -> ast::Definition {
    let mut document = parse_ok(source);
    assert_eq!(document.definitions.len(), 1, "expected exactly one definition");
    document.definitions.remove(0)
}

pub fn first_object(source: &str) -> ast::ObjectTypeDefinition {
    match single_definition(source) {
        ast::Definition::Object(object) => object,
        other => panic!("expected an object type definition, got {other:?}"),
    }
}

/// Returns the type of the first field of the single object type in
/// `source`.
pub fn first_field_type(source: &str) -> ast::TypeRef {
    first_object(source).fields.remove(0).ty
}

pub fn first_mutation(source: &str) -> ast::MutationDefinition {
    match single_definition(source) {
        ast::Definition::Mutation(mutation) => mutation,
        other => panic!("expected a mutation definition, got {other:?}"),
    }
}

pub fn first_query(source: &str) -> ast::QueryDefinition {
    match single_definition(source) {
        ast::Definition::Query(query) => query,
        other => panic!("expected a query definition, got {other:?}"),
    }
}

pub fn first_filter(source: &str) -> ast::FilterDefinition {
    match single_definition(source) {
        ast::Definition::Filter(filter) => filter,
        other => panic!("expected a filter definition, got {other:?}"),
    }
}

pub fn first_order(source: &str) -> ast::OrderDefinition {
    match single_definition(source) {
        ast::Definition::Order(order) => order,
        other => panic!("expected an order definition, got {other:?}"),
    }
}

/// `(start, end)` of a node's location.
pub fn span_of(loc: Option<&ast::Loc>) -> (usize, usize) {
    let loc = loc.expect("node has no location");
    (loc.start, loc.end)
}
