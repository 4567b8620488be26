//! Property tests: printed documents parse back to the same AST, and no
//! input makes the lexer or parser panic.

use crate::ast;
use crate::lexer::SchemaLexer;
use crate::parse;
use crate::parse_value_with_options;
use crate::print;
use crate::tests::utils::parse_ok;
use crate::tests::utils::parse_without_locations;
use crate::ParseOptions;
use crate::Source;
use proptest::prelude::*;
use std::sync::Arc;

// =============================================================================
// Source text strategies
// =============================================================================

fn type_name() -> impl Strategy<Value = String> {
    "[A-Z][A-Za-z0-9_]{0,8}"
}

fn field_name() -> impl Strategy<Value = String> {
    "[a-z_][A-Za-z0-9_]{0,8}"
}

fn key_name() -> impl Strategy<Value = String> {
    "[A-Z][A-Z0-9_]{0,6}"
}

/// An optional `## ...` line, newline included.
fn description() -> impl Strategy<Value = String> {
    prop::option::of("[A-Za-z0-9][A-Za-z0-9 .,]{0,20}")
        .prop_map(|text| text.map(|text| format!("## {text}\n")).unwrap_or_default())
}

fn string_literal() -> impl Strategy<Value = String> {
    any::<String>().prop_map(|value| serde_json::Value::String(value).to_string())
}

fn const_value() -> impl Strategy<Value = String> {
    let leaf = prop_oneof![
        "-?(0|[1-9][0-9]{0,5})",
        "-?(0|[1-9][0-9]{0,3})\\.[0-9]{1,3}([eE][+-]?[0-9]{1,2})?",
        string_literal(),
        Just("true".to_string()),
        Just("false".to_string()),
        "[A-Z][A-Z_]{0,5}",
    ];
    leaf.prop_recursive(3, 16, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4)
                .prop_map(|values| format!("[{}]", values.join(", "))),
            prop::collection::vec((field_name(), inner), 0..4).prop_map(|fields| {
                let fields: Vec<String> =
                    fields.iter().map(|(name, value)| format!("{name}: {value}")).collect();
                format!("{{{}}}", fields.join(", "))
            }),
        ]
    })
}

fn directives() -> impl Strategy<Value = String> {
    prop::collection::vec((field_name(), prop::option::of((field_name(), const_value()))), 0..2)
        .prop_map(|directives| {
            directives
                .into_iter()
                .map(|(name, argument)| match argument {
                    Some((arg, value)) => format!(" @{name}({arg}: {value})"),
                    None => format!(" @{name}"),
                })
                .collect()
        })
}

/// `T`, `T!`, `[T]` or `[T!]!`.
fn input_type() -> impl Strategy<Value = String> {
    (type_name(), 0..4u8).prop_map(|(name, wrapping)| match wrapping {
        0 => name,
        1 => format!("{name}!"),
        2 => format!("[{name}]"),
        _ => format!("[{name}!]!"),
    })
}

fn input_value() -> impl Strategy<Value = String> {
    (field_name(), input_type(), prop::option::of(const_value()), directives()).prop_map(
        |(name, ty, default, directives)| match default {
            Some(default) => format!("{name}: {ty} = {default}{directives}"),
            None => format!("{name}: {ty}{directives}"),
        },
    )
}

fn arguments() -> impl Strategy<Value = String> {
    prop::collection::vec(input_value(), 0..3).prop_map(|arguments| {
        if arguments.is_empty() {
            String::new()
        } else {
            format!("({})", arguments.join(", "))
        }
    })
}

/// Joins arrow pieces either compactly or with a space between every
/// token.
fn arrow(pieces: &[&str], spaced: bool) -> String {
    if !spaced {
        return pieces.concat();
    }
    let tokens: Vec<String> = pieces
        .iter()
        .flat_map(|piece| {
            if piece.starts_with(|c: char| c.is_ascii_alphabetic()) {
                vec![piece.to_string()]
            } else {
                piece.chars().map(String::from).collect()
            }
        })
        .filter(|token| !token.is_empty())
        .collect();
    tokens.join(" ")
}

fn connection() -> impl Strategy<Value = String> {
    (0..4u8, prop::option::of(type_name()), type_name(), any::<bool>()).prop_map(
        |(shape, label, target, spaced)| {
            let label = label.unwrap_or_default();
            let (open, close) = match shape {
                0 => ("-", "->"),
                1 => ("<-", "-"),
                2 => ("=", "=>"),
                _ => ("<=", "="),
            };
            format!("{} {target}", arrow(&[open, &label, close], spaced))
        },
    )
}

fn edge() -> impl Strategy<Value = String> {
    (any::<bool>(), prop::option::of(type_name()), type_name()).prop_map(|(out, label, target)| {
        let label = label.unwrap_or_default();
        if out {
            format!("={label}=> {target}")
        } else {
            format!("<={label}= {target}")
        }
    })
}

fn field_type() -> impl Strategy<Value = String> {
    prop_oneof![
        input_type(),
        connection(),
        prop::collection::vec(connection(), 2..4).prop_map(|hops| hops.join(" ")),
    ]
}

fn field(ty: impl Strategy<Value = String>) -> impl Strategy<Value = String> {
    (description(), field_name(), arguments(), ty, directives()).prop_map(
        |(description, name, arguments, ty, directives)| {
            format!("{description}{name}{arguments}: {ty}{directives}\n")
        },
    )
}

fn block(lines: Vec<String>) -> String {
    format!("{{\n{}}}", lines.concat())
}

fn object_type() -> impl Strategy<Value = String> {
    (
        type_name(),
        prop::collection::vec(type_name(), 0..3),
        directives(),
        prop::collection::vec(field(field_type()), 0..4),
    )
        .prop_map(|(name, interfaces, directives, fields)| {
            let implements = if interfaces.is_empty() {
                String::new()
            } else {
                format!(" implements {}", interfaces.join(", "))
            };
            format!("type {name}{implements}{directives} {}", block(fields))
        })
}

fn type_system_definition() -> impl Strategy<Value = String> {
    prop_oneof![
        object_type(),
        (type_name(), directives(), prop::collection::vec(field(field_type()), 0..4)).prop_map(
            |(name, directives, fields)| format!("interface {name}{directives} {}", block(fields)),
        ),
        (type_name(), directives()).prop_map(|(name, directives)| format!("scalar {name}{directives}")),
        (type_name(), prop::collection::vec(type_name(), 1..4))
            .prop_map(|(name, members)| format!("union {name} = {}", members.join(" | "))),
        (type_name(), prop::collection::vec((description(), key_name()), 1..4)).prop_map(
            |(name, values)| {
                let values = values
                    .into_iter()
                    .map(|(description, value)| format!("{description}{value}\n"))
                    .collect();
                format!("enum {name} {}", block(values))
            },
        ),
        (type_name(), prop::collection::vec((description(), input_value()), 0..4)).prop_map(
            |(name, fields)| {
                let fields = fields
                    .into_iter()
                    .map(|(description, field)| format!("{description}{field}\n"))
                    .collect();
                format!("input {name} {}", block(fields))
            },
        ),
        object_type().prop_map(|object| format!("extend {object}")),
        (field_name(), arguments(), prop::collection::vec(key_name(), 1..3)).prop_map(
            |(name, arguments, locations)| {
                format!("directive @{name}{arguments} on {}", locations.join(" | "))
            },
        ),
    ]
}

fn mutation() -> impl Strategy<Value = String> {
    let fields = prop::collection::vec(field(prop_oneof![input_type(), edge()]), 0..4);
    (field_name(), arguments(), directives(), prop::option::of(input_type()), fields).prop_map(
        |(name, arguments, directives, ty, fields)| match ty {
            Some(ty) => format!("mutation {name}{arguments}: {ty}{directives}"),
            None => format!("mutation {name}{arguments}{directives} {}", block(fields)),
        },
    )
}

fn query() -> impl Strategy<Value = String> {
    let fields = prop::collection::vec(field(input_type()), 1..4);
    (field_name(), arguments(), directives(), prop::option::of(input_type()), fields).prop_map(
        |(name, arguments, directives, ty, fields)| match ty {
            Some(ty) => format!("query {name}{arguments}: {ty}{directives}"),
            None => format!("query {name}{arguments}{directives} {}", block(fields)),
        },
    )
}

/// `[T]`, a connection or a named type.
fn target() -> impl Strategy<Value = String> {
    prop_oneof![
        type_name().prop_map(|name| format!("[{name}]")),
        connection(),
        type_name(),
    ]
}

fn filter() -> impl Strategy<Value = String> {
    let condition = (
        description(),
        key_name(),
        arguments(),
        field_name(),
        prop_oneof![const_value(), "\\$[a-z]{1,5}"],
    )
        .prop_map(|(description, key, arguments, field, operand)| {
            let arguments = if arguments.is_empty() { arguments } else { format!("{arguments} ") };
            format!("{description}{key}: {arguments}{{node: {{{field}: {{eq: {operand}}}}}}}\n")
        });
    (target(), prop::collection::vec(condition, 0..4))
        .prop_map(|(target, conditions)| format!("filter on {target} {}", block(conditions)))
}

fn order() -> impl Strategy<Value = String> {
    let sort = (field_name(), prop_oneof![Just("ASCENDING"), Just("DESCENDING")])
        .prop_map(|(field, direction)| format!("{{node: {{{field}: {direction}}}}}"));
    let expression = (
        description(),
        key_name(),
        prop::collection::vec(sort, 1..3),
        any::<bool>(),
    )
        .prop_map(|(description, key, sorts, bracketed)| {
            let sorts = if bracketed || sorts.len() > 1 {
                format!("[{}]", sorts.join(", "))
            } else {
                sorts.concat()
            };
            format!("{description}{key}: {sorts}\n")
        });
    (target(), prop::collection::vec(expression, 0..4))
        .prop_map(|(target, expressions)| format!("order on {target} {}", block(expressions)))
}

fn document() -> impl Strategy<Value = String> {
    let definition = (
        description(),
        prop_oneof![type_system_definition(), mutation(), query(), filter(), order()],
    )
        .prop_map(|(description, definition)| format!("{description}{definition}"));
    prop::collection::vec(definition, 1..5).prop_map(|definitions| definitions.join("\n\n"))
}

// =============================================================================
// Value AST strategies
// =============================================================================

fn value_ast() -> impl Strategy<Value = ast::Value> {
    let leaf = prop_oneof![
        "-?(0|[1-9][0-9]{0,8})".prop_map(|value| ast::Value::Int(ast::IntValue { value, loc: None })),
        "-?(0|[1-9][0-9]{0,3})\\.[0-9]{1,3}"
            .prop_map(|value| ast::Value::Float(ast::FloatValue { value, loc: None })),
        any::<String>().prop_map(|value| ast::Value::String(ast::StringValue { value, loc: None })),
        any::<bool>().prop_map(|value| ast::Value::Boolean(ast::BooleanValue { value, loc: None })),
        "[A-Z][A-Z_]{0,5}".prop_map(|value| ast::Value::Enum(ast::EnumValue { value, loc: None })),
        "[a-z][a-z0-9]{0,5}".prop_map(|name| {
            ast::Value::Variable(ast::Variable { name: ast::Name::new(name), loc: None })
        }),
    ];
    leaf.prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4)
                .prop_map(|values| ast::Value::List(ast::ListValue { values, loc: None })),
            prop::collection::vec((field_name(), inner), 0..4).prop_map(|fields| {
                let fields = fields
                    .into_iter()
                    .map(|(name, value)| ast::ObjectField {
                        name: ast::Name::new(name),
                        value,
                        loc: None,
                    })
                    .collect();
                ast::Value::Object(ast::ObjectValue { fields, loc: None })
            }),
        ]
    })
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// Printing a parsed document and parsing the output yields the same
    /// document, and the printed form is a fixed point.
    #[test]
    fn printed_documents_reparse_identically(source in document()) {
        let printed = print(&parse_ok(&source)).unwrap();
        prop_assert_eq!(
            parse_without_locations(&printed),
            parse_without_locations(&source),
            "printed:\n{}",
            printed,
        );
        prop_assert_eq!(print(&parse_ok(&printed)).unwrap(), printed);
    }

    /// Any value AST, strings with arbitrary characters included, survives
    /// printing and parsing.
    #[test]
    fn printed_values_reparse_identically(value in value_ast()) {
        let printed = print(&value).unwrap();
        let options = ParseOptions {
            no_location: true,
            ..ParseOptions::default()
        };
        match parse_value_with_options(printed.as_str(), &options) {
            Ok(reparsed) => prop_assert_eq!(reparsed, value),
            Err(error) => prop_assert!(false, "{}\n{}", printed, error.format_detailed()),
        }
    }

    /// The lexer returns tokens or an error for any input.
    #[test]
    fn lexer_never_panics(input in any::<String>()) {
        let source = Arc::new(Source::new(input.as_str()));
        let mut count = 0;
        for token in SchemaLexer::new(&source).tokens() {
            count += 1;
            if let Ok(token) = token {
                prop_assert!(token.span.end <= input.len());
            }
        }
        prop_assert!(count >= 1);
    }

    /// The parser returns a document or a positioned error for any input
    /// built from schema punctuation and names.
    #[test]
    fn parser_never_panics(input in "[-<>=!a-zA-Z0-9{}()\\[\\]:@$#\" \n,|.]{0,120}") {
        match parse(input.as_str()) {
            Ok(document) => prop_assert!(print(&document).is_ok()),
            Err(error) => {
                prop_assert!(error.position() <= input.len());
                prop_assert!(!error.format_detailed().is_empty());
            },
        }
    }

    /// Same as above for fully arbitrary text.
    #[test]
    fn parser_never_panics_on_any_text(input in "\\PC{0,200}") {
        if let Err(error) = parse(input.as_str()) {
            prop_assert!(error.position() <= input.len());
            let _ = error.format_oneline();
        }
    }
}
