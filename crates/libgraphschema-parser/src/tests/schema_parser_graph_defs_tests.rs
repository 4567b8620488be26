//! Tests for `mutation`, `query`, `filter` and `order` definitions.

use crate::ast::Definition;
use crate::ast::DefinitionResult;
use crate::ast::Direction;
use crate::ast::TypeRef;
use crate::ast::Value;
use crate::tests::utils::first_filter;
use crate::tests::utils::first_mutation;
use crate::tests::utils::first_order;
use crate::tests::utils::first_query;
use crate::tests::utils::parse_ok;
use crate::tests::utils::span_of;
use crate::tests::utils::GRAPH_KITCHEN_SINK;

/// Verifies that the full kitchen sink parses into the expected sequence
/// of definitions.
#[test]
fn parses_kitchen_sink() {
    let document = parse_ok(GRAPH_KITCHEN_SINK);
    let counts = document.definitions.iter().fold([0; 4], |mut counts, definition| {
        match definition {
            Definition::Mutation(_) => counts[0] += 1,
            Definition::Query(_) => counts[1] += 1,
            Definition::Filter(_) => counts[2] += 1,
            Definition::Order(_) => counts[3] += 1,
            _ => {},
        }
        counts
    });
    assert_eq!(counts, [7, 8, 3, 3]);
    assert_eq!(document.definitions.len(), 22);
}

// =============================================================================
// Mutations
// =============================================================================

/// Verifies a mutation with a result block.
#[test]
fn mutation_with_fields() {
    let mutation = first_mutation("mutation addFoo(id: ID!, name: String!) { edge: FooEdge }");
    assert_eq!(mutation.name.value, "addFoo");
    let arguments: Vec<_> = mutation.arguments.iter().map(|a| a.name.value.as_str()).collect();
    assert_eq!(arguments, vec!["id", "name"]);
    assert!(mutation.directives.is_empty());
    let fields = mutation.result.as_fields().unwrap();
    assert_eq!(fields.len(), 1);
    assert_eq!(fields[0].name.value, "edge");
    assert!(matches!(&fields[0].ty, TypeRef::Named(named) if named.name.value == "FooEdge"));
}

/// Verifies that directives sit between the arguments and the result
/// block.
#[test]
fn mutation_directives_before_block() {
    let mutation = first_mutation("mutation addBar @directive(arg: \"Foo\") { status: String }");
    assert_eq!(mutation.directives.len(), 1);
    assert_eq!(mutation.directives[0].arguments[0].name.value, "arg");
    assert!(mutation.arguments.is_empty());
}

/// Verifies a mutation with a type result and a trailing directive.
#[test]
fn mutation_with_type_result() {
    let mutation = first_mutation("mutation argsMutation(arg1: String arg2: Int!): String @withDirective");
    assert_eq!(mutation.arguments.len(), 2);
    let Some(TypeRef::Named(named)) = mutation.result.as_type() else {
        panic!("expected a named result type");
    };
    assert_eq!(named.name.value, "String");
    assert_eq!(mutation.directives[0].name.value, "withDirective");
    assert_eq!(span_of(mutation.loc.as_ref()), (0, 69));
}

/// Verifies that mutation result fields accept outgoing and incoming
/// edges, labeled or not.
#[test]
fn mutation_edges() {
    let mutation = first_mutation(
        "mutation link { a: =Linked=> Foo b: <== Bar c: ==> Baz! d: <=Owns= Qux }",
    );
    let DefinitionResult::Fields { fields } = mutation.result else {
        panic!("expected result fields");
    };
    let edge = |ty: &TypeRef| match ty {
        TypeRef::Edge(edge) => edge.clone(),
        TypeRef::NonNull(non_null) => match non_null.ty.as_ref() {
            TypeRef::Edge(edge) => edge.clone(),
            other => panic!("expected an edge, got {other:?}"),
        },
        other => panic!("expected an edge, got {other:?}"),
    };
    let shapes: Vec<_> = fields
        .iter()
        .map(|field| {
            let edge = edge(&field.ty);
            (
                edge.direction,
                edge.edge_label.map(|label| label.name.value),
                edge.ty.name.value,
            )
        })
        .collect();
    assert_eq!(shapes, vec![
        (Direction::Out, Some("Linked".to_string()), "Foo".to_string()),
        (Direction::In, None, "Bar".to_string()),
        (Direction::Out, None, "Baz".to_string()),
        (Direction::In, Some("Owns".to_string()), "Qux".to_string()),
    ]);
    assert!(matches!(fields[2].ty, TypeRef::NonNull(_)));
}

/// Verifies the location of an edge type.
#[test]
fn edge_location() {
    let mutation = first_mutation("mutation m { e: =L=> Foo }");
    let fields = mutation.result.as_fields().unwrap();
    let TypeRef::Edge(edge) = &fields[0].ty else {
        panic!("expected an edge");
    };
    assert_eq!(span_of(edge.loc.as_ref()), (16, 24));
    assert_eq!(span_of(edge.edge_label.as_ref().unwrap().loc.as_ref()), (17, 18));
}

// =============================================================================
// Queries
// =============================================================================

/// Verifies a query with a type result.
#[test]
fn query_with_type_result() {
    let query = first_query("query argsRootQuery(arg1: String, arg2: Int!): [String]");
    assert_eq!(query.name.value, "argsRootQuery");
    assert!(matches!(query.result, DefinitionResult::Type { ty: TypeRef::List(_) }));
}

/// Verifies a query with a result block and per-field directives.
#[test]
fn query_with_fields() {
    let query = first_query(
        "query q(a: Int) @withDirective(foo: \"BAR\") { foo: String! bar: [Bar!]! @withFieldDirective }",
    );
    assert_eq!(query.directives[0].name.value, "withDirective");
    let fields = query.result.as_fields().unwrap();
    assert_eq!(fields.len(), 2);
    assert!(matches!(fields[0].ty, TypeRef::NonNull(_)));
    assert_eq!(fields[1].directives[0].name.value, "withFieldDirective");
}

// =============================================================================
// Filters
// =============================================================================

/// Verifies a filter over a connection with conditions, arguments and
/// variables.
#[test]
fn filter_on_connection() {
    let filter = first_filter(
        "filter on =Label=> Foo {\n  ONE: { node: { three: { eq: 1 } } }\n  SOME: (number: Int) { node: { three: { eq: $number } } }\n  ANY: { }\n}",
    );
    let TypeRef::Connection(target) = &filter.ty else {
        panic!("expected a connection target");
    };
    assert_eq!(target.edge_label.as_ref().unwrap().name.value, "Label");

    let keys: Vec<_> = filter.conditions.iter().map(|c| c.key.name.value.as_str()).collect();
    assert_eq!(keys, vec!["ONE", "SOME", "ANY"]);
    assert!(filter.conditions[0].arguments.is_empty());
    assert_eq!(filter.conditions[1].arguments[0].name.value, "number");
    assert!(filter.conditions[2].condition.fields.is_empty());

    let node = &filter.conditions[1].condition.fields[0];
    assert_eq!(node.name.value, "node");
    let Value::Object(three) = &node.value else {
        panic!("expected an object value");
    };
    let Value::Object(eq) = &three.fields[0].value else {
        panic!("expected an object value");
    };
    assert!(matches!(&eq.fields[0].value, Value::Variable(v) if v.name.value == "number"));
}

/// Verifies list and named filter targets.
#[test]
fn filter_targets() {
    assert!(matches!(first_filter("filter on [Feed] { }").ty, TypeRef::List(_)));
    assert!(matches!(first_filter("filter on Feed { }").ty, TypeRef::Named(_)));
    assert!(matches!(first_filter("filter on <-- Feed { }").ty, TypeRef::Connection(_)));
}

/// Verifies filter locations.
#[test]
fn filter_locations() {
    let filter = first_filter("filter on [Feed] { A: {} }");
    assert_eq!(span_of(filter.loc.as_ref()), (0, 26));
    assert_eq!(span_of(filter.ty.loc()), (10, 16));
    assert_eq!(span_of(filter.conditions[0].loc.as_ref()), (19, 24));
    assert_eq!(span_of(filter.conditions[0].key.loc.as_ref()), (19, 20));
}

// =============================================================================
// Orders
// =============================================================================

/// Verifies single-object and list order expressions.
#[test]
fn order_expressions() {
    let order = first_order(
        "order on =Label=> Foo {\n  ONE: [ { node: { one: ASCENDING } }, { node: { two: DESCENDING } } ]\n  SINGLETON: { node: { two: ASCENDING } }\n}",
    );
    assert!(matches!(order.ty, TypeRef::Connection(_)));
    assert_eq!(order.expressions.len(), 2);
    assert_eq!(order.expressions[0].key.name.value, "ONE");
    assert_eq!(order.expressions[0].expression.len(), 2);
    assert_eq!(order.expressions[1].expression.len(), 1);

    let Value::Object(node) = &order.expressions[0].expression[1].fields[0].value else {
        panic!("expected an object value");
    };
    assert!(matches!(&node.fields[0].value, Value::Enum(e) if e.value == "DESCENDING"));
}

/// Verifies an empty order definition on a list target.
#[test]
fn empty_order() {
    let order = first_order("order on [Feed] {}");
    assert!(order.expressions.is_empty());
    assert!(matches!(order.ty, TypeRef::List(_)));
}
