//! Tests for `##` description comments and the nodes they attach to.

use crate::ast::Definition;
use crate::ast::DefinitionResult;
use crate::tests::utils::first_filter;
use crate::tests::utils::first_mutation;
use crate::tests::utils::first_object;
use crate::tests::utils::first_order;
use crate::tests::utils::parse_ok;
use crate::tests::utils::single_definition;

/// Verifies that a single `##` line describes the following definition.
#[test]
fn describes_definition() {
    let object = first_object("## A thing.\ntype Thing { id: ID }");
    assert_eq!(object.description.as_deref(), Some("A thing."));
    assert_eq!(object.fields[0].description, None);
}

/// Verifies that consecutive `##` lines are joined with newlines and that
/// an empty `##` line contributes an empty line.
#[test]
fn joins_multiline_descriptions() {
    let object = first_object("## First line.\n##\n##   Third line.  \ntype Thing { id: ID }");
    assert_eq!(object.description.as_deref(), Some("First line.\n\nThird line."));
}

/// Verifies that plain `#` comments are not descriptions and do not break
/// a run of `##` lines.
#[test]
fn plain_comments_are_ignored() {
    let object = first_object("# not me\n## one\n# skipped\n## two\ntype Thing { id: ID }");
    assert_eq!(object.description.as_deref(), Some("one\ntwo"));

    let object = first_object("# only a comment\ntype Thing { id: ID }");
    assert_eq!(object.description, None);
}

/// Verifies that every top-level definition kind accepts a description.
#[test]
fn every_definition_kind_accepts_a_description() {
    let document = parse_ok(
        r#"
## d
scalar S
## d
type T { f: S }
## d
interface I { f: S }
## d
union U = T
## d
enum E { A }
## d
input In { f: S }
## d
extend type T { g: S }
## d
directive @dir on FIELD_DEFINITION
## d
mutation m: S
## d
query q: S
## d
filter on [T] { }
## d
order on [T] { }
"#,
    );
    assert_eq!(document.definitions.len(), 12);
    for definition in &document.definitions {
        assert_eq!(definition.description(), Some("d"), "{:?}", definition.kind());
    }
}

/// Verifies that the description before `extend` belongs to the extension,
/// not to the extended object.
#[test]
fn extension_owns_its_description() {
    let Definition::TypeExtension(extension) =
        single_definition("## Adds more.\nextend type Foo { bar: String }")
    else {
        panic!("expected a type extension");
    };
    assert_eq!(extension.description.as_deref(), Some("Adds more."));
    assert_eq!(extension.definition.description, None);
}

/// Verifies descriptions on fields, arguments and enum values.
#[test]
fn describes_members() {
    let object = first_object(
        "type Foo {\n  ## The bar.\n  bar(\n    ## Arg.\n    arg: Int\n  ): String\n  baz: Int\n}",
    );
    assert_eq!(object.fields[0].description.as_deref(), Some("The bar."));
    assert_eq!(object.fields[0].arguments[0].description.as_deref(), Some("Arg."));
    assert_eq!(object.fields[1].description, None);

    let Definition::Enum(enumeration) =
        single_definition("enum Color {\n  ## Warm.\n  RED\n  BLUE\n}")
    else {
        panic!("expected an enum");
    };
    assert_eq!(enumeration.values[0].description.as_deref(), Some("Warm."));
    assert_eq!(enumeration.values[1].description, None);
}

/// Verifies descriptions on input object fields.
#[test]
fn describes_input_fields() {
    let Definition::InputObject(input) =
        single_definition("input Point {\n  ## Horizontal.\n  x: Float = 0.5\n}")
    else {
        panic!("expected an input object");
    };
    assert_eq!(input.fields[0].description.as_deref(), Some("Horizontal."));
}

/// Verifies descriptions on mutation result fields.
#[test]
fn describes_mutation_fields() {
    let mutation = first_mutation("## Adds.\nmutation add {\n  ## The edge.\n  edge: ==> Foo\n}");
    assert_eq!(mutation.description.as_deref(), Some("Adds."));
    let DefinitionResult::Fields { fields } = &mutation.result else {
        panic!("expected result fields");
    };
    assert_eq!(fields[0].description.as_deref(), Some("The edge."));
}

/// Verifies that filter condition and order expression keys take the
/// description written before them.
#[test]
fn describes_filter_and_order_keys() {
    let filter = first_filter("filter on [Foo] {\n  ## Only big ones.\n  BIG: { size: { gt: 9 } }\n}");
    assert_eq!(filter.conditions[0].key.description.as_deref(), Some("Only big ones."));

    let order = first_order("order on [Foo] {\n  ## By size.\n  SIZE: { size: ASCENDING }\n}");
    assert_eq!(order.expressions[0].key.description.as_deref(), Some("By size."));
}

/// Verifies that a description in a position that does not accept one is
/// dropped rather than leaking onto a later node.
#[test]
fn stray_descriptions_are_dropped() {
    let document = parse_ok("type Foo {\n  bar: String\n  ## dangling\n}\ntype Baz { qux: Int }");
    let Definition::Object(foo) = &document.definitions[0] else {
        panic!("expected an object type definition");
    };
    assert_eq!(foo.fields.len(), 1);
    assert_eq!(document.definitions[1].description(), None);

    let document = parse_ok("type Foo @dir(\n  ## misplaced\n  arg: 1\n) { bar: Int }\ntype Baz { qux: Int }");
    for definition in &document.definitions {
        assert_eq!(definition.description(), None);
    }
}
