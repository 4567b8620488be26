use crate::ast::NodeKind;

/// Maps each node kind to the ordered child keys the walker descends into.
///
/// Keys name the JSON field of the child slot (`"edgeLabel"`, `"type"`,
/// ...). A key the node does not have is ignored, so a custom table can
/// only narrow or reorder a walk.
pub trait KeyTable {
    fn keys(&self, kind: NodeKind) -> &[&'static str];
}

/// The default key table: every child of every node, in source order.
#[derive(Clone, Copy, Debug, Default)]
pub struct SchemaKeys;

impl KeyTable for SchemaKeys {
    fn keys(&self, kind: NodeKind) -> &[&'static str] {
        match kind {
            NodeKind::Name => &[],
            NodeKind::Document => &["definitions"],
            NodeKind::Variable => &["name"],
            NodeKind::Argument => &["name", "value"],

            NodeKind::IntValue
            | NodeKind::FloatValue
            | NodeKind::StringValue
            | NodeKind::BooleanValue
            | NodeKind::EnumValue => &[],
            NodeKind::ListValue => &["values"],
            NodeKind::ObjectValue => &["fields"],
            NodeKind::ObjectField => &["name", "value"],

            NodeKind::Directive => &["name", "arguments"],

            NodeKind::NamedType => &["name"],
            NodeKind::ListType | NodeKind::NonNullType => &["type"],
            NodeKind::ConnectionType | NodeKind::EdgeType => &["edgeLabel", "type"],
            NodeKind::ConnectionJoinType => &["connections"],

            NodeKind::ScalarTypeDefinition => &["name", "directives"],
            NodeKind::ObjectTypeDefinition => &["name", "interfaces", "directives", "fields"],
            NodeKind::FieldDefinition => &["name", "arguments", "type", "directives"],
            NodeKind::InputValueDefinition => &["name", "type", "defaultValue", "directives"],
            NodeKind::InterfaceTypeDefinition => &["name", "directives", "fields"],
            NodeKind::UnionTypeDefinition => &["name", "directives", "types"],
            NodeKind::EnumTypeDefinition => &["name", "directives", "values"],
            NodeKind::EnumValueDefinition => &["name", "directives"],
            NodeKind::InputObjectTypeDefinition => &["name", "directives", "fields"],
            NodeKind::TypeExtensionDefinition => &["definition"],
            NodeKind::DirectiveDefinition => &["name", "arguments", "locations"],

            NodeKind::MutationDefinition | NodeKind::QueryDefinition => {
                &["name", "arguments", "directives", "type", "fields"]
            },
            NodeKind::MutationFieldDefinition | NodeKind::QueryFieldDefinition => {
                &["name", "arguments", "type", "directives"]
            },
            NodeKind::FilterDefinition => &["type", "conditions"],
            NodeKind::FilterCondition => &["key", "arguments", "condition"],
            NodeKind::OrderDefinition => &["type", "expressions"],
            NodeKind::OrderExpression => &["key", "expression"],
        }
    }
}

impl<F> KeyTable for F
where
    F: Fn(NodeKind) -> &'static [&'static str],
{
    fn keys(&self, kind: NodeKind) -> &[&'static str] {
        self(kind)
    }
}
