use crate::ast::ast_node::impl_ast_node;
use crate::ast::kind_dispatch::deserialize_by_kind;
use crate::ast::*;
use serde::Serialize;

macro_rules! define_node {
    ($($node:ident),* $(,)?) => {
        /// Any AST node, one variant per [`NodeKind`].
        ///
        /// This is the type the [visitor](crate::visitor) traverses and hands
        /// to callbacks. Every node struct and category enum converts into a
        /// `Node` with `From`, and back with `TryFrom` (which returns the
        /// `Node` unchanged when its kind does not fit).
        #[derive(Clone, Debug, PartialEq, Serialize)]
        #[serde(untagged)]
        pub enum Node {
            $($node($node)),*
        }

        deserialize_by_kind!(Node { $($node($node)),* });

        impl_ast_node!($($node),*);

        #[inherent::inherent]
        impl AstNode for Node {
            pub fn kind(&self) -> NodeKind {
                match self {
                    $(Node::$node(_) => NodeKind::$node),*
                }
            }

            pub fn loc(&self) -> Option<&Loc> {
                match self {
                    $(Node::$node(node) => node.loc.as_ref()),*
                }
            }
        }

        $(
            impl From<$node> for Node {
                fn from(node: $node) -> Self {
                    Node::$node(node)
                }
            }

            impl TryFrom<Node> for $node {
                type Error = Node;

                fn try_from(node: Node) -> Result<Self, Node> {
                    match node {
                        Node::$node(inner) => Ok(inner),
                        other => Err(other),
                    }
                }
            }
        )*
    };
}

define_node!(
    Name,
    Document,
    Variable,
    Argument,
    IntValue,
    FloatValue,
    StringValue,
    BooleanValue,
    EnumValue,
    ListValue,
    ObjectValue,
    ObjectField,
    Directive,
    NamedType,
    ListType,
    NonNullType,
    ConnectionType,
    ConnectionJoinType,
    EdgeType,
    ScalarTypeDefinition,
    ObjectTypeDefinition,
    FieldDefinition,
    InputValueDefinition,
    InterfaceTypeDefinition,
    UnionTypeDefinition,
    EnumTypeDefinition,
    EnumValueDefinition,
    InputObjectTypeDefinition,
    TypeExtensionDefinition,
    DirectiveDefinition,
    MutationDefinition,
    MutationFieldDefinition,
    QueryDefinition,
    QueryFieldDefinition,
    FilterDefinition,
    FilterCondition,
    OrderDefinition,
    OrderExpression,
);

/// Conversions between a category enum and [`Node`].
macro_rules! category_conversions {
    ($category:ident { $($variant:ident($node:ident)),* $(,)? }) => {
        impl From<$category> for Node {
            fn from(value: $category) -> Self {
                match value {
                    $($category::$variant(inner) => Node::$node(inner)),*
                }
            }
        }

        impl TryFrom<Node> for $category {
            type Error = Node;

            fn try_from(node: Node) -> Result<Self, Node> {
                match node {
                    $(Node::$node(inner) => Ok($category::$variant(inner)),)*
                    other => Err(other),
                }
            }
        }
    };
}

category_conversions!(TypeRef {
    Named(NamedType),
    List(ListType),
    NonNull(NonNullType),
    Connection(ConnectionType),
    ConnectionJoin(ConnectionJoinType),
    Edge(EdgeType),
});

category_conversions!(Value {
    Variable(Variable),
    Int(IntValue),
    Float(FloatValue),
    String(StringValue),
    Boolean(BooleanValue),
    Enum(EnumValue),
    List(ListValue),
    Object(ObjectValue),
});

category_conversions!(Definition {
    Scalar(ScalarTypeDefinition),
    Object(ObjectTypeDefinition),
    Interface(InterfaceTypeDefinition),
    Union(UnionTypeDefinition),
    Enum(EnumTypeDefinition),
    InputObject(InputObjectTypeDefinition),
    TypeExtension(TypeExtensionDefinition),
    Directive(DirectiveDefinition),
    Mutation(MutationDefinition),
    Query(QueryDefinition),
    Filter(FilterDefinition),
    Order(OrderDefinition),
});
