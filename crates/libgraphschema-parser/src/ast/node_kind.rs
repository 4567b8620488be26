use std::str::FromStr;

macro_rules! define_node_kinds {
    ($($kind:ident),* $(,)?) => {
        /// The `kind` discriminant of every AST node.
        ///
        /// The string form ([`as_str`](Self::as_str)) is the stable name used
        /// in the JSON form of the AST and in visitor key tables.
        #[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
        pub enum NodeKind {
            $($kind),*
        }

        impl NodeKind {
            /// Every node kind, in declaration order.
            pub const ALL: &'static [NodeKind] = &[$(NodeKind::$kind),*];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $(NodeKind::$kind => stringify!($kind)),*
                }
            }
        }
    };
}

define_node_kinds!(
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

impl NodeKind {
    /// Reads the `kind` of a JSON-form node, if it names a known kind.
    pub fn of_json(value: &serde_json::Value) -> Option<NodeKind> {
        value.get("kind")?.as_str()?.parse().ok()
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a string that is not a [`NodeKind`] name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown node kind `{0}`")]
pub struct UnknownNodeKind(pub String);

impl FromStr for NodeKind {
    type Err = UnknownNodeKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NodeKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownNodeKind(s.to_string()))
    }
}
