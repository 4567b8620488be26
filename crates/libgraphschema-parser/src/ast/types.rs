use crate::ast::kind_dispatch::deserialize_by_kind;
use crate::ast::Loc;
use crate::ast::Name;
use crate::ast::NodeKind;
use inherent::inherent;
use serde::Deserialize;
use serde::Serialize;

/// A type reference in field, argument or definition position.
///
/// Plain types ([`Named`](Self::Named), [`List`](Self::List),
/// [`NonNull`](Self::NonNull)) appear everywhere. Connection types appear
/// only as object/interface field types and as `filter on`/`order on`
/// targets; edge types appear only as mutation field types.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TypeRef {
    Named(NamedType),
    List(ListType),
    NonNull(NonNullType),
    Connection(ConnectionType),
    ConnectionJoin(ConnectionJoinType),
    Edge(EdgeType),
}

deserialize_by_kind!(TypeRef {
    Named(NamedType),
    List(ListType),
    NonNull(NonNullType),
    Connection(ConnectionType),
    ConnectionJoin(ConnectionJoinType),
    Edge(EdgeType),
});

#[inherent]
impl crate::ast::AstNode for TypeRef {
    pub fn kind(&self) -> NodeKind {
        match self {
            TypeRef::Named(t) => t.kind(),
            TypeRef::List(t) => t.kind(),
            TypeRef::NonNull(t) => t.kind(),
            TypeRef::Connection(t) => t.kind(),
            TypeRef::ConnectionJoin(t) => t.kind(),
            TypeRef::Edge(t) => t.kind(),
        }
    }

    pub fn loc(&self) -> Option<&Loc> {
        match self {
            TypeRef::Named(t) => t.loc(),
            TypeRef::List(t) => t.loc(),
            TypeRef::NonNull(t) => t.loc(),
            TypeRef::Connection(t) => t.loc(),
            TypeRef::ConnectionJoin(t) => t.loc(),
            TypeRef::Edge(t) => t.loc(),
        }
    }
}

/// A reference to a type by name.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub struct NamedType {
    pub name: Name,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loc: Option<Loc>,
}

impl NamedType {
    /// Creates a named type reference without locations.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Name::new(name),
            loc: None,
        }
    }
}

/// `[type]`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub struct ListType {
    #[serde(rename = "type")]
    pub ty: Box<TypeRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loc: Option<Loc>,
}

/// `type!`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub struct NonNullType {
    #[serde(rename = "type")]
    pub ty: Box<TypeRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loc: Option<Loc>,
}

/// Which way a connection or edge points relative to the declaring type.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    In,
    Out,
}

/// Whether a connection reaches at most one node or a collection.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Cardinality {
    Singular,
    Plural,
}

/// A field type reached through a directed, cardinality-qualified edge.
///
/// | source       | direction | cardinality | edge label |
/// |--------------|-----------|-------------|------------|
/// | `--> T`      | OUT       | SINGULAR    | none       |
/// | `==> T`      | OUT       | PLURAL      | none       |
/// | `<-- T`      | IN        | SINGULAR    | none       |
/// | `<== T`      | IN        | PLURAL      | none       |
/// | `-L-> T`     | OUT       | SINGULAR    | `L`        |
/// | `=L=> T`     | OUT       | PLURAL      | `L`        |
/// | `<-L- T`     | IN        | SINGULAR    | `L`        |
/// | `<=L= T`     | IN        | PLURAL      | `L`        |
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub struct ConnectionType {
    #[serde(rename = "type")]
    pub ty: NamedType,
    #[serde(default)]
    pub edge_label: Option<NamedType>,
    pub direction: Direction,
    pub cardinality: Cardinality,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loc: Option<Loc>,
}

/// Two or more chained connections describing a multi-hop traversal, e.g.
/// `<-Fathered- Human <-Fathered- Human`.
///
/// A single connection is never wrapped in a join.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub struct ConnectionJoinType {
    #[serde(deserialize_with = "deserialize_joined_connections")]
    pub connections: Vec<ConnectionType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loc: Option<Loc>,
}

fn deserialize_joined_connections<'de, D>(deserializer: D) -> Result<Vec<ConnectionType>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error as _;
    let connections = Vec::<ConnectionType>::deserialize(deserializer)?;
    if connections.len() < 2 {
        return Err(D::Error::custom(format!(
            "a ConnectionJoinType needs at least 2 connections, found {}",
            connections.len(),
        )));
    }
    Ok(connections)
}

/// A mutation result field reached through an edge: `==> T`, `=L=> T`,
/// `<== T` or `<=L= T`. Edges carry no cardinality.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub struct EdgeType {
    #[serde(rename = "type")]
    pub ty: NamedType,
    #[serde(default)]
    pub edge_label: Option<NamedType>,
    pub direction: Direction,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loc: Option<Loc>,
}
