use crate::ast::Directive;
use crate::ast::EnumValueDefinition;
use crate::ast::InputValueDefinition;
use crate::ast::Loc;
use crate::ast::Name;
use crate::ast::ObjectValue;
use crate::ast::TypeRef;
use serde::Deserialize;
use serde::Serialize;

/// The result shape of a `mutation` or `query` definition.
///
/// Flattened into its definition, so the node carries `"result": "TYPE"`
/// beside a `"type"` key or `"result": "FIELDS"` beside a `"fields"` key.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "result", rename_all = "UPPERCASE")]
pub enum DefinitionResult<F> {
    /// `mutation name(args): Type @directives`
    Type {
        #[serde(rename = "type")]
        ty: TypeRef,
    },
    /// `mutation name(args) @directives { fields }`
    Fields { fields: Vec<F> },
}

impl<F> DefinitionResult<F> {
    pub fn as_type(&self) -> Option<&TypeRef> {
        match self {
            Self::Type { ty } => Some(ty),
            Self::Fields { .. } => None,
        }
    }

    pub fn as_fields(&self) -> Option<&[F]> {
        match self {
            Self::Type { .. } => None,
            Self::Fields { fields } => Some(fields),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub struct MutationDefinition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub name: Name,
    #[serde(default)]
    pub arguments: Vec<InputValueDefinition>,
    #[serde(default)]
    pub directives: Vec<Directive>,
    #[serde(flatten)]
    pub result: DefinitionResult<MutationFieldDefinition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loc: Option<Loc>,
}

/// A field of a mutation's result block. Its type may be an
/// [`EdgeType`](crate::ast::EdgeType) but never a connection.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub struct MutationFieldDefinition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub name: Name,
    #[serde(default)]
    pub arguments: Vec<InputValueDefinition>,
    #[serde(rename = "type")]
    pub ty: TypeRef,
    #[serde(default)]
    pub directives: Vec<Directive>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loc: Option<Loc>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub struct QueryDefinition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub name: Name,
    #[serde(default)]
    pub arguments: Vec<InputValueDefinition>,
    #[serde(default)]
    pub directives: Vec<Directive>,
    #[serde(flatten)]
    pub result: DefinitionResult<QueryFieldDefinition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loc: Option<Loc>,
}

/// A field of a query's result block. Plain types only.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub struct QueryFieldDefinition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub name: Name,
    #[serde(default)]
    pub arguments: Vec<InputValueDefinition>,
    #[serde(rename = "type")]
    pub ty: TypeRef,
    #[serde(default)]
    pub directives: Vec<Directive>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loc: Option<Loc>,
}

/// `filter on <target> { KEY: (args) {condition} ... }`.
///
/// The target is a list type, a named type or a single connection.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub struct FilterDefinition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub ty: TypeRef,
    #[serde(default)]
    pub conditions: Vec<FilterCondition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loc: Option<Loc>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub struct FilterCondition {
    pub key: EnumValueDefinition,
    #[serde(default)]
    pub arguments: Vec<InputValueDefinition>,
    pub condition: ObjectValue,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loc: Option<Loc>,
}

/// `order on <target> { KEY: {expr} | [{expr}, ...] ... }`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub struct OrderDefinition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub ty: TypeRef,
    #[serde(default)]
    pub expressions: Vec<OrderExpression>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loc: Option<Loc>,
}

/// One named ordering. `expression` always holds at least one object; more
/// than one means a tie-break chain written as `[{...}, {...}]`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub struct OrderExpression {
    pub key: EnumValueDefinition,
    #[serde(default)]
    pub expression: Vec<ObjectValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loc: Option<Loc>,
}
