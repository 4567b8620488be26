use crate::ast::kind_dispatch::deserialize_by_kind;
use crate::ast::Loc;
use crate::ast::Name;
use crate::ast::NodeKind;
use inherent::inherent;
use serde::Deserialize;
use serde::Serialize;

/// A value literal or variable reference.
///
/// `null` is not a value in this language. The names `true` and `false`
/// parse as [`BooleanValue`]s; any other bare name is an [`EnumValue`].
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Variable(Variable),
    Int(IntValue),
    Float(FloatValue),
    String(StringValue),
    Boolean(BooleanValue),
    Enum(EnumValue),
    List(ListValue),
    Object(ObjectValue),
}

deserialize_by_kind!(Value {
    Variable(Variable),
    Int(IntValue),
    Float(FloatValue),
    String(StringValue),
    Boolean(BooleanValue),
    Enum(EnumValue),
    List(ListValue),
    Object(ObjectValue),
});

#[inherent]
impl crate::ast::AstNode for Value {
    pub fn kind(&self) -> NodeKind {
        match self {
            Value::Variable(v) => v.kind(),
            Value::Int(v) => v.kind(),
            Value::Float(v) => v.kind(),
            Value::String(v) => v.kind(),
            Value::Boolean(v) => v.kind(),
            Value::Enum(v) => v.kind(),
            Value::List(v) => v.kind(),
            Value::Object(v) => v.kind(),
        }
    }

    pub fn loc(&self) -> Option<&Loc> {
        match self {
            Value::Variable(v) => v.loc(),
            Value::Int(v) => v.loc(),
            Value::Float(v) => v.loc(),
            Value::String(v) => v.loc(),
            Value::Boolean(v) => v.loc(),
            Value::Enum(v) => v.loc(),
            Value::List(v) => v.loc(),
            Value::Object(v) => v.loc(),
        }
    }
}

/// `$name`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub struct Variable {
    pub name: Name,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loc: Option<Loc>,
}

/// An integer literal, kept as its source text (e.g. `"-12"`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub struct IntValue {
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loc: Option<Loc>,
}

/// A float literal, kept as its source text (e.g. `"1.5e3"`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub struct FloatValue {
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loc: Option<Loc>,
}

/// A string literal. `value` holds the unescaped contents.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub struct StringValue {
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loc: Option<Loc>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub struct BooleanValue {
    pub value: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loc: Option<Loc>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub struct EnumValue {
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loc: Option<Loc>,
}

/// `[value, ...]`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub struct ListValue {
    #[serde(default)]
    pub values: Vec<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loc: Option<Loc>,
}

/// `{name: value, ...}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub struct ObjectValue {
    #[serde(default)]
    pub fields: Vec<ObjectField>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loc: Option<Loc>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub struct ObjectField {
    pub name: Name,
    pub value: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loc: Option<Loc>,
}
