use crate::ast::Loc;
use crate::ast::Name;
use crate::ast::Value;
use serde::Deserialize;
use serde::Serialize;

/// `name: value` inside a directive's argument list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub struct Argument {
    pub name: Name,
    pub value: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loc: Option<Loc>,
}

/// `@name(arguments)`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub struct Directive {
    pub name: Name,
    #[serde(default)]
    pub arguments: Vec<Argument>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loc: Option<Loc>,
}
