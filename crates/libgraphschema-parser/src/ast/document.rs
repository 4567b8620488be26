use crate::ast::Definition;
use crate::ast::Loc;
use serde::Deserialize;
use serde::Serialize;

/// A parsed schema document: one or more definitions.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub struct Document {
    #[serde(default)]
    pub definitions: Vec<Definition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loc: Option<Loc>,
}
