use crate::ast::kind_dispatch::deserialize_by_kind;
use crate::ast::DirectiveDefinition;
use crate::ast::EnumTypeDefinition;
use crate::ast::FilterDefinition;
use crate::ast::InputObjectTypeDefinition;
use crate::ast::InterfaceTypeDefinition;
use crate::ast::Loc;
use crate::ast::MutationDefinition;
use crate::ast::Name;
use crate::ast::NodeKind;
use crate::ast::ObjectTypeDefinition;
use crate::ast::OrderDefinition;
use crate::ast::QueryDefinition;
use crate::ast::ScalarTypeDefinition;
use crate::ast::TypeExtensionDefinition;
use crate::ast::UnionTypeDefinition;
use inherent::inherent;
use serde::Serialize;

/// A top-level definition of a [`Document`](crate::ast::Document).
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Definition {
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
}

deserialize_by_kind!(Definition {
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

impl Definition {
    /// The defined name. `filter` and `order` definitions are anonymous, and
    /// a type extension reports the name of the type it extends.
    pub fn name(&self) -> Option<&Name> {
        match self {
            Definition::Scalar(def) => Some(&def.name),
            Definition::Object(def) => Some(&def.name),
            Definition::Interface(def) => Some(&def.name),
            Definition::Union(def) => Some(&def.name),
            Definition::Enum(def) => Some(&def.name),
            Definition::InputObject(def) => Some(&def.name),
            Definition::TypeExtension(def) => Some(&def.definition.name),
            Definition::Directive(def) => Some(&def.name),
            Definition::Mutation(def) => Some(&def.name),
            Definition::Query(def) => Some(&def.name),
            Definition::Filter(_) | Definition::Order(_) => None,
        }
    }

    /// The `##` description attached to this definition.
    pub fn description(&self) -> Option<&str> {
        let description = match self {
            Definition::Scalar(def) => &def.description,
            Definition::Object(def) => &def.description,
            Definition::Interface(def) => &def.description,
            Definition::Union(def) => &def.description,
            Definition::Enum(def) => &def.description,
            Definition::InputObject(def) => &def.description,
            Definition::TypeExtension(def) => &def.description,
            Definition::Directive(def) => &def.description,
            Definition::Mutation(def) => &def.description,
            Definition::Query(def) => &def.description,
            Definition::Filter(def) => &def.description,
            Definition::Order(def) => &def.description,
        };
        description.as_deref()
    }
}

#[inherent]
impl crate::ast::AstNode for Definition {
    pub fn kind(&self) -> NodeKind {
        match self {
            Definition::Scalar(def) => def.kind(),
            Definition::Object(def) => def.kind(),
            Definition::Interface(def) => def.kind(),
            Definition::Union(def) => def.kind(),
            Definition::Enum(def) => def.kind(),
            Definition::InputObject(def) => def.kind(),
            Definition::TypeExtension(def) => def.kind(),
            Definition::Directive(def) => def.kind(),
            Definition::Mutation(def) => def.kind(),
            Definition::Query(def) => def.kind(),
            Definition::Filter(def) => def.kind(),
            Definition::Order(def) => def.kind(),
        }
    }

    pub fn loc(&self) -> Option<&Loc> {
        match self {
            Definition::Scalar(def) => def.loc(),
            Definition::Object(def) => def.loc(),
            Definition::Interface(def) => def.loc(),
            Definition::Union(def) => def.loc(),
            Definition::Enum(def) => def.loc(),
            Definition::InputObject(def) => def.loc(),
            Definition::TypeExtension(def) => def.loc(),
            Definition::Directive(def) => def.loc(),
            Definition::Mutation(def) => def.loc(),
            Definition::Query(def) => def.loc(),
            Definition::Filter(def) => def.loc(),
            Definition::Order(def) => def.loc(),
        }
    }
}
