//! The AST produced by [`parse`](crate::parse).
//!
//! Every node is a plain owned struct named after its `kind` (`Name`,
//! `FieldDefinition`, `ConnectionType`, ...) with an optional [`Loc`]. Nodes
//! that can appear in the same position are grouped into category enums:
//!
//! - [`TypeRef`]: named, list, non-null, connection, connection-join and
//!   edge types.
//! - [`Value`]: variables and literal values.
//! - [`Definition`]: the top-level definitions of a [`Document`].
//!
//! [`Node`] is the union of all node kinds and is what the
//! [visitor](crate::visitor) hands to callbacks.
//!
//! # JSON form
//!
//! Nodes serialize with serde as objects whose first field is the `kind`
//! string, followed by camelCase fields (`type`, `edgeLabel`,
//! `defaultValue`, ...). Category enums and [`Node`] deserialize by
//! dispatching on `kind`; an object with a missing or unknown `kind` fails
//! with `Invalid AST Node: <json>`.

mod ast_node;
mod definition;
mod directive;
mod document;
mod graph_defs;
mod kind_dispatch;
mod loc;
mod name;
mod node;
mod node_kind;
mod type_system_defs;
mod types;
mod values;

pub use ast_node::AstNode;
pub use definition::Definition;
pub use directive::Argument;
pub use directive::Directive;
pub use document::Document;
pub use graph_defs::DefinitionResult;
pub use graph_defs::FilterCondition;
pub use graph_defs::FilterDefinition;
pub use graph_defs::MutationDefinition;
pub use graph_defs::MutationFieldDefinition;
pub use graph_defs::OrderDefinition;
pub use graph_defs::OrderExpression;
pub use graph_defs::QueryDefinition;
pub use graph_defs::QueryFieldDefinition;
pub use loc::Loc;
pub use name::Name;
pub use node::Node;
pub use node_kind::NodeKind;
pub use node_kind::UnknownNodeKind;
pub use type_system_defs::DirectiveDefinition;
pub use type_system_defs::EnumTypeDefinition;
pub use type_system_defs::EnumValueDefinition;
pub use type_system_defs::FieldDefinition;
pub use type_system_defs::InputObjectTypeDefinition;
pub use type_system_defs::InputValueDefinition;
pub use type_system_defs::InterfaceTypeDefinition;
pub use type_system_defs::ObjectTypeDefinition;
pub use type_system_defs::ScalarTypeDefinition;
pub use type_system_defs::TypeExtensionDefinition;
pub use type_system_defs::UnionTypeDefinition;
pub use types::Cardinality;
pub use types::ConnectionJoinType;
pub use types::ConnectionType;
pub use types::Direction;
pub use types::EdgeType;
pub use types::ListType;
pub use types::NamedType;
pub use types::NonNullType;
pub use types::TypeRef;
pub use values::BooleanValue;
pub use values::EnumValue;
pub use values::FloatValue;
pub use values::IntValue;
pub use values::ListValue;
pub use values::ObjectField;
pub use values::ObjectValue;
pub use values::StringValue;
pub use values::Value;
pub use values::Variable;
