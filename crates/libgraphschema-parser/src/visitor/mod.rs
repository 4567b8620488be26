//! Depth-first traversal and structural editing of AST nodes.
//!
//! [`visit`] walks a [`Node`] tree, calling a [`Visitor`]'s `enter` before a
//! node's children and `leave` after them. Which children are walked, and in
//! which order, comes from a [`KeyTable`] ([`SchemaKeys`] by default). Each
//! callback answers with a [`VisitAction`], which can rewrite the tree as it
//! is walked:
//!
//! ```rust
//! use libgraphschema_parser::ast::{Node, NodeKind};
//! use libgraphschema_parser::visitor::{VisitAction, VisitorTable};
//!
//! let doc = libgraphschema_parser::parse("type Foo { bar: String }").unwrap();
//! let mut renamer = VisitorTable::new().on_leave(NodeKind::Name, |node, _ctx| {
//!     match node {
//!         Node::Name(name) if name.value == "String" => {
//!             VisitAction::Replace(Node::Name(
//!                 libgraphschema_parser::ast::Name::new("Text"),
//!             ))
//!         },
//!         _ => VisitAction::Continue,
//!     }
//! });
//! let edited = libgraphschema_parser::visit(doc, &mut renamer).unwrap().unwrap();
//! let text = libgraphschema_parser::print(&edited).unwrap();
//! assert_eq!(text, "type Foo {\n  bar: Text\n}\n");
//! ```
//!
//! [`Node`]: crate::ast::Node

mod key_table;
mod visit_action;
mod visit_context;
mod visit_error;
mod visitor;
mod visitor_table;
mod walker;

pub use key_table::KeyTable;
pub use key_table::SchemaKeys;
pub use visit_action::VisitAction;
pub use visit_context::VisitContext;
pub use visit_error::VisitError;
pub use visitor::Visitor;
pub use visitor_table::VisitorTable;
pub use walker::visit;
pub use walker::visit_with_keys;
