//! A parsing library for the graph schema language: GraphQL type system
//! definitions extended with directional connection fields
//! (`-->`, `<=Label=`, ...), `mutation` / `query` shorthand definitions and
//! declarative `filter` / `order` definitions.
//!
//! The pipeline is text -> tokens -> AST -> text:
//!
//! - [`lexer::SchemaLexer`] turns a [`Source`] into tokens on demand.
//! - [`parse()`] runs the fail-fast recursive-descent parser and returns an
//!   [`ast::Document`] whose nodes carry byte-offset [`ast::Loc`]s.
//! - [`visit()`] walks (and optionally rewrites) any AST node.
//! - [`print()`] renders an AST back into canonical text.
//!
//! ```rust
//! let doc = libgraphschema_parser::parse(
//!     "type Human { parents: <-Fathered- Human }",
//! ).unwrap();
//! let text = libgraphschema_parser::print(&doc).unwrap();
//! assert_eq!(text, "type Human {\n  parents: <-Fathered- Human\n}\n");
//! ```

pub mod ast;
mod byte_span;
pub mod lexer;
mod parse_options;
pub mod printer;
mod schema_error_note;
mod schema_error_note_kind;
mod schema_error_notes;
mod schema_parser;
mod schema_syntax_error;
mod schema_syntax_error_kind;
mod source;
mod source_location;
pub mod token;
pub mod utils;
pub mod visitor;

pub use byte_span::ByteSpan;
pub use parse_options::ParseOptions;
pub use printer::print;
pub use printer::print_json;
pub use printer::PrintError;
pub use schema_error_note::SchemaErrorNote;
pub use schema_error_note_kind::SchemaErrorNoteKind;
pub use schema_error_notes::SchemaErrorNotes;
pub use schema_parser::parse;
pub use schema_parser::parse_value;
pub use schema_parser::parse_value_with_options;
pub use schema_parser::parse_with_options;
pub use schema_parser::SchemaParser;
pub use schema_syntax_error::SchemaSyntaxError;
pub use schema_syntax_error_kind::SchemaSyntaxErrorKind;
pub use smallvec::smallvec;
pub use smallvec::SmallVec;
pub use source::IntoSource;
pub use source::Source;
pub use source_location::get_location;
pub use source_location::SourceLocation;
pub use utils::extract_variables_from_object_values;
pub use visitor::visit;
pub use visitor::visit_with_keys;

#[cfg(test)]
mod tests;
