//! Renders AST nodes back into canonical schema text.
//!
//! Printing is a bottom-up reduction run through the
//! [visitor](crate::visitor): every node is formatted on `leave` from the
//! already-printed text of its children. The canonical form:
//!
//! - separates top-level definitions with a blank line and ends the document
//!   with a newline;
//! - prints field, value and condition blocks one entry per line, indented
//!   two spaces, and an empty block as `{}`;
//! - elides absent arguments, directives and default values together with
//!   their separators;
//! - writes `##` descriptions on their own lines above the node they
//!   document.
//!
//! For every valid document `d`, `parse(print(parse(d)))` equals `parse(d)`
//! up to locations.

mod print_error;
mod schema_printer;

pub use print_error::PrintError;
pub use schema_printer::print;
pub use schema_printer::print_json;
