//! The token types produced by [`SchemaLexer`](crate::lexer::SchemaLexer)
//! and consumed by the parser.

mod schema_token;
mod schema_token_kind;

pub use schema_token::SchemaToken;
pub use schema_token_kind::SchemaTokenKind;
