//! Lexing of schema-language source text.

mod schema_lexer;

pub use schema_lexer::SchemaLexer;
pub use schema_lexer::SchemaTokens;
