/// Categorizes syntax errors for programmatic handling.
///
/// The `#[error(...)]` messages are terse. The full human-readable message
/// lives in [`SchemaSyntaxError::message`](crate::SchemaSyntaxError::message).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SchemaSyntaxErrorKind {
    /// The parser expected one of `expected` but found another token.
    ///
    /// ```text
    /// type User { name String }
    ///                  ^ Expected :, found Name "String"
    /// ```
    #[error("unexpected token: {found}")]
    UnexpectedToken {
        expected: Vec<String>,
        found: String,
    },

    /// The document ended before the current production was complete.
    #[error("unexpected end of input")]
    UnexpectedEof {
        expected: Vec<String>,
    },

    /// A character that cannot start any token.
    #[error("unexpected character {character:?}")]
    UnexpectedCharacter {
        character: char,
    },

    /// A string literal without a closing `"` before the end of its line.
    #[error("unterminated string")]
    UnterminatedString,

    /// A control character inside a string literal.
    #[error("invalid character {character:?} within string")]
    InvalidCharacterInString {
        character: char,
    },

    /// An unknown `\x` escape or malformed `\uXXXX` escape.
    #[error("invalid escape sequence `{sequence}`")]
    InvalidEscapeSequence {
        sequence: String,
    },

    /// A malformed numeric literal (leading zero, missing digits).
    #[error("invalid number")]
    InvalidNumber,

    /// Lists, objects or list types nested deeper than
    /// [`ParseOptions::max_depth`](crate::ParseOptions::max_depth).
    #[error("nesting deeper than {limit} levels")]
    NestingTooDeep {
        limit: usize,
    },
}
