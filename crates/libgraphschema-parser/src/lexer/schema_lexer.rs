//! A stateless lexer over a [`Source`] body.
//!
//! [`SchemaLexer::read_token`] is a pure function of a byte offset: it skips
//! ignored input (whitespace, commas, `#` comments) starting at that offset
//! and returns the next token. The parser threads the end offset of each
//! token back into the next call, so no cursor lives in the lexer itself.
//!
//! # Connection arrows
//!
//! `-`, `=`, `<` and `>` are always single-character tokens. `-->` lexes as
//! `Dash Dash Greater`, `<==` as `Less Equals Equals`. A `-` only becomes
//! part of a token when a digit immediately follows it, in which case it is
//! the sign of a numeric literal: `-4` is `IntValue("-4")` while `- 4` is
//! `Dash IntValue("4")`.
//!
//! # Usage
//!
//! ```rust
//! use libgraphschema_parser::lexer::SchemaLexer;
//! use libgraphschema_parser::token::SchemaTokenKind;
//! use libgraphschema_parser::Source;
//! use std::sync::Arc;
//!
//! let source = Arc::new(Source::new("-->"));
//! let kinds = SchemaLexer::new(&source)
//!     .tokens()
//!     .map(|token| token.unwrap().kind)
//!     .collect::<Vec<_>>();
//! assert_eq!(kinds, vec![
//!     SchemaTokenKind::Dash,
//!     SchemaTokenKind::Dash,
//!     SchemaTokenKind::Greater,
//!     SchemaTokenKind::Eof,
//! ]);
//! ```

use crate::smallvec;
use crate::token::SchemaToken;
use crate::token::SchemaTokenKind;
use crate::ByteSpan;
use crate::SchemaErrorNote;
use crate::SchemaSyntaxError;
use crate::SchemaSyntaxErrorKind;
use crate::Source;
use std::borrow::Cow;
use std::sync::Arc;

type LexResult<'src> = Result<SchemaToken<'src>, SchemaSyntaxError>;

/// Produces [`SchemaToken`]s from a shared [`Source`].
///
/// See module documentation for details.
#[derive(Clone, Debug)]
pub struct SchemaLexer<'src> {
    source: &'src Arc<Source>,
    body: &'src str,
}

impl<'src> SchemaLexer<'src> {
    pub fn new(source: &'src Arc<Source>) -> Self {
        Self {
            source,
            body: source.body.as_str(),
        }
    }

    pub fn source(&self) -> &'src Arc<Source> {
        self.source
    }

    /// Returns an iterator that lexes the whole body, ending after the `Eof`
    /// token or the first error.
    pub fn tokens(&self) -> SchemaTokens<'src> {
        SchemaTokens {
            lexer: self.clone(),
            position: 0,
            finished: false,
        }
    }

    /// Returns the spans of the single-`#` comments in the body, in order.
    ///
    /// Comments are skipped as ignored input and never reach the AST, so a
    /// document printed from a parse of this body loses all of them.
    pub fn comment_spans(&self) -> Result<Vec<ByteSpan>, SchemaSyntaxError> {
        let bytes = self.body.as_bytes();
        let mut spans = vec![];
        let mut gap_start = 0;
        for token in self.tokens() {
            let token = token?;
            let mut pos = gap_start;
            while let Some(offset) = memchr::memchr(b'#', &bytes[pos..token.span.start]) {
                let start = pos + offset;
                let end = self.line_end(start);
                spans.push(ByteSpan::new(start, end));
                pos = end;
            }
            gap_start = token.span.end;
        }
        Ok(spans)
    }

    // =========================================================================
    // Token dispatch
    // =========================================================================

    /// Reads the next token at or after byte offset `from`.
    pub fn read_token(&self, from: usize) -> LexResult<'src> {
        let bytes = self.body.as_bytes();
        let start = self.position_after_whitespace(from)?;

        let Some(&byte) = bytes.get(start) else {
            return Ok(SchemaToken::new(SchemaTokenKind::Eof, bytes.len(), bytes.len()));
        };

        let punctuator = match byte {
            b'!' => Some(SchemaTokenKind::Bang),
            b'$' => Some(SchemaTokenKind::Dollar),
            b'(' => Some(SchemaTokenKind::ParenOpen),
            b')' => Some(SchemaTokenKind::ParenClose),
            b':' => Some(SchemaTokenKind::Colon),
            b'<' => Some(SchemaTokenKind::Less),
            b'=' => Some(SchemaTokenKind::Equals),
            b'>' => Some(SchemaTokenKind::Greater),
            b'@' => Some(SchemaTokenKind::At),
            b'[' => Some(SchemaTokenKind::SquareBracketOpen),
            b']' => Some(SchemaTokenKind::SquareBracketClose),
            b'{' => Some(SchemaTokenKind::CurlyBraceOpen),
            b'|' => Some(SchemaTokenKind::Pipe),
            b'}' => Some(SchemaTokenKind::CurlyBraceClose),
            b'-' if !bytes.get(start + 1).is_some_and(u8::is_ascii_digit) => {
                Some(SchemaTokenKind::Dash)
            },
            _ => None,
        };
        if let Some(kind) = punctuator {
            return Ok(SchemaToken::new(kind, start, start + 1));
        }

        match byte {
            b'#' => Ok(self.lex_description(start)),
            b'"' => self.lex_string(start),
            b'-' | b'0'..=b'9' => self.lex_number(start),
            b if is_name_start(b) => Ok(self.lex_name(start)),
            _ => Err(self.unexpected_character(start)),
        }
    }

    // =========================================================================
    // Ignored input
    // =========================================================================

    /// Skips whitespace, commas, BOMs and single-`#` comments. Stops at a
    /// `##` so that it can be lexed as a description.
    fn position_after_whitespace(&self, from: usize) -> Result<usize, SchemaSyntaxError> {
        let bytes = self.body.as_bytes();
        let mut pos = from;
        while pos < bytes.len() {
            match bytes[pos] {
                b' ' | b'\t' | b'\n' | b'\r' | b',' => pos += 1,
                // U+FEFF
                0xEF if bytes[pos..].starts_with(&[0xEF, 0xBB, 0xBF]) => pos += 3,
                b'#' if bytes.get(pos + 1) == Some(&b'#') => break,
                b'#' => pos = self.line_end(pos),
                b if b < 0x20 => return Err(self.unexpected_character(pos)),
                _ => break,
            }
        }
        Ok(pos)
    }

    /// Returns the offset of the next `\n`/`\r` at or after `from`, or the
    /// end of the body.
    fn line_end(&self, from: usize) -> usize {
        let rest = &self.body.as_bytes()[from..];
        memchr::memchr2(b'\n', b'\r', rest).map_or(self.body.len(), |i| from + i)
    }

    // =========================================================================
    // Descriptions
    // =========================================================================

    /// Lexes a `##` description comment. The value is the rest of the line
    /// after `##`, trimmed.
    fn lex_description(&self, start: usize) -> SchemaToken<'src> {
        let end = self.line_end(start);
        let text = self.body[start + 2..end].trim();
        SchemaToken::new(SchemaTokenKind::Description(Cow::Borrowed(text)), start, end)
    }

    // =========================================================================
    // Names
    // =========================================================================

    /// Lexes `[_A-Za-z][_0-9A-Za-z]*`.
    fn lex_name(&self, start: usize) -> SchemaToken<'src> {
        let bytes = self.body.as_bytes();
        let mut end = start + 1;
        while end < bytes.len() && is_name_continue(bytes[end]) {
            end += 1;
        }
        SchemaToken::new(SchemaTokenKind::name_borrowed(&self.body[start..end]), start, end)
    }

    // =========================================================================
    // Numbers
    // =========================================================================

    /// Lexes an `IntValue` or `FloatValue`:
    ///
    /// ```text
    /// -? (0 | [1-9][0-9]*) (. [0-9]+)? ([eE] [+-]? [0-9]+)?
    /// ```
    fn lex_number(&self, start: usize) -> LexResult<'src> {
        let bytes = self.body.as_bytes();
        let mut pos = start;
        let mut is_float = false;

        if bytes[pos] == b'-' {
            pos += 1;
        }

        if bytes.get(pos) == Some(&b'0') {
            pos += 1;
            if let Some(&next) = bytes.get(pos)
                && next.is_ascii_digit()
            {
                return Err(self.invalid_number(
                    pos,
                    format!("Invalid number, unexpected digit after 0: \"{}\".", next as char),
                ));
            }
        } else {
            pos = self.read_digits(pos)?;
        }

        if bytes.get(pos) == Some(&b'.') {
            is_float = true;
            pos = self.read_digits(pos + 1)?;
        }

        if matches!(bytes.get(pos), Some(b'e') | Some(b'E')) {
            is_float = true;
            pos += 1;
            if matches!(bytes.get(pos), Some(b'+') | Some(b'-')) {
                pos += 1;
            }
            pos = self.read_digits(pos)?;
        }

        let text = Cow::Borrowed(&self.body[start..pos]);
        let kind = if is_float {
            SchemaTokenKind::FloatValue(text)
        } else {
            SchemaTokenKind::IntValue(text)
        };
        Ok(SchemaToken::new(kind, start, pos))
    }

    /// Consumes one or more ASCII digits starting at `pos`.
    fn read_digits(&self, pos: usize) -> Result<usize, SchemaSyntaxError> {
        let bytes = self.body.as_bytes();
        let mut end = pos;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
        if end == pos {
            let found = match self.body[pos..].chars().next() {
                Some(ch) => format!("\"{ch}\""),
                None => "<EOF>".to_string(),
            };
            return Err(self.invalid_number(
                pos,
                format!("Invalid number, expected digit but got: {found}."),
            ));
        }
        Ok(end)
    }

    fn invalid_number(&self, pos: usize, message: String) -> SchemaSyntaxError {
        SchemaSyntaxError::new(
            Arc::clone(self.source),
            pos,
            message,
            SchemaSyntaxErrorKind::InvalidNumber,
        )
    }

    // =========================================================================
    // Strings
    // =========================================================================

    /// Lexes a double-quoted string. The token value is the unescaped
    /// contents; it borrows from the source unless an escape was present.
    fn lex_string(&self, start: usize) -> LexResult<'src> {
        let body = self.body;
        let bytes = body.as_bytes();
        let mut pos = start + 1;
        let mut chunk_start = pos;
        let mut cooked: Option<String> = None;

        loop {
            let Some(&byte) = bytes.get(pos) else {
                return Err(self.unterminated_string(start, pos));
            };
            match byte {
                b'"' => {
                    let value = match cooked {
                        Some(mut owned) => {
                            owned.push_str(&body[chunk_start..pos]);
                            Cow::Owned(owned)
                        },
                        None => Cow::Borrowed(&body[chunk_start..pos]),
                    };
                    return Ok(SchemaToken::new(
                        SchemaTokenKind::StringValue(value),
                        start,
                        pos + 1,
                    ));
                },
                b'\n' | b'\r' => return Err(self.unterminated_string(start, pos)),
                b'\\' => {
                    let owned = cooked.get_or_insert_with(String::new);
                    owned.push_str(&body[chunk_start..pos]);
                    let (ch, escape_len) = self.read_escape(pos)?;
                    owned.push(ch);
                    pos += escape_len;
                    chunk_start = pos;
                },
                b'\t' => pos += 1,
                b if b < 0x20 => {
                    return Err(SchemaSyntaxError::new(
                        Arc::clone(self.source),
                        pos,
                        format!(
                            "Invalid character within String: {}.",
                            describe_char(b as char),
                        ),
                        SchemaSyntaxErrorKind::InvalidCharacterInString {
                            character: b as char,
                        },
                    ));
                },
                b if b < 0x80 => pos += 1,
                _ => {
                    let ch_len = body[pos..].chars().next().map_or(1, char::len_utf8);
                    pos += ch_len;
                },
            }
        }
    }

    /// Decodes the escape sequence starting with the `\` at `pos`. Returns
    /// the decoded character and the byte length of the sequence.
    fn read_escape(&self, pos: usize) -> Result<(char, usize), SchemaSyntaxError> {
        let bytes = self.body.as_bytes();
        let simple = match bytes.get(pos + 1) {
            Some(b'"') => Some('"'),
            Some(b'\\') => Some('\\'),
            Some(b'/') => Some('/'),
            Some(b'b') => Some('\u{0008}'),
            Some(b'f') => Some('\u{000C}'),
            Some(b'n') => Some('\n'),
            Some(b'r') => Some('\r'),
            Some(b't') => Some('\t'),
            _ => None,
        };
        if let Some(ch) = simple {
            return Ok((ch, 2));
        }

        if bytes.get(pos + 1) == Some(&b'u') {
            let hex = bytes
                .get(pos + 2..pos + 6)
                .filter(|hex| hex.iter().all(u8::is_ascii_hexdigit))
                .and_then(|hex| std::str::from_utf8(hex).ok());
            if let Some(ch) = hex
                .and_then(|hex| u32::from_str_radix(hex, 16).ok())
                .and_then(char::from_u32)
            {
                return Ok((ch, 6));
            }
            let sequence: String = self.body[pos..].chars().take(6).collect();
            return Err(self.invalid_escape(pos, sequence));
        }

        let sequence: String = self.body[pos..].chars().take(2).collect();
        Err(self.invalid_escape(pos, sequence))
    }

    fn invalid_escape(&self, pos: usize, sequence: String) -> SchemaSyntaxError {
        SchemaSyntaxError::new(
            Arc::clone(self.source),
            pos,
            format!("Invalid character escape sequence: {sequence}."),
            SchemaSyntaxErrorKind::InvalidEscapeSequence { sequence },
        )
    }

    fn unterminated_string(&self, start: usize, pos: usize) -> SchemaSyntaxError {
        SchemaSyntaxError::with_notes(
            Arc::clone(self.source),
            pos,
            "Unterminated string.",
            SchemaSyntaxErrorKind::UnterminatedString,
            smallvec![
                SchemaErrorNote::general_at("string started here", start),
                SchemaErrorNote::help("strings cannot span lines; close it with `\"`"),
            ],
        )
    }

    // =========================================================================
    // Invalid characters
    // =========================================================================

    fn unexpected_character(&self, pos: usize) -> SchemaSyntaxError {
        let ch = self.body[pos..].chars().next().unwrap_or('\u{FFFD}');
        let mut error = SchemaSyntaxError::new(
            Arc::clone(self.source),
            pos,
            format!("Unexpected character {}.", describe_char(ch)),
            SchemaSyntaxErrorKind::UnexpectedCharacter { character: ch },
        );
        if ch == '\'' {
            error.add_help("string literals use double quotes");
        }
        error
    }
}

// =============================================================================
// Iterator
// =============================================================================

/// Iterator returned by [`SchemaLexer::tokens`].
pub struct SchemaTokens<'src> {
    lexer: SchemaLexer<'src>,
    position: usize,
    finished: bool,
}

impl<'src> Iterator for SchemaTokens<'src> {
    type Item = LexResult<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let result = self.lexer.read_token(self.position);
        match &result {
            Ok(token) => {
                self.position = token.span.end;
                self.finished = matches!(token.kind, SchemaTokenKind::Eof);
            },
            Err(_) => self.finished = true,
        }
        Some(result)
    }
}

// =============================================================================
// Character classes
// =============================================================================

fn is_name_start(byte: u8) -> bool {
    byte == b'_' || byte.is_ascii_alphabetic()
}

fn is_name_continue(byte: u8) -> bool {
    byte == b'_' || byte.is_ascii_alphanumeric()
}

/// Renders a character for error messages: printable characters are quoted,
/// control characters use their `\uXXXX` form.
fn describe_char(ch: char) -> String {
    if ch < ' ' || ch == '\u{7F}' {
        format!("\"\\u{:04X}\"", ch as u32)
    } else {
        format!("\"{ch}\"")
    }
}
