//! Tests for [`crate::lexer::SchemaLexer`]: arrow punctuation, the
//! dash/negative-number split, descriptions and literal tokens.

use crate::lexer::SchemaLexer;
use crate::tests::utils::lex_all;
use crate::token::SchemaTokenKind;
use crate::SchemaSyntaxErrorKind;
use crate::Source;
use std::borrow::Cow;
use std::sync::Arc;

fn name(value: &'static str) -> SchemaTokenKind<'static> {
    SchemaTokenKind::Name(Cow::Borrowed(value))
}

fn int(value: &'static str) -> SchemaTokenKind<'static> {
    SchemaTokenKind::IntValue(Cow::Borrowed(value))
}

/// Lexes `source` expecting the first token to fail.
fn lex_error(source: &str) -> crate::SchemaSyntaxError {
    let source = Arc::new(Source::new(source));
    SchemaLexer::new(&source)
        .tokens()
        .find_map(Result::err)
        .expect("expected a lexer error")
}

// =============================================================================
// Descriptions
// =============================================================================

/// Verifies that a `##` comment lexes as a description token covering the
/// whole line, with the text after `##` trimmed.
#[test]
fn lexes_description_comments() {
    assert_eq!(lex_all("## test description"), vec![
        (SchemaTokenKind::Description(Cow::Borrowed("test description")), 0, 19),
        (SchemaTokenKind::Eof, 19, 19),
    ]);
}

/// Verifies that single-`#` comments are skipped entirely while a following
/// `##` line is still lexed.
#[test]
fn skips_plain_comments_but_not_descriptions() {
    assert_eq!(lex_all("# ignored\n##kept\nfoo"), vec![
        (SchemaTokenKind::Description(Cow::Borrowed("kept")), 10, 16),
        (name("foo"), 17, 20),
        (SchemaTokenKind::Eof, 20, 20),
    ]);
}

/// Verifies that an empty `##` line lexes as an empty description.
#[test]
fn lexes_empty_description() {
    assert_eq!(lex_all("##\r\n"), vec![
        (SchemaTokenKind::Description(Cow::Borrowed("")), 0, 2),
        (SchemaTokenKind::Eof, 4, 4),
    ]);
}

// =============================================================================
// Dashes and arrows
// =============================================================================

/// Verifies that a `-` followed by whitespace is a dash, not a sign.
#[test]
fn dash_not_followed_by_digit_is_dash() {
    assert_eq!(lex_all("- 4"), vec![
        (SchemaTokenKind::Dash, 0, 1),
        (int("4"), 2, 3),
        (SchemaTokenKind::Eof, 3, 3),
    ]);
    assert_eq!(lex_all("-- 4"), vec![
        (SchemaTokenKind::Dash, 0, 1),
        (SchemaTokenKind::Dash, 1, 2),
        (int("4"), 3, 4),
        (SchemaTokenKind::Eof, 4, 4),
    ]);
}

/// Verifies that a `-` immediately followed by a digit is the sign of a
/// numeric literal.
#[test]
fn dash_followed_by_digit_is_negative_number() {
    assert_eq!(lex_all("-4 -0.5"), vec![
        (int("-4"), 0, 2),
        (SchemaTokenKind::FloatValue(Cow::Borrowed("-0.5")), 3, 7),
        (SchemaTokenKind::Eof, 7, 7),
    ]);
}

/// Verifies that each arrow is lexed one character at a time.
#[test]
fn lexes_unlabeled_arrows() {
    let kinds = |source: &str| {
        lex_all(source).into_iter().map(|(kind, _, _)| kind).collect::<Vec<_>>()
    };
    use SchemaTokenKind::*;
    assert_eq!(kinds("-->"), vec![Dash, Dash, Greater, Eof]);
    assert_eq!(kinds("<--"), vec![Less, Dash, Dash, Eof]);
    assert_eq!(kinds("==>"), vec![Equals, Equals, Greater, Eof]);
    assert_eq!(kinds("<=="), vec![Less, Equals, Equals, Eof]);
}

/// Verifies token spans of a labeled outgoing arrow written with spaces.
#[test]
fn lexes_spaced_labeled_arrow() {
    assert_eq!(lex_all("- Authored -> User"), vec![
        (SchemaTokenKind::Dash, 0, 1),
        (name("Authored"), 2, 10),
        (SchemaTokenKind::Dash, 11, 12),
        (SchemaTokenKind::Greater, 12, 13),
        (name("User"), 14, 18),
        (SchemaTokenKind::Eof, 18, 18),
    ]);
}

/// Verifies that a labeled incoming plural arrow lexes label and arrow
/// parts separately.
#[test]
fn lexes_compact_labeled_arrow() {
    assert_eq!(lex_all("<=Label= Foo"), vec![
        (SchemaTokenKind::Less, 0, 1),
        (SchemaTokenKind::Equals, 1, 2),
        (name("Label"), 2, 7),
        (SchemaTokenKind::Equals, 7, 8),
        (name("Foo"), 9, 12),
        (SchemaTokenKind::Eof, 12, 12),
    ]);
}

// =============================================================================
// Ignored input
// =============================================================================

/// Verifies that commas, tabs, line breaks and a leading BOM are ignored.
#[test]
fn skips_ignored_characters() {
    assert_eq!(lex_all("\u{FEFF}\t a ,,\r\n b"), vec![
        (name("a"), 5, 6),
        (name("b"), 12, 13),
        (SchemaTokenKind::Eof, 13, 13),
    ]);
}

/// Verifies that control characters other than whitespace are rejected.
#[test]
fn rejects_control_characters() {
    let error = lex_error("a \u{0007}");
    assert_eq!(error.message(), "Unexpected character \"\\u0007\".");
    assert_eq!(error.position(), 2);
}

/// Verifies that an unknown punctuator is reported with its character.
#[test]
fn rejects_unknown_character() {
    let error = lex_error("?");
    assert_eq!(error.message(), "Unexpected character \"?\".");
    assert!(matches!(
        error.kind(),
        SchemaSyntaxErrorKind::UnexpectedCharacter { character: '?' },
    ));
}

/// Verifies that comment spans cover plain `#` comments only, not
/// descriptions or `#` inside strings.
#[test]
fn finds_comment_spans() {
    let source = Arc::new(Source::new(
        "# one\n## described\nscalar S @d(a: \"#no\") # two\n#\n",
    ));
    let spans = SchemaLexer::new(&source)
        .comment_spans()
        .unwrap()
        .into_iter()
        .map(|span| &source.body[span.start..span.end])
        .collect::<Vec<_>>();
    assert_eq!(spans, vec!["# one", "# two", "#"]);

    let source = Arc::new(Source::new("## only a description\nscalar S"));
    assert!(SchemaLexer::new(&source).comment_spans().unwrap().is_empty());
}

// =============================================================================
// Numbers
// =============================================================================

/// Verifies integer and float literal shapes.
#[test]
fn lexes_numbers() {
    let values = |source: &str| {
        lex_all(source)
            .into_iter()
            .filter_map(|(kind, _, _)| match kind {
                SchemaTokenKind::IntValue(v) => Some(format!("int {v}")),
                SchemaTokenKind::FloatValue(v) => Some(format!("float {v}")),
                _ => None,
            })
            .collect::<Vec<_>>()
    };
    assert_eq!(values("0 9 -9 123"), vec!["int 0", "int 9", "int -9", "int 123"]);
    assert_eq!(values("4.123 -1.5 1e10 1E-3 2.5e+4"), vec![
        "float 4.123",
        "float -1.5",
        "float 1e10",
        "float 1E-3",
        "float 2.5e+4",
    ]);
}

/// Verifies that a leading zero followed by a digit is rejected.
#[test]
fn rejects_leading_zero() {
    let error = lex_error("00");
    assert_eq!(error.message(), "Invalid number, unexpected digit after 0: \"0\".");
    assert!(matches!(error.kind(), SchemaSyntaxErrorKind::InvalidNumber));
}

/// Verifies that a fraction or exponent without digits is rejected.
#[test]
fn rejects_incomplete_numbers() {
    assert_eq!(lex_error("1.").message(), "Invalid number, expected digit but got: <EOF>.");
    assert_eq!(lex_error("1.A").message(), "Invalid number, expected digit but got: \"A\".");
    assert_eq!(lex_error("1e").message(), "Invalid number, expected digit but got: <EOF>.");
}

// =============================================================================
// Strings
// =============================================================================

/// Verifies that string values are unescaped by the lexer and the span
/// covers the quotes.
#[test]
fn lexes_strings_with_escapes() {
    assert_eq!(lex_all(r#""simple""#)[0], (
        SchemaTokenKind::StringValue(Cow::Borrowed("simple")),
        0,
        8,
    ));
    let (kind, start, end) = lex_all(r#""quote \" slash \/ \u00e9 \n""#).remove(0);
    assert_eq!(kind, SchemaTokenKind::StringValue(Cow::Owned(
        "quote \" slash / \u{e9} \n".to_string(),
    )));
    assert_eq!((start, end), (0, 29));
}

/// Verifies the unterminated-string error, including the note pointing at
/// the opening quote.
#[test]
fn rejects_unterminated_string() {
    let error = lex_error("  \"no end\nfoo");
    assert_eq!(error.message(), "Unterminated string.");
    assert!(matches!(error.kind(), SchemaSyntaxErrorKind::UnterminatedString));
    assert!(error.notes().iter().any(|note| note.position == Some(2)));
}

/// Verifies that an unknown escape sequence is rejected.
#[test]
fn rejects_bad_escape() {
    let error = lex_error(r#""\x""#);
    assert_eq!(error.message(), "Invalid character escape sequence: \\x.");
    assert!(matches!(
        error.kind(),
        SchemaSyntaxErrorKind::InvalidEscapeSequence { .. },
    ));
}

// =============================================================================
// Statelessness
// =============================================================================

/// Verifies that `read_token` depends only on its offset argument.
#[test]
fn read_token_is_pure() {
    let source = Arc::new(Source::new("type Foo"));
    let lexer = SchemaLexer::new(&source);
    let second = lexer.read_token(4).unwrap();
    let first = lexer.read_token(0).unwrap();
    assert_eq!(second, lexer.read_token(4).unwrap());
    assert_eq!(first.kind, SchemaTokenKind::Name(Cow::Borrowed("type")));
    assert_eq!((second.span.start, second.span.end), (5, 8));
}

/// Verifies that the token iterator ends after `Eof`.
#[test]
fn tokens_iterator_stops_after_eof() {
    let source = Arc::new(Source::new("a"));
    let lexer = SchemaLexer::new(&source);
    assert_eq!(lexer.tokens().count(), 2);
}
