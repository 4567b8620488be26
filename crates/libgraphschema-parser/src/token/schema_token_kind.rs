use std::borrow::Cow;

/// The kind of a schema-language token.
///
/// Arrow shapes such as `-->`, `<==` or `=Label=>` are never single tokens:
/// the lexer emits one [`Dash`](Self::Dash), [`Equals`](Self::Equals),
/// [`Less`](Self::Less) or [`Greater`](Self::Greater) per character and the
/// parser assembles connections from them.
///
/// Payloads borrow from the source text where possible. A `StringValue`
/// holds the unescaped contents (owned only when an escape was present).
#[derive(Clone, Debug, PartialEq)]
pub enum SchemaTokenKind<'src> {
    // =========================================================================
    // Punctuators
    // =========================================================================
    /// `@`
    At,
    /// `!`
    Bang,
    /// `:`
    Colon,
    /// `}`
    CurlyBraceClose,
    /// `{`
    CurlyBraceOpen,
    /// `-` (when not the sign of a numeric literal)
    Dash,
    /// `$`
    Dollar,
    /// `=`
    Equals,
    /// `>`
    Greater,
    /// `<`
    Less,
    /// `)`
    ParenClose,
    /// `(`
    ParenOpen,
    /// `|`
    Pipe,
    /// `]`
    SquareBracketClose,
    /// `[`
    SquareBracketOpen,

    // =========================================================================
    // Literals
    // =========================================================================
    Name(Cow<'src, str>),

    /// Source text of an integer literal, including a leading `-`.
    IntValue(Cow<'src, str>),

    /// Source text of a float literal, including a leading `-`.
    FloatValue(Cow<'src, str>),

    /// Unescaped contents of a string literal (without the quotes).
    StringValue(Cow<'src, str>),

    /// Text of a `##` description comment after the `##`, trimmed.
    Description(Cow<'src, str>),

    Eof,
}

impl<'src> SchemaTokenKind<'src> {
    pub fn name_borrowed(s: &'src str) -> Self {
        Self::Name(Cow::Borrowed(s))
    }

    pub fn name_owned(s: String) -> Self {
        Self::Name(Cow::Owned(s))
    }

    /// Returns `true` for the single-character connection-arrow tokens that
    /// can open a connection type (`-`, `=`, `<`).
    pub fn is_connection_prefix(&self) -> bool {
        matches!(self, Self::Dash | Self::Equals | Self::Less)
    }

    /// Returns the display name of this kind as used in syntax errors
    /// (`Expected Name, found EOF`).
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::At => "@",
            Self::Bang => "!",
            Self::Colon => ":",
            Self::CurlyBraceClose => "}",
            Self::CurlyBraceOpen => "{",
            Self::Dash => "-",
            Self::Dollar => "$",
            Self::Equals => "=",
            Self::Greater => ">",
            Self::Less => "<",
            Self::ParenClose => ")",
            Self::ParenOpen => "(",
            Self::Pipe => "|",
            Self::SquareBracketClose => "]",
            Self::SquareBracketOpen => "[",
            Self::Name(_) => "Name",
            Self::IntValue(_) => "Int",
            Self::FloatValue(_) => "Float",
            Self::StringValue(_) => "String",
            Self::Description(_) => "Description",
            Self::Eof => "EOF",
        }
    }

    /// Returns the textual payload of value-carrying tokens.
    pub fn value(&self) -> Option<&str> {
        match self {
            Self::Name(s)
            | Self::IntValue(s)
            | Self::FloatValue(s)
            | Self::StringValue(s)
            | Self::Description(s) => Some(s.as_ref()),
            _ => None,
        }
    }

    /// Compares token kinds, ignoring payloads.
    ///
    /// The match on `self` is exhaustive so that adding a token kind forces
    /// this comparison to be revisited.
    pub fn same_kind(&self, other: &SchemaTokenKind<'_>) -> bool {
        match self {
            Self::Name(_) => matches!(other, SchemaTokenKind::Name(_)),
            Self::IntValue(_) => matches!(other, SchemaTokenKind::IntValue(_)),
            Self::FloatValue(_) => matches!(other, SchemaTokenKind::FloatValue(_)),
            Self::StringValue(_) => matches!(other, SchemaTokenKind::StringValue(_)),
            Self::Description(_) => matches!(other, SchemaTokenKind::Description(_)),
            Self::At => matches!(other, SchemaTokenKind::At),
            Self::Bang => matches!(other, SchemaTokenKind::Bang),
            Self::Colon => matches!(other, SchemaTokenKind::Colon),
            Self::CurlyBraceClose => matches!(other, SchemaTokenKind::CurlyBraceClose),
            Self::CurlyBraceOpen => matches!(other, SchemaTokenKind::CurlyBraceOpen),
            Self::Dash => matches!(other, SchemaTokenKind::Dash),
            Self::Dollar => matches!(other, SchemaTokenKind::Dollar),
            Self::Equals => matches!(other, SchemaTokenKind::Equals),
            Self::Greater => matches!(other, SchemaTokenKind::Greater),
            Self::Less => matches!(other, SchemaTokenKind::Less),
            Self::ParenClose => matches!(other, SchemaTokenKind::ParenClose),
            Self::ParenOpen => matches!(other, SchemaTokenKind::ParenOpen),
            Self::Pipe => matches!(other, SchemaTokenKind::Pipe),
            Self::SquareBracketClose => matches!(other, SchemaTokenKind::SquareBracketClose),
            Self::SquareBracketOpen => matches!(other, SchemaTokenKind::SquareBracketOpen),
            Self::Eof => matches!(other, SchemaTokenKind::Eof),
        }
    }

    /// Converts any borrowed payload into an owned one.
    pub fn into_owned(self) -> SchemaTokenKind<'static> {
        match self {
            Self::Name(s) => SchemaTokenKind::Name(Cow::Owned(s.into_owned())),
            Self::IntValue(s) => SchemaTokenKind::IntValue(Cow::Owned(s.into_owned())),
            Self::FloatValue(s) => SchemaTokenKind::FloatValue(Cow::Owned(s.into_owned())),
            Self::StringValue(s) => SchemaTokenKind::StringValue(Cow::Owned(s.into_owned())),
            Self::Description(s) => SchemaTokenKind::Description(Cow::Owned(s.into_owned())),
            Self::At => SchemaTokenKind::At,
            Self::Bang => SchemaTokenKind::Bang,
            Self::Colon => SchemaTokenKind::Colon,
            Self::CurlyBraceClose => SchemaTokenKind::CurlyBraceClose,
            Self::CurlyBraceOpen => SchemaTokenKind::CurlyBraceOpen,
            Self::Dash => SchemaTokenKind::Dash,
            Self::Dollar => SchemaTokenKind::Dollar,
            Self::Equals => SchemaTokenKind::Equals,
            Self::Greater => SchemaTokenKind::Greater,
            Self::Less => SchemaTokenKind::Less,
            Self::ParenClose => SchemaTokenKind::ParenClose,
            Self::ParenOpen => SchemaTokenKind::ParenOpen,
            Self::Pipe => SchemaTokenKind::Pipe,
            Self::SquareBracketClose => SchemaTokenKind::SquareBracketClose,
            Self::SquareBracketOpen => SchemaTokenKind::SquareBracketOpen,
            Self::Eof => SchemaTokenKind::Eof,
        }
    }
}
